//! Helper functions shared by the page components

mod date;
mod html;

pub use date::*;
pub use html::*;
