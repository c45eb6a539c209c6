//! Search - relevance-ranked queries over an index of the catalog

mod controller;
mod debounce;
mod index;

pub use controller::SearchController;
pub use debounce::{Debouncer, InputEvent};
pub use index::{split_terms, IndexEntry, SearchHit, SearchIndex, SearchOutcome};
