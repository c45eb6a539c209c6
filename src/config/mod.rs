//! Configuration module

mod viewer;

pub use viewer::MarkdownConfig;
pub use viewer::SearchConfig;
pub use viewer::ServerConfig;
pub use viewer::ViewerConfig;
