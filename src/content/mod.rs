//! Content module - single post loading, front matter, and markdown

mod comments;
mod frontmatter;
mod loader;
mod markdown;
mod post;
mod view;

pub use comments::{giscus_script, mount_comments};
pub use frontmatter::{FrontMatter, FrontValue};
pub use loader::{LoadState, PostError, PostLoader, PostQuery};
pub use markdown::{render_plain, Highlighter, MarkdownRenderer};
pub use post::{Post, PostMeta};
pub use view::PostView;
