//! Post loader - resolves a `?file=` query into a merged post

use thiserror::Error;

use super::{FrontMatter, Post};
use crate::catalog::Catalog;
use crate::config::ViewerConfig;
use crate::helpers::query_param;
use crate::source::{AssetSource, FetchError};

/// Why a post could not be shown
#[derive(Debug, Error)]
pub enum PostError {
    #[error("No post file was specified.")]
    NoFileSpecified,

    #[error("Failed to load the post list: {0}")]
    CatalogUnavailable(#[source] FetchError),

    #[error("Post not found: {file}")]
    NotFound { file: String },

    #[error("Failed to load the markdown file for {file}: {source}")]
    BodyUnavailable {
        file: String,
        #[source]
        source: FetchError,
    },
}

/// The post requested by the page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    file: Option<String>,
}

impl PostQuery {
    /// Read the `file` parameter from a URL or bare query string
    pub fn from_url(url: &str) -> Self {
        Self {
            file: query_param(url, "file").filter(|file| !file.is_empty()),
        }
    }

    pub fn for_file(file: &str) -> Self {
        Self {
            file: Some(file.to_string()).filter(|file| !file.is_empty()),
        }
    }

    pub fn file(&self) -> Result<&str, PostError> {
        self.file.as_deref().ok_or(PostError::NoFileSpecified)
    }
}

/// Where the post page is in its lifecycle
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Rendered(Box<Post>),
    Failed(PostError),
}

impl LoadState {
    pub fn post(&self) -> Option<&Post> {
        match self {
            LoadState::Rendered(post) => Some(post),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

impl From<Result<Post, PostError>> for LoadState {
    fn from(result: Result<Post, PostError>) -> Self {
        match result {
            Ok(post) => LoadState::Rendered(Box::new(post)),
            Err(e) => LoadState::Failed(e),
        }
    }
}

/// Fetches catalog record and markdown body for a single post
pub struct PostLoader<'a, S> {
    source: &'a S,
    config: &'a ViewerConfig,
}

impl<'a, S: AssetSource> PostLoader<'a, S> {
    pub fn new(source: &'a S, config: &'a ViewerConfig) -> Self {
        Self { source, config }
    }

    /// Load the post named by the query: catalog, record, body, front matter
    pub async fn load(&self, query: &PostQuery) -> Result<Post, PostError> {
        let file = query.file()?;

        let catalog = Catalog::fetch(self.source, &self.config.posts_file)
            .await
            .map_err(PostError::CatalogUnavailable)?;

        let meta = catalog
            .find(file)
            .cloned()
            .ok_or_else(|| PostError::NotFound {
                file: file.to_string(),
            })?;

        let markdown = self
            .source
            .fetch_text(&self.config.page_path(file))
            .await
            .map_err(|source| PostError::BodyUnavailable {
                file: file.to_string(),
                source,
            })?;

        let (front_matter, body) = FrontMatter::parse(&markdown);
        tracing::debug!(
            "Loaded {} with {} front-matter fields",
            file,
            front_matter.len()
        );

        Ok(Post::merge(meta, front_matter, body))
    }

    /// Like [`load`](Self::load), folded into the page state
    pub async fn open(&self, query: &PostQuery) -> LoadState {
        let state = LoadState::from(self.load(query).await);
        if let LoadState::Failed(e) = &state {
            tracing::error!("Failed to load post: {}", e);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DirSource;
    use std::fs;
    use tempfile::TempDir;

    const POSTS: &str = r#"[
        {"file": "rust.md", "title": "Rust Ownership", "excerpt": "Borrowing", "date": "2024-01-15", "category": "Programming", "tags": ["rust"]},
        {"file": "missing.md", "title": "Missing Body", "date": "2024-02-01"}
    ]"#;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("posts.json"), POSTS).unwrap();
        fs::create_dir_all(dir.path().join("pages")).unwrap();
        fs::write(
            dir.path().join("pages/rust.md"),
            "---\ntitle: \"Ownership in Rust\"\ntags: [\"rust\", \"memory\"]\nauthor: kim\n---\n# Moves\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_query_from_url() {
        let query = PostQuery::from_url("https://blog.example/post.html?file=notes%2Frust.md");
        assert_eq!(query.file().unwrap(), "notes/rust.md");

        assert!(matches!(
            PostQuery::from_url("post.html").file(),
            Err(PostError::NoFileSpecified)
        ));
        assert!(matches!(
            PostQuery::from_url("post.html?file=").file(),
            Err(PostError::NoFileSpecified)
        ));
    }

    #[tokio::test]
    async fn test_load_merges_front_matter() {
        let dir = site();
        let source = DirSource::new(dir.path());
        let config = ViewerConfig::default();
        let loader = PostLoader::new(&source, &config);

        let post = loader.load(&PostQuery::for_file("rust.md")).await.unwrap();
        assert_eq!(post.meta.title, "Ownership in Rust");
        assert_eq!(post.meta.tags, vec!["rust", "memory"]);
        assert_eq!(post.meta.category.as_deref(), Some("Programming"));
        assert_eq!(post.meta.excerpt, "Borrowing");
        assert_eq!(post.extra["author"].as_text(), Some("kim"));
        assert_eq!(post.content, "# Moves\n");
    }

    #[tokio::test]
    async fn test_each_failure_is_distinct() {
        let dir = site();
        let source = DirSource::new(dir.path());
        let config = ViewerConfig::default();
        let loader = PostLoader::new(&source, &config);

        let state = loader.open(&PostQuery::from_url("post.html")).await;
        assert!(matches!(state, LoadState::Failed(PostError::NoFileSpecified)));

        let err = loader.load(&PostQuery::for_file("nope.md")).await.unwrap_err();
        assert!(matches!(err, PostError::NotFound { .. }));
        assert_eq!(err.to_string(), "Post not found: nope.md");

        let err = loader
            .load(&PostQuery::for_file("missing.md"))
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::BodyUnavailable { .. }));

        fs::remove_file(dir.path().join("posts.json")).unwrap();
        let err = loader.load(&PostQuery::for_file("rust.md")).await.unwrap_err();
        assert!(matches!(err, PostError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn test_rendered_state() {
        let dir = site();
        let source = DirSource::new(dir.path());
        let config = ViewerConfig::default();
        let loader = PostLoader::new(&source, &config);

        let state = loader.open(&PostQuery::for_file("rust.md")).await;
        assert!(!state.is_loading());
        assert_eq!(state.post().map(|p| p.meta.file.as_str()), Some("rust.md"));
    }
}
