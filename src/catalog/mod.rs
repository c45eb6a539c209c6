//! Catalog - the full collection of post metadata and filtered views over it

mod controller;
mod view;

pub use controller::CatalogController;
pub use view::{CatalogView, Criteria};

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::content::PostMeta;
use crate::source::{AssetSource, FetchError};

/// The post metadata collection, immutable once built
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    posts: Arc<[PostMeta]>,
    categories: Arc<[String]>,
    tags: Arc<[String]>,
}

impl Catalog {
    pub fn new(posts: Vec<PostMeta>) -> Self {
        let mut categories = BTreeSet::new();
        let mut tags = BTreeSet::new();

        for post in &posts {
            if let Some(category) = post.category.as_deref().filter(|c| !c.is_empty()) {
                categories.insert(category.to_string());
            }
            tags.extend(post.tags.iter().filter(|t| !t.is_empty()).cloned());
        }

        Self {
            posts: posts.into(),
            categories: categories.into_iter().collect(),
            tags: tags.into_iter().collect(),
        }
    }

    /// Fetch and decode the catalog, reporting failures
    pub async fn fetch<S: AssetSource>(source: &S, path: &str) -> Result<Self, FetchError> {
        let posts: Vec<PostMeta> = source.fetch_json(path).await?;
        tracing::debug!("Loaded {} posts from {}", posts.len(), path);
        Ok(Self::new(posts))
    }

    /// Fetch the catalog, degrading to an empty one on any failure
    pub async fn load<S: AssetSource>(source: &S, path: &str) -> Self {
        match Self::fetch(source, path).await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Failed to load posts, showing an empty catalog: {}", e);
                Self::default()
            }
        }
    }

    pub fn posts(&self) -> &[PostMeta] {
        &self.posts
    }

    /// Distinct categories, sorted ascending
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct tags, sorted ascending
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn find(&self, file: &str) -> Option<&PostMeta> {
        self.posts.iter().find(|post| post.file == file)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
