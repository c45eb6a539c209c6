//! Filtered views over the catalog

use super::Catalog;
use crate::content::PostMeta;

/// Combined search and filter input
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub query: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
}

/// The currently displayed subset of a catalog
///
/// Every operation recomputes the view from the full catalog.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    visible: Vec<usize>,
}

impl CatalogView {
    pub fn new(catalog: Catalog) -> Self {
        let visible = (0..catalog.len()).collect();
        Self { catalog, visible }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Posts currently in view, in catalog order
    pub fn posts(&self) -> impl Iterator<Item = &PostMeta> {
        let posts = self.catalog.posts();
        self.visible.iter().map(move |&i| &posts[i])
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn reset(&mut self) {
        self.visible = (0..self.catalog.len()).collect();
    }

    /// Free-text search; an empty query shows the whole catalog
    pub fn search(&mut self, query: &str) {
        let term = query.trim().to_lowercase();
        self.retain(|post| matches_query(post, &term));
    }

    /// Category equality and tag membership; `None` or empty matches all
    pub fn filter(&mut self, category: Option<&str>, tag: Option<&str>) {
        self.retain(|post| matches_filters(post, category, tag));
    }

    /// Query and filters together
    pub fn apply(&mut self, criteria: &Criteria) {
        let term = criteria.query.as_deref().unwrap_or("").trim().to_lowercase();
        let category = criteria.category.as_deref();
        let tag = criteria.tag.as_deref();
        self.retain(|post| matches_query(post, &term) && matches_filters(post, category, tag));
    }

    fn retain<F: Fn(&PostMeta) -> bool>(&mut self, keep: F) {
        self.visible = self
            .catalog
            .posts()
            .iter()
            .enumerate()
            .filter(|(_, post)| keep(post))
            .map(|(i, _)| i)
            .collect();
    }
}

/// `term` must already be trimmed and lowercased
fn matches_query(post: &PostMeta, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    post.title.to_lowercase().contains(term)
        || post.excerpt.to_lowercase().contains(term)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(term))
        || post
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(term))
}

fn matches_filters(post: &PostMeta, category: Option<&str>, tag: Option<&str>) -> bool {
    let category_match = match category.filter(|c| !c.is_empty()) {
        Some(wanted) => post.category.as_deref() == Some(wanted),
        None => true,
    };
    let tag_match = match tag.filter(|t| !t.is_empty()) {
        Some(wanted) => post.tags.iter().any(|t| t == wanted),
        None => true,
    };
    category_match && tag_match
}
