//! Search results on the list page

use tokio::sync::mpsc;

use super::{SearchIndex, SearchOutcome};
use crate::page::{ids, Document};
use crate::templates::{RenderError, TemplateRenderer};

/// Renders ranked results into the list page grid
pub struct SearchController<'a> {
    index: Option<SearchIndex>,
    templates: &'a TemplateRenderer,
}

impl<'a> SearchController<'a> {
    /// A controller whose index is not built yet
    pub fn new(templates: &'a TemplateRenderer) -> Self {
        Self {
            index: None,
            templates,
        }
    }

    pub fn with_index(index: SearchIndex, templates: &'a TemplateRenderer) -> Self {
        Self {
            index: Some(index),
            templates,
        }
    }

    pub fn initialize(&mut self, index: SearchIndex) {
        self.index = Some(index);
    }

    pub fn is_initialized(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Option<&SearchIndex> {
        self.index.as_ref()
    }

    /// Run one query against the page
    pub fn perform_search(&self, doc: &mut Document, query: &str) -> Result<(), RenderError> {
        let Some(index) = &self.index else {
            tracing::warn!("Search is not initialized yet, ignoring {:?}", query);
            return Ok(());
        };

        let query = query.trim();
        match index.search(query) {
            SearchOutcome::Cleared => self.clear(doc),
            SearchOutcome::Hits(hits) => {
                tracing::debug!("{} results for {:?}", hits.len(), query);
                self.templates
                    .show_posts(doc, hits.iter().map(|hit| hit.post))?;
                doc.set_text(
                    ids::POSTS_COUNT,
                    &format!("{} results for \"{}\"", hits.len(), query),
                );
                Ok(())
            }
        }
    }

    /// Show the whole catalog again
    pub fn clear(&self, doc: &mut Document) -> Result<(), RenderError> {
        if let Some(index) = &self.index {
            self.templates
                .show_posts(doc, index.entries().iter().map(|entry| &entry.post))?;
        }
        doc.set_text(ids::POSTS_COUNT, "All posts");
        Ok(())
    }

    /// Apply queries as they arrive, calling `on_update` after each one
    pub async fn run<F>(
        &self,
        doc: &mut Document,
        mut queries: mpsc::Receiver<String>,
        mut on_update: F,
    ) -> Result<(), RenderError>
    where
        F: FnMut(&str, &Document),
    {
        while let Some(query) = queries.recv().await {
            self.perform_search(doc, &query)?;
            on_update(&query, doc);
        }
        Ok(())
    }
}
