//! Catalog page: filter options, grid, and posts count

use super::{Catalog, CatalogView, Criteria};
use crate::page::{ids, Document, SelectOption};
use crate::templates::{RenderError, TemplateRenderer};

/// Drives the list page from a catalog
pub struct CatalogController<'a> {
    view: CatalogView,
    templates: &'a TemplateRenderer,
}

impl<'a> CatalogController<'a> {
    pub fn new(catalog: Catalog, templates: &'a TemplateRenderer) -> Self {
        Self {
            view: CatalogView::new(catalog),
            templates,
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn catalog(&self) -> &Catalog {
        self.view.catalog()
    }

    /// First paint: grid, filter options, loading indicator off
    pub fn mount(&self, doc: &mut Document) -> Result<(), RenderError> {
        self.render(doc)?;
        self.populate_filters(doc);
        doc.hide(ids::LOADING);
        Ok(())
    }

    pub fn handle_search(&mut self, doc: &mut Document, query: &str) -> Result<(), RenderError> {
        self.view.search(query);
        self.render(doc)?;
        self.update_count(doc);
        Ok(())
    }

    pub fn handle_filter(
        &mut self,
        doc: &mut Document,
        category: Option<&str>,
        tag: Option<&str>,
    ) -> Result<(), RenderError> {
        self.view.filter(category, tag);
        self.render(doc)?;
        self.update_count(doc);
        Ok(())
    }

    pub fn handle_criteria(
        &mut self,
        doc: &mut Document,
        criteria: &Criteria,
    ) -> Result<(), RenderError> {
        self.view.apply(criteria);
        self.render(doc)?;
        self.update_count(doc);
        Ok(())
    }

    /// Back to the full catalog
    pub fn clear_search(&mut self, doc: &mut Document) -> Result<(), RenderError> {
        self.view.reset();
        self.render(doc)
    }

    pub fn render(&self, doc: &mut Document) -> Result<(), RenderError> {
        self.templates.show_posts(doc, self.view.posts())
    }

    /// Replace every option after the leading "all" entry
    pub fn populate_filters(&self, doc: &mut Document) {
        let catalog = self.view.catalog();
        replace_options(doc, ids::CATEGORY_FILTER, catalog.categories());
        replace_options(doc, ids::TAG_FILTER, catalog.tags());
    }

    pub fn update_count(&self, doc: &mut Document) {
        let count = self.view.len();
        let noun = if count == 1 { "post" } else { "posts" };
        doc.set_text(ids::POSTS_COUNT, &format!("{} {}", count, noun));
    }
}

fn replace_options(doc: &mut Document, id: &str, values: &[String]) {
    let Some(element) = doc.element_mut(id) else {
        return;
    };
    element.options.truncate(1);
    element
        .options
        .extend(values.iter().map(|value| SelectOption::new(value)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::config::ViewerConfig;

    fn templates() -> TemplateRenderer {
        TemplateRenderer::new(&ViewerConfig::default()).unwrap()
    }

    fn option_values(doc: &Document, id: &str) -> Vec<String> {
        doc.element(id)
            .unwrap()
            .options
            .iter()
            .map(|o| o.value.clone())
            .collect()
    }

    #[test]
    fn test_mount_renders_grid_and_filters() {
        let templates = templates();
        let controller = CatalogController::new(sample_catalog(), &templates);
        let mut doc = Document::list_page("Blog");
        doc.show(ids::LOADING);

        controller.mount(&mut doc).unwrap();

        let grid = doc.html(ids::POSTS_GRID).unwrap();
        assert_eq!(grid.matches("class=\"post-card\"").count(), 3);
        assert_eq!(
            option_values(&doc, ids::CATEGORY_FILTER),
            vec!["", "Life", "Programming"]
        );
        assert_eq!(
            option_values(&doc, ids::TAG_FILTER),
            vec!["", "go", "memory", "rust"]
        );
        assert!(doc.is_hidden(ids::LOADING));
    }

    #[test]
    fn test_repopulating_filters_keeps_single_all_option() {
        let templates = templates();
        let controller = CatalogController::new(sample_catalog(), &templates);
        let mut doc = Document::list_page("Blog");

        controller.populate_filters(&mut doc);
        controller.populate_filters(&mut doc);
        assert_eq!(option_values(&doc, ids::CATEGORY_FILTER).len(), 3);
    }

    #[test]
    fn test_search_updates_grid_and_count() {
        let templates = templates();
        let mut controller = CatalogController::new(sample_catalog(), &templates);
        let mut doc = Document::list_page("Blog");
        controller.mount(&mut doc).unwrap();

        controller.handle_search(&mut doc, "weekend").unwrap();
        assert!(doc.html(ids::POSTS_GRID).unwrap().contains("Weekend Trip"));
        assert_eq!(doc.html(ids::POSTS_COUNT), Some("1 post"));

        controller.handle_search(&mut doc, "nothing matches").unwrap();
        assert!(!doc.is_hidden(ids::NO_POSTS));
        assert_eq!(doc.html(ids::POSTS_COUNT), Some("0 posts"));
    }

    #[test]
    fn test_filter_and_clear() {
        let templates = templates();
        let mut controller = CatalogController::new(sample_catalog(), &templates);
        let mut doc = Document::list_page("Blog");

        controller
            .handle_filter(&mut doc, Some("Life"), None)
            .unwrap();
        assert_eq!(controller.view().len(), 1);

        controller.clear_search(&mut doc).unwrap();
        assert_eq!(controller.view().len(), 3);
        assert!(doc.is_hidden(ids::NO_POSTS));
    }

    #[test]
    fn test_empty_catalog_shows_empty_state() {
        let templates = templates();
        let controller = CatalogController::new(Catalog::default(), &templates);
        let mut doc = Document::list_page("Blog");

        controller.mount(&mut doc).unwrap();
        assert_eq!(doc.html(ids::POSTS_GRID), Some(""));
        assert!(!doc.is_hidden(ids::NO_POSTS));
        assert_eq!(option_values(&doc, ids::TAG_FILTER), vec![""]);
    }
}
