//! Shared page fragments rendered with Tera
//!
//! Both the catalog and the search results render their grid through
//! [`TemplateRenderer::show_posts`].

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::config::ViewerConfig;
use crate::content::PostMeta;
use crate::helpers::{encode_uri_component, format_post_date};
use crate::page::{ids, Document};

/// Failure while rendering a fragment
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

#[derive(Serialize)]
struct TagList<'a> {
    tags: &'a [String],
}

/// Fragment renderer with the embedded templates
pub struct TemplateRenderer {
    tera: Tera,
    date_format: String,
    post_page: String,
    list_page: String,
}

impl TemplateRenderer {
    pub fn new(config: &ViewerConfig) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("post_card.html", include_str!("blog/post_card.html")),
            ("error_panel.html", include_str!("blog/error_panel.html")),
            ("no_results.html", include_str!("blog/no_results.html")),
            (
                "partials/tag_chips.html",
                include_str!("blog/tag_chips.html"),
            ),
        ])?;

        Ok(Self {
            tera,
            date_format: config.date_format.clone(),
            post_page: config.post_page.clone(),
            list_page: config.list_page.clone(),
        })
    }

    pub fn format_date(&self, raw: &str) -> String {
        format_post_date(raw, &self.date_format)
    }

    /// Link to the viewer page for a post
    pub fn post_href(&self, file: &str) -> String {
        format!("{}?file={}", self.post_page, encode_uri_component(file))
    }

    /// One summary card
    pub fn post_card(&self, post: &PostMeta) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("post", post);
        context.insert("href", &self.post_href(&post.file));
        context.insert("date", &self.format_date(&post.date));
        context.insert("chip_class", "post-card-tag");
        Ok(self.tera.render("post_card.html", &context)?)
    }

    /// Tag chips for the post page
    pub fn tag_chips(&self, tags: &[String]) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("post", &TagList { tags });
        context.insert("chip_class", "post-tag");
        Ok(self.tera.render("partials/tag_chips.html", &context)?)
    }

    /// Error panel with a link back to the list page
    pub fn error_panel(&self, message: &str) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("message", message);
        context.insert("back_href", &self.list_page);
        Ok(self.tera.render("error_panel.html", &context)?)
    }

    pub fn no_results(&self, message: &str) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("message", message);
        Ok(self.tera.render("no_results.html", &context)?)
    }

    /// Fill the grid with cards, or switch to the empty state
    ///
    /// Calling this twice with the same posts leaves the page unchanged.
    pub fn show_posts<'a, I>(&self, doc: &mut Document, posts: I) -> Result<(), RenderError>
    where
        I: IntoIterator<Item = &'a PostMeta>,
    {
        if !doc.has(ids::POSTS_GRID) {
            return Ok(());
        }

        let mut grid = String::new();
        let mut count = 0;
        for post in posts {
            grid.push_str(&self.post_card(post)?);
            count += 1;
        }

        if count == 0 {
            if doc.has(ids::NO_POSTS) {
                doc.set_html(ids::POSTS_GRID, "");
                doc.show(ids::NO_POSTS);
            } else {
                let block = self.no_results("No results found.")?;
                doc.set_html(ids::POSTS_GRID, block);
            }
        } else {
            doc.set_html(ids::POSTS_GRID, grid);
            doc.hide(ids::NO_POSTS);
        }

        Ok(())
    }
}
