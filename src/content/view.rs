//! Post page rendering

use super::comments::mount_comments;
use super::loader::LoadState;
use super::markdown::render_plain;
use super::{MarkdownRenderer, Post};
use crate::config::ViewerConfig;
use crate::page::{ids, Document};
use crate::templates::{RenderError, TemplateRenderer};

/// Renders a [`LoadState`] into the post page
pub struct PostView<'a> {
    templates: &'a TemplateRenderer,
    markdown: Option<MarkdownRenderer>,
    site_title: String,
}

impl<'a> PostView<'a> {
    pub fn new(config: &ViewerConfig, templates: &'a TemplateRenderer) -> Self {
        let markdown = config
            .markdown
            .enabled
            .then(|| MarkdownRenderer::from_config(&config.markdown));
        Self {
            templates,
            markdown,
            site_title: config.site_title.clone(),
        }
    }

    /// Render post bodies as escaped plain text
    pub fn without_markdown(mut self) -> Self {
        self.markdown = None;
        self
    }

    pub fn render(&self, doc: &mut Document, state: &LoadState) -> Result<(), RenderError> {
        match state {
            LoadState::Loading => {
                doc.show(ids::LOADING);
                Ok(())
            }
            LoadState::Rendered(post) => {
                self.render_post(doc, post)?;
                mount_comments(doc);
                doc.hide(ids::LOADING);
                Ok(())
            }
            LoadState::Failed(e) => {
                self.render_error(doc, &e.to_string())?;
                doc.hide(ids::LOADING);
                Ok(())
            }
        }
    }

    fn render_post(&self, doc: &mut Document, post: &Post) -> Result<(), RenderError> {
        let title = post.title();
        doc.title = format!("{} - {}", title, self.site_title);
        doc.set_text(ids::PAGE_TITLE, title);
        doc.set_text(ids::POST_TITLE, title);
        doc.set_text(ids::POST_DATE, &self.templates.format_date(&post.meta.date));

        if !post.meta.tags.is_empty() {
            let chips = self.templates.tag_chips(&post.meta.tags)?;
            doc.set_html(ids::POST_TAGS, chips);
        }

        let body = match &self.markdown {
            Some(renderer) => renderer.render(&post.content),
            None => render_plain(&post.content),
        };
        doc.set_html(ids::POST_CONTENT, body);
        Ok(())
    }

    fn render_error(&self, doc: &mut Document, message: &str) -> Result<(), RenderError> {
        let panel = self.templates.error_panel(message)?;
        doc.set_html(ids::POST_CONTENT, panel);
        Ok(())
    }
}
