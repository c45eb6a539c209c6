//! blog-viewer: the client side of a static markdown blog
//!
//! A catalog page with search, filters, and a light/dark theme, plus a
//! single-post viewer. Everything is read from a static site: a `posts.json`
//! catalog and markdown files under `pages/`, from a directory or over HTTP.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod page;
pub mod search;
pub mod server;
pub mod source;
pub mod templates;
pub mod theme;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The viewer application
#[derive(Debug, Clone)]
pub struct BlogViewer {
    /// Viewer configuration
    pub config: config::ViewerConfig,
    /// Base directory, where `_viewer.yml` and the preference store live
    pub base_dir: PathBuf,
}

impl BlogViewer {
    /// Create a viewer for a directory, reading `_viewer.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_viewer.yml");

        let config = if config_path.exists() {
            config::ViewerConfig::load(&config_path)?
        } else {
            config::ViewerConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Override where the site is read from
    pub fn with_source(mut self, location: Option<String>) -> Self {
        if let Some(location) = location {
            self.config.source = location;
        }
        self
    }

    pub fn source(&self) -> Result<source::Source> {
        source::Source::from_location(&self.config.source, &self.base_dir)
    }

    /// The on-disk theme preference store
    pub fn theme_store(&self) -> theme::FileStore {
        theme::FileStore::new(
            self.base_dir.join(&self.config.storage_file),
            &self.config.theme_key,
        )
    }

    pub fn templates(&self) -> Result<templates::TemplateRenderer> {
        Ok(templates::TemplateRenderer::new(&self.config)?)
    }
}
