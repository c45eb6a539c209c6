//! Viewer configuration (_viewer.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::theme::Theme;

/// Main viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Where the site lives: a directory path or an http(s) base URL
    pub source: String,
    pub posts_file: String,
    pub pages_dir: String,

    // Pages
    pub list_page: String,
    pub post_page: String,
    pub site_title: String,

    /// chrono format string for post dates
    pub date_format: String,

    // Preference storage
    pub storage_file: String,
    pub theme_key: String,
    /// Stand-in for the OS color scheme when nothing is stored
    pub system_theme: Theme,

    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source: ".".to_string(),
            posts_file: "posts.json".to_string(),
            pages_dir: "pages".to_string(),

            list_page: "/".to_string(),
            post_page: "post.html".to_string(),
            site_title: "Blog".to_string(),

            date_format: "%B %-d, %Y".to_string(),

            storage_file: ".blog-viewer/storage.json".to_string(),
            theme_key: "blog-theme".to_string(),
            system_theme: Theme::Light,

            search: SearchConfig::default(),
            markdown: MarkdownConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ViewerConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Path of a post's markdown file relative to the source root
    pub fn page_path(&self, file: &str) -> String {
        format!("{}/{}", self.pages_dir.trim_end_matches('/'), file)
    }
}

/// Live search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a live-typed query runs
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

/// Markdown rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// When false the body is shown as preformatted text
    pub enabled: bool,
    pub highlight: bool,
    pub highlight_theme: String,
    /// Render single newlines as `<br>`
    pub breaks: bool,
    /// Pass raw HTML in markdown through instead of escaping it
    pub raw_html: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            highlight: true,
            highlight_theme: "base16-ocean.dark".to_string(),
            breaks: true,
            raw_html: false,
        }
    }
}

/// Preview server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.posts_file, "posts.json");
        assert_eq!(config.theme_key, "blog-theme");
        assert_eq!(config.search.debounce_ms, 300);
        assert!(config.markdown.enabled);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
source: https://example.github.io/
system_theme: dark
search:
  debounce_ms: 150
markdown:
  highlight: false
"#;
        let config: ViewerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.source, "https://example.github.io/");
        assert_eq!(config.system_theme, Theme::Dark);
        assert_eq!(config.search.debounce_ms, 150);
        assert!(!config.markdown.highlight);
        assert!(config.markdown.enabled);
        assert_eq!(config.pages_dir, "pages");
    }

    #[test]
    fn test_page_path() {
        let config = ViewerConfig::default();
        assert_eq!(config.page_path("2024/intro.md"), "pages/2024/intro.md");
    }
}
