//! Asset sources - where `posts.json` and `pages/<file>` come from

mod dir;
mod http;

pub use dir::DirSource;
pub use http::HttpSource;

use serde::de::DeserializeOwned;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while fetching or decoding a static asset
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A read-only store of static site assets addressed by relative path
#[allow(async_fn_in_trait)]
pub trait AssetSource {
    /// Fetch an asset as text
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;

    /// Fetch an asset and decode it as JSON
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let text = self.fetch_text(path).await?;
        serde_json::from_str(&text).map_err(|source| FetchError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// The source selected from configuration
pub enum Source {
    Dir(DirSource),
    Http(HttpSource),
}

impl Source {
    /// Pick an HTTP source for http(s) URLs, a directory source otherwise
    pub fn from_location(location: &str, base_dir: &std::path::Path) -> anyhow::Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Source::Http(HttpSource::new(location)?))
        } else {
            let path = PathBuf::from(location);
            let root = if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            };
            Ok(Source::Dir(DirSource::new(root)))
        }
    }
}

impl AssetSource for Source {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        match self {
            Source::Dir(dir) => dir.fetch_text(path).await,
            Source::Http(http) => http.fetch_text(path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_location_picks_http() {
        let base = std::path::Path::new("/tmp");
        let source = Source::from_location("https://example.com/blog/", base).unwrap();
        assert!(matches!(source, Source::Http(_)));
    }

    #[test]
    fn test_from_location_resolves_relative_dir() {
        let base = std::path::Path::new("/srv/site");
        match Source::from_location("public", base).unwrap() {
            Source::Dir(dir) => assert_eq!(dir.root(), std::path::Path::new("/srv/site/public")),
            Source::Http(_) => panic!("expected a directory source"),
        }
    }
}
