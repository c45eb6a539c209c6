//! HTTP-backed asset source

use anyhow::Result;

use super::{AssetSource, FetchError};

/// Fetches assets with plain GET requests relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: String,
}

impl HttpSource {
    /// Create a source rooted at `base` (a trailing slash is added if missing)
    pub fn new(base: &str) -> Result<Self> {
        reqwest::Url::parse(base)?;
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }
}

impl AssetSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| FetchError::Transport { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    async fn serve(dir: &TempDir) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = crate::server::router(dir.path().to_path_buf());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_url_for() {
        let source = HttpSource::new("https://example.com/blog").unwrap();
        assert_eq!(
            source.url_for("/posts.json"),
            "https://example.com/blog/posts.json"
        );
    }

    #[test]
    fn test_rejects_invalid_base() {
        assert!(HttpSource::new("not a url").is_err());
    }

    #[tokio::test]
    async fn test_fetch_from_server() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("posts.json"), "[]").unwrap();
        let base = serve(&dir).await;

        let source = HttpSource::new(&base).unwrap();
        assert_eq!(source.fetch_text("posts.json").await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let dir = TempDir::new().unwrap();
        let base = serve(&dir).await;

        let source = HttpSource::new(&base).unwrap();
        let err = source.fetch_text("pages/missing.md").await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }
}
