//! Directory-backed asset source

use std::path::{Component, Path, PathBuf};

use super::{AssetSource, FetchError};

/// Serves assets from a local site directory
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative asset path, refusing to leave the root
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(FetchError::Io {
                path: relative.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "path leaves the site directory",
                ),
            });
        }
        Ok(self.root.join(relative))
    }
}

impl AssetSource for DirSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let full = self.resolve(path)?;
        tracing::debug!("Reading {:?}", full);
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|source| FetchError::Io { path: full, source })
    }
}
