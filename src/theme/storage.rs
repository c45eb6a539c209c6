//! Preference storage, the local-storage stand-in

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Theme;

/// Failure reading or writing the preference store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path:?} is corrupt: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored theme {0:?} is neither \"light\" nor \"dark\"")]
    InvalidValue(String),
}

/// Holds the single persisted theme preference
pub trait PreferenceStore {
    fn get(&self) -> Result<Option<Theme>, StorageError>;
    fn set(&mut self, theme: Theme) -> Result<(), StorageError>;
    fn clear(&mut self) -> Result<(), StorageError>;
}

fn parse_stored(value: &str) -> Result<Theme, StorageError> {
    value
        .parse()
        .map_err(|_| StorageError::InvalidValue(value.to_string()))
}

/// A JSON key-value file, one key of which holds the theme
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P, key: &str) -> Self {
        Self {
            path: path.into(),
            key: key.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&content).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(map).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(io_err)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self) -> Result<Option<Theme>, StorageError> {
        match self.read_map()?.get(&self.key) {
            Some(Value::String(s)) => parse_stored(s).map(Some),
            Some(other) => Err(StorageError::InvalidValue(other.to_string())),
            None => Ok(None),
        }
    }

    fn set(&mut self, theme: Theme) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(self.key.clone(), Value::String(theme.as_str().to_string()));
        self.write_map(&map)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        if map.remove(&self.key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    key: String,
}

impl MemoryStore {
    pub fn new(key: &str) -> Self {
        Self {
            values: HashMap::new(),
            key: key.to_string(),
        }
    }

    /// Raw stored string, as local storage would hold it
    pub fn raw(&self) -> Option<&str> {
        self.values.get(&self.key).map(String::as_str)
    }

    pub fn set_raw(&mut self, value: &str) {
        self.values.insert(self.key.clone(), value.to_string());
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Result<Option<Theme>, StorageError> {
        self.raw().map(parse_stored).transpose()
    }

    fn set(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.set_raw(theme.as_str());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.values.remove(&self.key);
        Ok(())
    }
}
