use std::path::{Path, PathBuf};

use crate::snapshot::JsonFileStore;

/// Where and how progress snapshots are written.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    path: PathBuf,
    pretty: bool,
}

impl StorageConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    /// Indent the JSON output. Off by default.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    pub fn build_store(&self) -> JsonFileStore {
        JsonFileStore::new(self.clone())
    }
}
