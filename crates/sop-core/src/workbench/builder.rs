//! Builder for creating file-backed Workbench instances.

use std::path::{Path, PathBuf};

use super::Workbench;
use crate::{
    error::{Result, SopError, StorageResultExt},
    store::FileStorage,
};

/// File name of the snapshot inside the data directory.
pub const SNAPSHOT_FILE: &str = "sop-factory-data.json";

/// Builder for creating and configuring file-backed workbenches.
#[derive(Debug, Clone, Default)]
pub struct WorkbenchBuilder {
    storage_path: Option<PathBuf>,
}

impl WorkbenchBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { storage_path: None }
    }

    /// Sets a custom snapshot file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/sop-factory/sop-factory-data.json` or
    /// `~/.local/share/sop-factory/sop-factory-data.json`
    pub fn with_storage_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.storage_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the workbench, loading any existing snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SopError::XdgDirectory` if no default location can be
    /// determined, or `SopError::Storage` if the parent directory cannot be
    /// created. An unreadable snapshot is not an error.
    pub fn build(self) -> Result<Workbench<FileStorage>> {
        let path = match self.storage_path {
            Some(path) => path,
            None => Self::default_storage_path()?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).storage_context(parent)?;
        }

        Ok(Workbench::open(FileStorage::new(path)))
    }

    /// Returns the default snapshot path following XDG Base Directory
    /// specification.
    fn default_storage_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("sop-factory")
            .place_data_file(SNAPSHOT_FILE)
            .map_err(|e| SopError::XdgDirectory(e.to_string()))
    }
}
