//! File-backed storage port.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use super::StoragePort;
use crate::error::{Result, StorageResultExt};

/// Stores the snapshot as a single JSON file.
///
/// Writes land in a temporary file next to the target which is then renamed
/// over it, so readers never observe a truncated snapshot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a port for the given snapshot file. The file need not exist.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl StoragePort for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).storage_context(&self.path),
        }
    }

    fn write(&mut self, snapshot: &str) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).storage_context(dir)?;

        let mut tmp = NamedTempFile::new_in(dir).storage_context(dir)?;
        tmp.write_all(snapshot.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .storage_context(tmp.path())?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .storage_context(&self.path)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_reads_as_none() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::new(temp_dir.path().join("absent.json"));

        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_write_replaces_contents() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut storage = FileStorage::new(temp_dir.path().join("nested").join("data.json"));

        storage.write("[1]").unwrap();
        storage.write("[]").unwrap();

        assert_eq!(storage.read().unwrap().as_deref(), Some("[]"));
    }
}
