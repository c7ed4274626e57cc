use std::path::{Path, PathBuf};

use sop_core::{FileStorage, Workbench, WorkbenchBuilder};
use tempfile::TempDir;

/// Helper function to create a file-backed workbench in a scratch directory
pub fn create_test_workbench() -> (TempDir, PathBuf, Workbench<FileStorage>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("data").join("sops.json");
    let workbench = WorkbenchBuilder::new()
        .with_storage_path(Some(&path))
        .build()
        .expect("Failed to create workbench");
    (temp_dir, path, workbench)
}

/// Reopen a workbench over an existing snapshot file
pub fn reopen(path: &Path) -> Workbench<FileStorage> {
    WorkbenchBuilder::new()
        .with_storage_path(Some(path))
        .build()
        .expect("Failed to reopen workbench")
}
