//! In-memory storage port for tests and embedding hosts.

use super::StoragePort;
use crate::error::{Result, SopError};

/// Keeps the snapshot in memory.
///
/// Write failures can be injected with [`MemoryStorage::fail_writes`] to
/// exercise the degraded-persistence path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    snapshot: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-populated with a snapshot.
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            snapshot: Some(snapshot.into()),
            ..Self::default()
        }
    }

    /// Makes every subsequent write fail (or succeed again).
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Current stored snapshot.
    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.snapshot.clone())
    }

    fn write(&mut self, snapshot: &str) -> Result<()> {
        if self.fail_writes {
            return Err(SopError::Unavailable {
                message: "quota exceeded".to_string(),
            });
        }
        self.snapshot = Some(snapshot.to_string());
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
