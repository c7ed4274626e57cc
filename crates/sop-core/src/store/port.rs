//! Persistence port: read and write one serialized snapshot.

use crate::error::Result;

/// Durable key-value slot holding the whole document collection.
///
/// Implementations store a single opaque string. Writes must replace the
/// previous value as a whole; a subsequent [`read`](StoragePort::read) sees
/// either the old or the new snapshot, never a mixture.
pub trait StoragePort {
    /// Read the stored snapshot, or `None` if nothing was ever written.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored snapshot.
    fn write(&mut self, snapshot: &str) -> Result<()>;

    /// Storage location description (for display purposes).
    fn location(&self) -> String;
}
