//! Document store and its persistence ports.
//!
//! [`DocumentStore`] owns the authoritative collection of committed
//! documents. Every mutation rewrites the complete snapshot through a
//! [`StoragePort`] before returning, so a restart never loses a committed
//! document. The in-memory collection is updated first: if the write fails
//! the store keeps serving the new state for the rest of the session and the
//! error is handed back to the caller as a recoverable warning.
//!
//! Two ports ship with the crate:
//!
//! - [`FileStorage`]: one JSON file, replaced atomically on each write
//! - [`MemoryStorage`]: in-memory slot with write-failure injection
//!
//! ```rust
//! use sop_core::{models::Document, store::{DocumentStore, MemoryStorage}};
//!
//! let mut store = DocumentStore::open(MemoryStorage::new());
//! let doc = Document::blank();
//! store.upsert(doc.clone()).unwrap();
//!
//! let reopened = DocumentStore::open(store.port().clone());
//! assert_eq!(reopened.all(), store.all());
//! ```

use log::{debug, warn};

use crate::{
    error::Result,
    models::{Document, Identifier},
};

pub mod file;
pub mod memory;
pub mod port;

#[cfg(test)]
mod tests;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use port::StoragePort;

/// Authoritative, write-through collection of committed documents.
#[derive(Debug)]
pub struct DocumentStore<S> {
    port: S,
    documents: Vec<Document>,
}

impl<S: StoragePort> DocumentStore<S> {
    /// Opens a store, loading whatever snapshot the port holds.
    pub fn open(port: S) -> Self {
        let documents = Self::load(&port);
        debug!(
            "Loaded {} document(s) from {}",
            documents.len(),
            port.location()
        );
        Self { port, documents }
    }

    /// Reads the persisted snapshot.
    ///
    /// A missing or malformed snapshot yields an empty collection. Records
    /// sharing an identifier with an earlier record are dropped.
    pub fn load(port: &S) -> Vec<Document> {
        let raw = match port.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Ignoring unreadable snapshot at {}: {e}", port.location());
                return Vec::new();
            }
        };

        let parsed: Vec<Document> = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Ignoring malformed snapshot at {}: {e}", port.location());
                return Vec::new();
            }
        };

        let mut documents: Vec<Document> = Vec::with_capacity(parsed.len());
        for doc in parsed {
            if documents.iter().any(|d| d.id == doc.id) {
                warn!("Dropping duplicate document {} from snapshot", doc.id);
            } else {
                documents.push(doc);
            }
        }
        documents
    }

    /// All committed documents in insertion order.
    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    /// Looks up a committed document.
    pub fn get(&self, id: &Identifier) -> Option<&Document> {
        self.documents.iter().find(|d| &d.id == id)
    }

    /// Number of committed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Inserts a document, or replaces the one with the same identifier in
    /// place, then persists the full collection.
    ///
    /// # Errors
    ///
    /// Returns the persistence error if the snapshot could not be written.
    /// The in-memory collection is updated regardless.
    pub fn upsert(&mut self, doc: Document) -> Result<()> {
        match self.documents.iter_mut().find(|d| d.id == doc.id) {
            Some(existing) => {
                debug!("Replacing document {}", doc.id);
                *existing = doc;
            }
            None => {
                debug!("Inserting document {}", doc.id);
                self.documents.push(doc);
            }
        }
        self.persist()
    }

    /// Removes a document by identifier.
    ///
    /// Returns `Ok(false)` without touching storage if no such document
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns the persistence error if the snapshot could not be written.
    /// The document is removed from memory regardless.
    pub fn remove(&mut self, id: &Identifier) -> Result<bool> {
        let before = self.documents.len();
        self.documents.retain(|d| &d.id != id);
        if self.documents.len() == before {
            debug!("Remove of unknown document {id} ignored");
            return Ok(false);
        }
        debug!("Removed document {id}");
        self.persist().map(|()| true)
    }

    /// The persistence port backing this store.
    pub fn port(&self) -> &S {
        &self.port
    }

    /// Mutable access to the persistence port.
    pub fn port_mut(&mut self) -> &mut S {
        &mut self.port
    }

    fn persist(&mut self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.documents)?;
        if let Err(e) = self.port.write(&snapshot) {
            warn!(
                "Failed to persist {} document(s) to {}: {e}",
                self.documents.len(),
                self.port.location()
            );
            return Err(e);
        }
        Ok(())
    }
}
