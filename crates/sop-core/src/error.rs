//! Error types for the SOP library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for all document, store and workbench operations.
#[derive(Error, Debug)]
pub enum SopError {
    /// Durable snapshot could not be read or written
    #[error("Storage error at path '{path}': {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Snapshot serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Document not found in the store
    #[error("Document with ID {id} not found")]
    DocumentNotFound { id: String },
    /// Step not found in the current draft
    #[error("Step with ID {id} not found")]
    StepNotFound { id: String },
    /// Template not found in the catalog
    #[error("Template '{name}' not found")]
    TemplateNotFound { name: String },
    /// Operation not permitted in the current selection state
    #[error("Cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Simulated or host-reported persistence failure without an I/O source
    #[error("Storage unavailable: {message}")]
    Unavailable { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SopError {
        SopError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SopError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error came from durable persistence.
    ///
    /// Persistence failures leave the in-memory store updated, so hosts
    /// report them as warnings rather than aborting.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            SopError::Storage { .. } | SopError::Serialization { .. } | SopError::Unavailable { .. }
        )
    }
}

/// Extension trait for mapping I/O results onto [`SopError::Storage`].
pub trait StorageResultExt<T> {
    /// Attach the path the I/O operation was working on.
    fn storage_context(self, path: &Path) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, std::io::Error> {
    fn storage_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| SopError::Storage {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for SOP operations
pub type Result<T> = std::result::Result<T, SopError>;
