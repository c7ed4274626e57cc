//! Display formatting for documents, lists and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown that the CLI renders in the terminal. Wrapper types
//! cover contexts that need more than one value: filtered lists, the template
//! catalog, and the outcome of a commit or delete.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Document, ...) │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Placeholders such as "Untitled SOP" and "—" appear here only. The
//! stored values and the plain-text export never contain them.
//!
//! ## Module Organization
//!
//! - [`collections`]: list wrappers (DocumentSummaries, Templates)
//! - [`results`]: CommitResult, DeleteResult
//! - [`status`]: OperationStatus
//! - [`datetime`]: LocalDate
//! - [`guide`]: the quick-start guide
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use sop_core::{display::CommitResult, models::Document};
//!
//! let mut doc = Document::blank();
//! doc.title = "Daily Close".to_string();
//!
//! let output = CommitResult::new(doc, true).to_string();
//! assert!(output.contains("Created SOP with ID:"));
//! assert!(output.contains("# Daily Close"));
//! ```

pub mod collections;
pub mod datetime;
pub mod guide;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{DocumentSummaries, Templates};
pub use datetime::LocalDate;
pub use guide::Guide;
pub use results::{CommitResult, DeleteResult};
pub use status::OperationStatus;

/// Display-only stand-in for an empty title.
pub const UNTITLED: &str = "Untitled SOP";

/// Display-only stand-in for an empty field.
pub const EMPTY_FIELD: &str = "—";

pub(crate) fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
