//! Core library for the SOP Factory procedure builder.
//!
//! This crate models Standard Operating Procedure documents and everything
//! needed to author them: a write-through document store with a pluggable
//! persistence port, a fixed template catalog, an explicit draft/commit
//! state machine, list filtering, and a plain-text export.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Workbench    │    │  DocumentStore  │    │   StoragePort   │
//! │ (selection,     │───▶│ (committed docs,│───▶│ (file, memory)  │
//! │  drafts)        │    │  write-through) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │
//!          ├──▶ ListFilter   (department + search)
//!          └──▶ ExportReport (plain text)
//! ```
//!
//! Edits only ever touch a [`Draft`]; a commit is the single path by which
//! a document enters the store.
//!
//! # Quick Start
//!
//! ```rust
//! use sop_core::{
//!     models::{DocumentField, ListFilter},
//!     store::MemoryStorage,
//!     templates, Workbench,
//! };
//!
//! let mut workbench = Workbench::open(MemoryStorage::new());
//!
//! // Seed a draft from the catalog and tweak it
//! let template = templates::find("Opening Procedures")?;
//! let draft = workbench.create_from_template(template);
//! draft.set_field(DocumentField::Responsible, "Alex");
//!
//! // Commit it and list what is stored
//! let doc = workbench.commit()?;
//! assert_eq!(workbench.list(&ListFilter::default()).len(), 1);
//!
//! // Plain-text export
//! let text = workbench.export(&doc.id)?.to_string();
//! assert!(text.starts_with("SOP: Opening Procedures"));
//! # Ok::<(), sop_core::SopError>(())
//! ```

pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod params;
pub mod store;
pub mod templates;
pub mod workbench;

// Re-export commonly used types
pub use display::{CommitResult, DeleteResult, DocumentSummaries, OperationStatus, Templates};
pub use error::{Result, SopError};
pub use export::{export_file_name, render, ExportReport};
pub use models::{
    Department, DepartmentFilter, Document, DocumentField, Identifier, ListFilter, Step, StepField,
};
pub use params::{DocumentEdits, ListDocuments, MoveStep, StepEdits, StepRef, StepUpdate};
pub use store::{DocumentStore, FileStorage, MemoryStorage, StoragePort};
pub use workbench::{Direction, Draft, Selection, Workbench, WorkbenchBuilder};
