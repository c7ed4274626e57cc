//! Data models for SOP documents and their steps.
//!
//! A [`Document`] carries free-text metadata, a [`Department`] drawn from a
//! fixed set, and an ordered sequence of [`Step`]s. Both documents and steps
//! are keyed by an opaque [`Identifier`]. Serialization uses camelCase field
//! names, which is the layout of the persisted snapshot.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use sop_core::models::{Department, Document};
//!
//! let doc = Document::blank();
//! assert_eq!(doc.department, Department::Operations);
//! assert_eq!(doc.steps.len(), 1);
//! assert_eq!(doc.created_at, doc.updated_at);
//! ```

pub mod department;
pub mod document;
pub mod filters;
pub mod id;
pub mod step;


pub use department::Department;
pub use document::{Document, DocumentField};
pub use filters::{DepartmentFilter, ListFilter};
pub use id::Identifier;
pub use step::{Step, StepField};
