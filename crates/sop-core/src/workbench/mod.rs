//! High-level workbench API: selection, drafts and commits.
//!
//! The [`Workbench`] is the single entry point a host drives. It owns the
//! [`DocumentStore`] and the current [`Selection`], and is the only place
//! drafts are turned into committed documents.
//!
//! ```text
//!                 select / commit
//!  NoSelection ──────────────────▶ Viewing(doc)
//!      │                             │    ▲
//!      │ create_blank /              │    │ commit
//!      │ create_from_template  edit  ▼    │
//!      └──────────────────────▶ Editing(draft)
//!
//!  delete / close: any state ──▶ NoSelection
//!  select:         any state ──▶ Viewing(other), draft discarded
//! ```
//!
//! Step and field mutations go through [`Workbench::draft_mut`] and only
//! touch the draft. Selecting another document, closing, or deleting while
//! editing drops the draft without asking.
//!
//! # Usage Examples
//!
//! ```rust
//! use sop_core::{
//!     models::{DocumentField, StepField},
//!     store::MemoryStorage,
//!     Workbench,
//! };
//!
//! let mut workbench = Workbench::open(MemoryStorage::new());
//!
//! let draft = workbench.create_blank();
//! draft.set_field(DocumentField::Title, "Daily Close");
//! let first = draft.document().steps[0].id.clone();
//! draft.update_step(&first, StepField::Description, "Lock doors")?;
//!
//! let committed = workbench.commit()?;
//! assert_eq!(workbench.documents().len(), 1);
//! assert_eq!(workbench.current(), Some(&committed));
//! # Ok::<(), sop_core::SopError>(())
//! ```

use jiff::Timestamp;
use log::debug;

use crate::{
    error::{Result, SopError},
    export::ExportReport,
    models::{Document, Identifier, ListFilter},
    store::{DocumentStore, StoragePort},
    templates::Template,
};

pub mod builder;
pub mod draft;
pub mod selection;


pub use builder::WorkbenchBuilder;
pub use draft::{Direction, Draft};
pub use selection::Selection;

/// Document store plus the draft/commit state machine.
#[derive(Debug)]
pub struct Workbench<S> {
    store: DocumentStore<S>,
    selection: Selection,
}

impl<S: StoragePort> Workbench<S> {
    /// Opens a workbench over the given persistence port with nothing
    /// selected.
    pub fn open(port: S) -> Self {
        Self {
            store: DocumentStore::open(port),
            selection: Selection::NoSelection,
        }
    }

    /// The underlying document store.
    pub fn store(&self) -> &DocumentStore<S> {
        &self.store
    }

    /// Committed documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        self.store.all()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected document (committed or draft), if any.
    pub fn current(&self) -> Option<&Document> {
        self.selection.document()
    }

    /// Committed documents matching `filter`, in store order.
    pub fn list(&self, filter: &ListFilter) -> Vec<&Document> {
        filter.apply(self.store.all())
    }

    /// Views a committed document, discarding any draft.
    ///
    /// # Errors
    ///
    /// Returns [`SopError::DocumentNotFound`] if the store has no such
    /// document; the selection is left unchanged.
    pub fn select(&mut self, id: &Identifier) -> Result<&Document> {
        let doc = self
            .store
            .get(id)
            .ok_or_else(|| SopError::DocumentNotFound { id: id.to_string() })?;
        if self.selection.is_editing() {
            debug!("Discarding uncommitted draft to view {id}");
        }
        self.selection = Selection::Viewing(doc.clone());
        Ok(doc)
    }

    /// Enters edit mode on the viewed document.
    ///
    /// Calling this while already editing returns the existing draft.
    ///
    /// # Errors
    ///
    /// Returns [`SopError::InvalidState`] if nothing is selected.
    pub fn edit(&mut self) -> Result<&mut Draft> {
        if let Selection::Viewing(doc) = &self.selection {
            debug!("Editing document {}", doc.id);
            self.selection = Selection::Editing(Draft::new(doc.clone()));
        }
        self.draft_mut().map_err(|_| SopError::InvalidState {
            operation: "edit",
            state: Selection::NoSelection.state_name(),
        })
    }

    /// Starts a new blank document (one empty step) as a draft.
    pub fn create_blank(&mut self) -> &mut Draft {
        self.start_draft(Document::blank())
    }

    /// Starts a new document seeded from a template as a draft.
    pub fn create_from_template(&mut self, template: &Template) -> &mut Draft {
        debug!("Instantiating template '{}'", template.title);
        self.start_draft(template.instantiate())
    }

    /// The draft being edited.
    ///
    /// # Errors
    ///
    /// Returns [`SopError::InvalidState`] unless in edit mode.
    pub fn draft_mut(&mut self) -> Result<&mut Draft> {
        match &mut self.selection {
            Selection::Editing(draft) => Ok(draft),
            other => Err(SopError::InvalidState {
                operation: "modify a draft",
                state: other.state_name(),
            }),
        }
    }

    /// Writes the draft into the store and switches to viewing it.
    ///
    /// `updated_at` is refreshed to now (never earlier than `created_at`).
    /// Returns the committed document.
    ///
    /// # Errors
    ///
    /// Returns [`SopError::InvalidState`] unless in edit mode. A persistence
    /// error is returned after the store and selection have been updated;
    /// the commit is still in effect for this session.
    pub fn commit(&mut self) -> Result<Document> {
        let draft = match std::mem::take(&mut self.selection) {
            Selection::Editing(draft) => draft,
            other => {
                let state = other.state_name();
                self.selection = other;
                return Err(SopError::InvalidState {
                    operation: "commit",
                    state,
                });
            }
        };

        let mut doc = draft.into_document();
        doc.updated_at = Timestamp::now().max(doc.created_at);
        debug!("Committing document {}", doc.id);

        let persisted = self.store.upsert(doc.clone());
        self.selection = Selection::Viewing(doc.clone());
        persisted.map(|()| doc)
    }

    /// Deletes a document and clears the selection, whatever was selected.
    ///
    /// Returns `Ok(false)` if the store had no such document.
    ///
    /// # Errors
    ///
    /// Returns the persistence error if the snapshot could not be written.
    pub fn delete(&mut self, id: &Identifier) -> Result<bool> {
        self.selection = Selection::NoSelection;
        self.store.remove(id)
    }

    /// Returns to the list, discarding any draft.
    pub fn close(&mut self) {
        self.selection = Selection::NoSelection;
    }

    /// Plain-text export of a committed document.
    ///
    /// # Errors
    ///
    /// Returns [`SopError::DocumentNotFound`] if the store has no such
    /// document.
    pub fn export(&self, id: &Identifier) -> Result<ExportReport<'_>> {
        self.store
            .get(id)
            .map(ExportReport::new)
            .ok_or_else(|| SopError::DocumentNotFound { id: id.to_string() })
    }

    fn start_draft(&mut self, doc: Document) -> &mut Draft {
        debug!("New draft {}", doc.id);
        self.selection = Selection::Editing(Draft::new(doc));
        match &mut self.selection {
            Selection::Editing(draft) => draft,
            _ => unreachable!("selection was just set to Editing"),
        }
    }
}
