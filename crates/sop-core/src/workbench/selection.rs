//! Selection states of the workbench.

use super::Draft;
use crate::models::Document;

/// What the user currently has open.
///
/// Editing always carries its draft, so "editing with nothing selected"
/// cannot be represented.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    /// Nothing selected; the list is shown
    #[default]
    NoSelection,

    /// A committed document, read-only
    Viewing(Document),

    /// A draft with possibly uncommitted edits
    Editing(Draft),
}

impl Selection {
    /// The selected document, committed or draft.
    pub fn document(&self) -> Option<&Document> {
        match self {
            Selection::NoSelection => None,
            Selection::Viewing(doc) => Some(doc),
            Selection::Editing(draft) => Some(draft.document()),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Selection::Editing(_))
    }

    /// Short state description used in error messages.
    pub fn state_name(&self) -> &'static str {
        match self {
            Selection::NoSelection => "nothing is selected",
            Selection::Viewing(_) => "viewing a document",
            Selection::Editing(_) => "editing a draft",
        }
    }
}
