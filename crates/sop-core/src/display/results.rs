//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::{or_placeholder, UNTITLED};
use crate::models::{Document, Identifier};

/// Wrapper type for displaying the result of a commit.
///
/// Shows whether the commit created a new document or replaced an existing
/// one, followed by the full document card.
pub struct CommitResult {
    pub document: Document,
    pub created: bool,
}

impl CommitResult {
    pub fn new(document: Document, created: bool) -> Self {
        Self { document, created }
    }
}

impl fmt::Display for CommitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.created { "Created" } else { "Updated" };
        writeln!(f, "{verb} SOP with ID: {}", self.document.id)?;
        writeln!(f)?;
        write!(f, "{}", self.document)
    }
}

/// Wrapper type for displaying the result of a delete.
pub struct DeleteResult {
    pub id: Identifier,
    pub title: Option<String>,
}

impl DeleteResult {
    /// `title` is `None` when no document had the identifier.
    pub fn new(id: Identifier, title: Option<String>) -> Self {
        Self { id, title }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => writeln!(
                f,
                "Deleted SOP '{}' (ID: {})",
                or_placeholder(title, UNTITLED),
                self.id
            ),
            None => writeln!(f, "No SOP with ID {} to delete", self.id),
        }
    }
}
