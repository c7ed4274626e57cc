//! Document model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Department, Identifier, Step};

/// A standard operating procedure: metadata fields plus an ordered list of
/// steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique identifier, assigned once at creation
    pub id: Identifier,

    /// Title of the procedure (may be empty)
    #[serde(default)]
    pub title: String,

    /// Owning department
    #[serde(default)]
    pub department: Department,

    /// Why the procedure exists
    #[serde(default)]
    pub purpose: String,

    /// Who or what the procedure applies to
    #[serde(default)]
    pub scope: String,

    /// Role responsible for carrying it out
    #[serde(default)]
    pub responsible: String,

    /// How often it is performed
    #[serde(default)]
    pub frequency: String,

    /// Ordered procedure steps
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Closing remarks
    #[serde(default)]
    pub notes: String,

    /// Timestamp when the document was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last commit (UTC)
    pub updated_at: Timestamp,
}

impl Document {
    /// Creates a blank document in the default department with exactly one
    /// empty step.
    pub fn blank() -> Self {
        let now = Timestamp::now();
        Self {
            id: Identifier::generate(),
            title: String::new(),
            department: Department::default(),
            purpose: String::new(),
            scope: String::new(),
            responsible: String::new(),
            frequency: String::new(),
            steps: vec![Step::blank()],
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the text of the given metadata field.
    pub fn field(&self, field: DocumentField) -> &str {
        match field {
            DocumentField::Title => &self.title,
            DocumentField::Purpose => &self.purpose,
            DocumentField::Scope => &self.scope,
            DocumentField::Responsible => &self.responsible,
            DocumentField::Frequency => &self.frequency,
            DocumentField::Notes => &self.notes,
        }
    }

    pub(crate) fn field_mut(&mut self, field: DocumentField) -> &mut String {
        match field {
            DocumentField::Title => &mut self.title,
            DocumentField::Purpose => &mut self.purpose,
            DocumentField::Scope => &mut self.scope,
            DocumentField::Responsible => &mut self.responsible,
            DocumentField::Frequency => &mut self.frequency,
            DocumentField::Notes => &mut self.notes,
        }
    }

    /// Looks up a step by identifier.
    pub fn step(&self, id: &Identifier) -> Option<&Step> {
        self.steps.iter().find(|s| &s.id == id)
    }
}

/// Free-text metadata fields of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentField {
    Title,
    Purpose,
    Scope,
    Responsible,
    Frequency,
    Notes,
}
