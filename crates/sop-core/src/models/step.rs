//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Identifier;

/// One action within a procedure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Identifier, unique within the owning document
    pub id: Identifier,

    /// Short imperative text
    #[serde(default)]
    pub description: String,

    /// Optional elaboration
    #[serde(default)]
    pub details: String,

    /// Free-text duration label such as "5 min" (never parsed)
    #[serde(default)]
    pub estimated_time: String,
}

impl Step {
    /// Creates a blank step with a fresh identifier.
    pub fn blank() -> Self {
        Self {
            id: Identifier::generate(),
            description: String::new(),
            details: String::new(),
            estimated_time: String::new(),
        }
    }

    /// Returns the text of the given field.
    pub fn field(&self, field: StepField) -> &str {
        match field {
            StepField::Description => &self.description,
            StepField::Details => &self.details,
            StepField::EstimatedTime => &self.estimated_time,
        }
    }

    pub(crate) fn field_mut(&mut self, field: StepField) -> &mut String {
        match field {
            StepField::Description => &mut self.description,
            StepField::Details => &mut self.details,
            StepField::EstimatedTime => &mut self.estimated_time,
        }
    }
}

/// Editable text fields of a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepField {
    Description,
    Details,
    EstimatedTime,
}
