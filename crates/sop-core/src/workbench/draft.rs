//! Editable drafts and their step operations.

use log::debug;

use crate::{
    error::{Result, SopError},
    models::{Department, Document, DocumentField, Identifier, Step, StepField},
};

/// Direction for adjacent-swap reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl std::str::FromStr for Direction {
    type Err = SopError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(SopError::invalid_input("direction")
                .with_reason(format!("Expected 'up' or 'down', got '{s}'"))),
        }
    }
}

/// An isolated, uncommitted copy of a document.
///
/// Nothing done to a draft is visible to the store until the workbench
/// commits it.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    document: Document,
}

impl Draft {
    pub(crate) fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document as currently edited.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Identifier the draft will be committed under.
    pub fn id(&self) -> &Identifier {
        &self.document.id
    }

    pub(crate) fn into_document(self) -> Document {
        self.document
    }

    /// Replaces a free-text metadata field.
    pub fn set_field(&mut self, field: DocumentField, value: impl Into<String>) {
        *self.document.field_mut(field) = value.into();
    }

    pub fn set_department(&mut self, department: Department) {
        self.document.department = department;
    }

    /// Appends a blank step and returns its identifier.
    pub fn add_step(&mut self) -> Identifier {
        let step = Step::blank();
        let id = step.id.clone();
        self.document.steps.push(step);
        debug!("Draft {}: added step {id}", self.document.id);
        id
    }

    /// Removes a step. Returns `false` if no step has that identifier.
    pub fn remove_step(&mut self, step_id: &Identifier) -> bool {
        let before = self.document.steps.len();
        self.document.steps.retain(|s| &s.id != step_id);
        self.document.steps.len() != before
    }

    /// Replaces one text field of a step.
    ///
    /// # Errors
    ///
    /// Returns [`SopError::StepNotFound`] if the draft has no such step.
    pub fn update_step(
        &mut self,
        step_id: &Identifier,
        field: StepField,
        value: impl Into<String>,
    ) -> Result<()> {
        let step = self
            .document
            .steps
            .iter_mut()
            .find(|s| &s.id == step_id)
            .ok_or_else(|| SopError::StepNotFound {
                id: step_id.to_string(),
            })?;
        *step.field_mut(field) = value.into();
        Ok(())
    }

    /// Swaps the step at `index` with its neighbour in `direction`.
    ///
    /// Moving the first step up, the last step down, or an index past the
    /// end leaves the order unchanged and returns `false`.
    pub fn move_step(&mut self, index: usize, direction: Direction) -> bool {
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        };
        let len = self.document.steps.len();
        match target {
            Some(target) if index < len && target < len => {
                self.document.steps.swap(index, target);
                true
            }
            _ => false,
        }
    }
}
