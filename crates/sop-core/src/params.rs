//! Parameter structures for SOP operations.
//!
//! These structures carry user input from an interface layer (the CLI
//! today) to the core without any framework-specific derives. Interface
//! layers define their own argument types and convert into these with
//! `From`. Each parameter type knows how to apply itself to a draft, so
//! every interface performs edits the same way.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │     Draft       │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│  (workbench)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::str::FromStr;

use crate::{
    error::{Result, SopError},
    models::{Department, DepartmentFilter, DocumentField, Identifier, ListFilter, StepField},
    workbench::{Direction, Draft},
};

/// Parameters for listing documents.
#[derive(Debug, Clone, Default)]
pub struct ListDocuments {
    /// Department label or "All"; `None` means all
    pub department: Option<String>,
    /// Case-insensitive search text
    pub query: Option<String>,
}

impl TryFrom<&ListDocuments> for ListFilter {
    type Error = SopError;

    fn try_from(params: &ListDocuments) -> Result<Self> {
        let department = match &params.department {
            Some(label) => label.parse()?,
            None => DepartmentFilter::All,
        };
        Ok(ListFilter {
            department,
            query: params.query.clone().unwrap_or_default(),
        })
    }
}

/// Metadata edits. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct DocumentEdits {
    pub title: Option<String>,
    pub department: Option<String>,
    pub purpose: Option<String>,
    pub scope: Option<String>,
    pub responsible: Option<String>,
    pub frequency: Option<String>,
    pub notes: Option<String>,
}

impl DocumentEdits {
    /// Applies the edits to a draft.
    ///
    /// # Errors
    ///
    /// Returns [`SopError::InvalidInput`] for an unknown department label,
    /// before any field has been changed.
    pub fn apply(&self, draft: &mut Draft) -> Result<()> {
        let department = self
            .department
            .as_deref()
            .map(Department::from_str)
            .transpose()?;
        if let Some(department) = department {
            draft.set_department(department);
        }

        let fields = [
            (DocumentField::Title, &self.title),
            (DocumentField::Purpose, &self.purpose),
            (DocumentField::Scope, &self.scope),
            (DocumentField::Responsible, &self.responsible),
            (DocumentField::Frequency, &self.frequency),
            (DocumentField::Notes, &self.notes),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                draft.set_field(field, value.as_str());
            }
        }
        Ok(())
    }
}

/// A single adjacent-swap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveStep {
    /// 0-based position of the step to move
    pub index: usize,
    pub direction: Direction,
}

impl FromStr for MoveStep {
    type Err = SopError;

    /// Parses `INDEX:up` or `INDEX:down`, with a 1-based index as shown in
    /// listings.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| SopError::invalid_input("move").with_reason(reason);
        let (position, direction) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected POSITION:up or POSITION:down"))?;
        let position: usize = position
            .trim()
            .parse()
            .map_err(|_| invalid("position must be a positive number"))?;
        let index = position
            .checked_sub(1)
            .ok_or_else(|| invalid("positions start at 1"))?;
        Ok(MoveStep {
            index,
            direction: direction.parse()?,
        })
    }
}

/// Replacement text for one field of the step at a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepUpdate {
    /// 0-based position of the step
    pub index: usize,
    pub field: StepField,
    pub value: String,
}

impl FromStr for StepUpdate {
    type Err = SopError;

    /// Parses `POSITION:FIELD=VALUE` with a 1-based position and FIELD one
    /// of `description`, `details` or `time`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| SopError::invalid_input("step").with_reason(reason);
        let (position, rest) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected POSITION:FIELD=VALUE"))?;
        let (field, value) = rest
            .split_once('=')
            .ok_or_else(|| invalid("expected POSITION:FIELD=VALUE"))?;
        let index = position
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|p| p.checked_sub(1))
            .ok_or_else(|| invalid("position must be a number starting at 1"))?;
        let field = match field.trim().to_lowercase().as_str() {
            "description" | "desc" => StepField::Description,
            "details" => StepField::Details,
            "time" | "estimated-time" | "estimatedtime" => StepField::EstimatedTime,
            other => return Err(invalid(&format!("unknown step field '{other}'"))),
        };
        Ok(StepUpdate {
            index,
            field,
            value: value.to_string(),
        })
    }
}

/// A step named either by 1-based position or by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepRef {
    /// 0-based position
    Position(usize),
    Id(Identifier),
}

impl StepRef {
    fn resolve(&self, draft: &Draft) -> Option<Identifier> {
        match self {
            StepRef::Position(index) => draft.document().steps.get(*index).map(|s| s.id.clone()),
            StepRef::Id(id) => Some(id.clone()),
        }
    }
}

impl FromStr for StepRef {
    type Err = SopError;

    /// All-digit input is a 1-based position; anything else an identifier.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SopError::invalid_input("step").with_reason("empty step reference"));
        }
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Ok(StepRef::Id(Identifier::from(s)));
        }
        s.parse::<usize>()
            .ok()
            .and_then(|p| p.checked_sub(1))
            .map(StepRef::Position)
            .ok_or_else(|| {
                SopError::invalid_input("step").with_reason("positions start at 1")
            })
    }
}

/// Step edits, applied in order: removals, additions, field updates, then
/// moves. Positions in updates and moves refer to the order at that point.
#[derive(Debug, Clone, Default)]
pub struct StepEdits {
    /// Steps to remove, resolved against the order before any edit;
    /// unknown steps are ignored
    pub remove: Vec<StepRef>,
    /// Descriptions of steps to append
    pub add: Vec<String>,
    pub updates: Vec<StepUpdate>,
    pub moves: Vec<MoveStep>,
}

impl StepEdits {
    /// Applies the edits to a draft.
    ///
    /// When `fill_first_blank` is set and the draft consists of a single
    /// empty step (a fresh blank document), the first added description
    /// fills that step instead of appending after it.
    pub fn apply(&self, draft: &mut Draft, fill_first_blank: bool) -> Result<()> {
        let doomed: Vec<Identifier> = self
            .remove
            .iter()
            .filter_map(|step| step.resolve(draft))
            .collect();
        for id in &doomed {
            draft.remove_step(id);
        }

        let mut additions = self.add.iter();
        if fill_first_blank {
            if let [only] = draft.document().steps.as_slice() {
                if only.description.is_empty() && only.details.is_empty() {
                    let id = only.id.clone();
                    if let Some(description) = additions.next() {
                        draft.update_step(&id, StepField::Description, description.as_str())?;
                    }
                }
            }
        }
        for description in additions {
            let id = draft.add_step();
            draft.update_step(&id, StepField::Description, description.as_str())?;
        }

        for update in &self.updates {
            let id = draft
                .document()
                .steps
                .get(update.index)
                .map(|step| step.id.clone())
                .ok_or_else(|| {
                    SopError::invalid_input("step")
                        .with_reason(format!("no step at position {}", update.index + 1))
                })?;
            draft.update_step(&id, update.field, update.value.as_str())?;
        }

        for mv in &self.moves {
            draft.move_step(mv.index, mv.direction);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Document, workbench::Draft};

    #[test]
    fn test_list_documents_into_filter() {
        let params = ListDocuments {
            department: Some("front-desk".to_string()),
            query: None,
        };
        let filter = ListFilter::try_from(&params).unwrap();

        assert_eq!(filter.department, DepartmentFilter::Only(Department::FrontDesk));
        assert!(filter.query.is_empty());

        let bad = ListDocuments {
            department: Some("Legal".to_string()),
            query: None,
        };
        assert!(ListFilter::try_from(&bad).is_err());
    }

    #[test]
    fn test_move_step_parsing() {
        assert_eq!(
            "2:up".parse::<MoveStep>().unwrap(),
            MoveStep {
                index: 1,
                direction: Direction::Up
            }
        );
        assert!("0:up".parse::<MoveStep>().is_err());
        assert!("2".parse::<MoveStep>().is_err());
        assert!("2:left".parse::<MoveStep>().is_err());
    }

    #[test]
    fn test_document_edits_reject_unknown_department_untouched() {
        let mut draft = Draft::new(Document::blank());
        let edits = DocumentEdits {
            title: Some("Changed".to_string()),
            department: Some("Legal".to_string()),
            ..Default::default()
        };

        assert!(edits.apply(&mut draft).is_err());
        assert!(draft.document().title.is_empty());
    }

    #[test]
    fn test_step_edits_fill_blank_step_first() {
        let mut draft = Draft::new(Document::blank());
        let edits = StepEdits {
            add: vec!["Lock doors".to_string(), "Count register".to_string()],
            ..Default::default()
        };

        edits.apply(&mut draft, true).unwrap();

        let descriptions: Vec<&str> = draft
            .document()
            .steps
            .iter()
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Lock doors", "Count register"]);
    }

    #[test]
    fn test_step_edits_remove_add_move() {
        let mut draft = Draft::new(Document::blank());
        let blank = draft.document().steps[0].id.clone();
        let edits = StepEdits {
            remove: vec![StepRef::Id(blank), StepRef::Id(Identifier::from("missing"))],
            add: vec!["A".to_string(), "B".to_string()],
            updates: vec!["1:time=5 min".parse().unwrap()],
            moves: vec![MoveStep {
                index: 1,
                direction: Direction::Up,
            }],
        };

        edits.apply(&mut draft, false).unwrap();

        let descriptions: Vec<&str> = draft
            .document()
            .steps
            .iter()
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["B", "A"]);
        assert_eq!(draft.document().steps[1].estimated_time, "5 min");
    }

    #[test]
    fn test_step_edits_remove_by_position() {
        let mut draft = Draft::new(Document::blank());
        let edits = StepEdits {
            add: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            ..Default::default()
        };
        edits.apply(&mut draft, true).unwrap();

        let removals = StepEdits {
            remove: vec![
                "1".parse().unwrap(),
                "3".parse().unwrap(),
                "9".parse().unwrap(),
            ],
            ..Default::default()
        };
        removals.apply(&mut draft, false).unwrap();

        let descriptions: Vec<&str> = draft
            .document()
            .steps
            .iter()
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["B"]);
    }

    #[test]
    fn test_step_ref_parsing() {
        assert_eq!("2".parse::<StepRef>().unwrap(), StepRef::Position(1));
        assert_eq!(
            "0190a1b2c3".parse::<StepRef>().unwrap(),
            StepRef::Id(Identifier::from("0190a1b2c3"))
        );
        assert!("0".parse::<StepRef>().is_err());
        assert!(" ".parse::<StepRef>().is_err());
    }

    #[test]
    fn test_step_update_parsing() {
        let update: StepUpdate = "3:details=Use code = 1234".parse().unwrap();
        assert_eq!(update.index, 2);
        assert_eq!(update.field, StepField::Details);
        assert_eq!(update.value, "Use code = 1234");

        assert!("3:colour=red".parse::<StepUpdate>().is_err());
        assert!("x:details=y".parse::<StepUpdate>().is_err());
        assert!("1:details".parse::<StepUpdate>().is_err());
    }

    #[test]
    fn test_step_update_out_of_range() {
        let mut draft = Draft::new(Document::blank());
        let edits = StepEdits {
            updates: vec!["4:description=Nope".parse().unwrap()],
            ..Default::default()
        };

        assert!(edits.apply(&mut draft, false).is_err());
    }
}
