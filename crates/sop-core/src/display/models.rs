//! Display implementations for domain models.
//!
//! Documents format as markdown cards: title heading, metadata list,
//! purpose, numbered steps and notes. Empty fields show display-only
//! placeholders.

use std::fmt;

use super::{or_placeholder, LocalDate, EMPTY_FIELD, UNTITLED};
use crate::models::{Department, Document};

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", or_placeholder(&self.title, UNTITLED))?;
        writeln!(f)?;

        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f, "- **Department**: {}", self.department)?;
        writeln!(f, "- **Updated**: {}", LocalDate::new(&self.updated_at))?;
        writeln!(
            f,
            "- **Responsible**: {}",
            or_placeholder(&self.responsible, EMPTY_FIELD)
        )?;
        writeln!(
            f,
            "- **Frequency**: {}",
            or_placeholder(&self.frequency, EMPTY_FIELD)
        )?;
        writeln!(f, "- **Scope**: {}", or_placeholder(&self.scope, EMPTY_FIELD))?;

        writeln!(f, "\n## Purpose")?;
        writeln!(f)?;
        writeln!(f, "{}", or_placeholder(&self.purpose, EMPTY_FIELD))?;

        writeln!(f, "\n## Procedure Steps")?;
        writeln!(f)?;
        if self.steps.is_empty() {
            writeln!(f, "No steps in this SOP.")?;
        }
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "### {}. {} (ID: {})", i + 1, step.description, step.id)?;
            if !step.details.is_empty() {
                writeln!(f)?;
                writeln!(f, "{}", step.details)?;
            }
            if !step.estimated_time.is_empty() {
                writeln!(f)?;
                writeln!(f, "Est. time: {}", step.estimated_time)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "## Notes")?;
        writeln!(f)?;
        writeln!(f, "{}", or_placeholder(&self.notes, EMPTY_FIELD))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Department, Document};

    #[test]
    fn test_blank_document_uses_placeholders() {
        let doc = Document::blank();
        let output = doc.to_string();

        assert!(output.starts_with("# Untitled SOP\n"));
        assert!(output.contains("- **Department**: Operations"));
        assert!(output.contains("- **Responsible**: —"));
        assert!(output.contains("### 1.  (ID: "));
        assert!(doc.title.is_empty());
    }

    #[test]
    fn test_document_lists_steps_in_order() {
        let mut doc = Document::blank();
        doc.title = "Closing".to_string();
        doc.department = Department::FrontDesk;
        doc.steps[0].description = "Lock doors".to_string();
        doc.steps[0].estimated_time = "2 min".to_string();

        let output = doc.to_string();

        assert!(output.contains("# Closing"));
        assert!(output.contains("- **Department**: Front Desk"));
        assert!(output.contains("### 1. Lock doors"));
        assert!(output.contains("Est. time: 2 min"));
    }

    #[test]
    fn test_document_without_steps() {
        let mut doc = Document::blank();
        doc.steps.clear();

        assert!(doc.to_string().contains("No steps in this SOP."));
    }
}
