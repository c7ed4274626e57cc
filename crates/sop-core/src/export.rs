//! Plain-text export of a committed document.
//!
//! The layout is fixed:
//!
//! ```text
//! SOP: <title>
//! Department: <department>
//! Responsible: <responsible>
//! Frequency: <frequency>
//! Last Updated: <M/D/YYYY>
//!
//! PURPOSE: <purpose>
//!
//! SCOPE: <scope>
//!
//! PROCEDURE:
//!   1. <description>
//!      Details: <details>          (only if non-empty)
//!      Est. Time: <estimated time> (only if non-empty)
//!
//! NOTES: <notes>
//! ```
//!
//! Lines are joined with `\n` and there is no trailing newline. Empty fields
//! render as empty strings; no placeholders are substituted.

use std::fmt;

use jiff::tz::TimeZone;

use crate::{display::LocalDate, models::Document};

/// `Display` wrapper producing the export text for one document.
pub struct ExportReport<'a> {
    document: &'a Document,
    time_zone: TimeZone,
}

impl<'a> ExportReport<'a> {
    /// Export rendered in the system time zone.
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            time_zone: TimeZone::system(),
        }
    }

    /// Renders the "Last Updated" date in the given time zone instead.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn document(&self) -> &Document {
        self.document
    }

    /// Suggested download name, see [`export_file_name`].
    pub fn file_name(&self) -> String {
        export_file_name(&self.document.title)
    }
}

impl fmt::Display for ExportReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.document;
        writeln!(f, "SOP: {}", doc.title)?;
        writeln!(f, "Department: {}", doc.department)?;
        writeln!(f, "Responsible: {}", doc.responsible)?;
        writeln!(f, "Frequency: {}", doc.frequency)?;
        writeln!(
            f,
            "Last Updated: {}",
            LocalDate::in_zone(&doc.updated_at, self.time_zone.clone())
        )?;
        writeln!(f)?;
        writeln!(f, "PURPOSE: {}", doc.purpose)?;
        writeln!(f)?;
        writeln!(f, "SCOPE: {}", doc.scope)?;
        writeln!(f)?;
        writeln!(f, "PROCEDURE:")?;
        for (i, step) in doc.steps.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, step.description)?;
            if !step.details.is_empty() {
                writeln!(f, "     Details: {}", step.details)?;
            }
            if !step.estimated_time.is_empty() {
                writeln!(f, "     Est. Time: {}", step.estimated_time)?;
            }
        }
        writeln!(f)?;
        write!(f, "NOTES: {}", doc.notes)
    }
}

/// Renders the export text in the system time zone.
pub fn render(document: &Document) -> String {
    ExportReport::new(document).to_string()
}

/// `SOP-<title>.txt`, with every whitespace run in the title replaced by a
/// single hyphen.
///
/// ```rust
/// use sop_core::export::export_file_name;
///
/// assert_eq!(export_file_name("Daily  Close\tout"), "SOP-Daily-Close-out.txt");
/// assert_eq!(export_file_name(""), "SOP-.txt");
/// ```
pub fn export_file_name(title: &str) -> String {
    let mut name = String::from("SOP-");
    let mut in_run = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_run {
                name.push('-');
            }
            in_run = true;
        } else {
            name.push(c);
            in_run = false;
        }
    }
    name.push_str(".txt");
    name
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{Department, Identifier, Step};

    fn step(description: &str, details: &str, estimated_time: &str) -> Step {
        Step {
            id: Identifier::generate(),
            description: description.to_string(),
            details: details.to_string(),
            estimated_time: estimated_time.to_string(),
        }
    }

    fn create_test_document() -> Document {
        Document {
            id: Identifier::from("doc-1"),
            title: "Daily Close".to_string(),
            department: Department::Operations,
            purpose: "Secure the building".to_string(),
            scope: "Closing staff".to_string(),
            responsible: "Manager on Duty".to_string(),
            frequency: "Daily".to_string(),
            steps: vec![
                step("Lock doors", "Front and back", ""),
                step("Count register", "", "10 min"),
            ],
            notes: "Call if anything is off".to_string(),
            created_at: Timestamp::from_second(1709280000).unwrap(), // 2024-03-01 08:00:00 UTC
            updated_at: Timestamp::from_second(1709719200).unwrap(), // 2024-03-06 10:00:00 UTC
        }
    }

    #[test]
    fn test_export_layout() {
        let doc = create_test_document();
        let text = ExportReport::new(&doc)
            .with_time_zone(TimeZone::UTC)
            .to_string();

        let expected = "\
SOP: Daily Close
Department: Operations
Responsible: Manager on Duty
Frequency: Daily
Last Updated: 3/6/2024

PURPOSE: Secure the building

SCOPE: Closing staff

PROCEDURE:
  1. Lock doors
     Details: Front and back
  2. Count register
     Est. Time: 10 min

NOTES: Call if anything is off";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_export_without_steps_or_text() {
        let mut doc = create_test_document();
        doc.steps.clear();
        doc.title.clear();
        doc.notes.clear();

        let text = ExportReport::new(&doc)
            .with_time_zone(TimeZone::UTC)
            .to_string();

        assert!(text.starts_with("SOP: \n"));
        assert!(text.contains("PROCEDURE:\n\nNOTES: "));
        assert!(text.ends_with("NOTES: "));
        assert!(!text.contains('—'));
    }

    #[test]
    fn test_export_is_deterministic() {
        let doc = create_test_document();
        assert_eq!(render(&doc), render(&doc));
    }

    #[test]
    fn test_file_name_from_report() {
        let doc = create_test_document();
        assert_eq!(ExportReport::new(&doc).file_name(), "SOP-Daily-Close.txt");
    }
}
