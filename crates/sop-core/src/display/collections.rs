//! Collection wrapper types for displaying groups of documents and
//! templates.

use std::fmt;

use super::{or_placeholder, UNTITLED};
use crate::{models::Document, templates::Template};

/// Wrapper for displaying a filtered document list.
///
/// The empty message depends on whether the store itself is empty or the
/// filter simply matched nothing.
///
/// # Examples
///
/// ```rust
/// use sop_core::{display::DocumentSummaries, models::Document};
///
/// let empty = DocumentSummaries::new(vec![], 0);
/// assert!(empty.to_string().contains("No SOPs yet."));
///
/// let doc = Document::blank();
/// let none_matching = DocumentSummaries::new(vec![], 1);
/// assert!(none_matching.to_string().contains("No matches found."));
///
/// let listed = DocumentSummaries::new(vec![&doc], 1);
/// assert!(listed.to_string().contains("- **Steps**: 1 step"));
/// ```
pub struct DocumentSummaries<'a> {
    documents: Vec<&'a Document>,
    total: usize,
}

impl<'a> DocumentSummaries<'a> {
    /// `total` is the size of the unfiltered store.
    pub fn new(documents: Vec<&'a Document>, total: usize) -> Self {
        Self { documents, total }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Document> + '_ {
        self.documents.iter().copied()
    }
}

impl fmt::Display for DocumentSummaries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.documents.is_empty() {
            return if self.total == 0 {
                writeln!(f, "No SOPs yet. Create one or use a template below!")
            } else {
                writeln!(f, "No matches found.")
            };
        }

        for doc in &self.documents {
            let count = doc.steps.len();
            writeln!(
                f,
                "## {} (ID: {})",
                or_placeholder(&doc.title, UNTITLED),
                doc.id
            )?;
            writeln!(f)?;
            writeln!(f, "- **Department**: {}", doc.department)?;
            writeln!(
                f,
                "- **Steps**: {count} {}",
                if count == 1 { "step" } else { "steps" }
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Wrapper for displaying the template catalog with 1-based positions.
pub struct Templates(pub &'static [Template]);

impl fmt::Display for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, template) in self.0.iter().enumerate() {
            writeln!(f, "## {}. {}", i + 1, template.title)?;
            writeln!(f)?;
            writeln!(f, "- **Department**: {}", template.department)?;
            writeln!(f, "- **Frequency**: {}", template.frequency)?;
            writeln!(f, "- **Steps**: {}", template.steps.len())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::catalog;

    #[test]
    fn test_templates_listing() {
        let output = Templates(catalog()).to_string();

        assert!(output.contains("## 1. Opening Procedures"));
        assert!(output.contains("## 5. Social Media Content Posting"));
        assert!(output.contains("- **Department**: Management"));
    }

    #[test]
    fn test_summaries_use_untitled_placeholder() {
        let mut doc = Document::blank();
        doc.steps.clear();
        let output = DocumentSummaries::new(vec![&doc], 1).to_string();

        assert!(output.contains("## Untitled SOP (ID: "));
        assert!(output.contains("- **Steps**: 0 steps"));
    }
}
