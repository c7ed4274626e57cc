//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
}

/// Wrapper type for displaying operation confirmation messages.
///
/// Warnings are used for recoverable conditions such as a snapshot that
/// could not be written.
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            kind: StatusKind::Success,
        }
    }

    /// Create a new warning status.
    pub fn warning(message: String) -> Self {
        Self {
            message,
            kind: StatusKind::Warning,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Warning => "Warning:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Exported".to_string());
        assert!(format!("{success}").contains("Success:"));

        let warning = OperationStatus::warning("Not saved to disk".to_string());
        assert!(format!("{warning}").contains("Warning:"));
    }
}
