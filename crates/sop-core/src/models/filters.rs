//! List filtering over the document store.

use std::str::FromStr;

use super::{Department, Document};
use crate::error::SopError;

/// Department criterion of a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    /// Every department matches
    #[default]
    All,

    /// Exact department match
    Only(Department),
}

impl DepartmentFilter {
    fn matches(&self, department: Department) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(wanted) => *wanted == department,
        }
    }
}

impl FromStr for DepartmentFilter {
    type Err = SopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(DepartmentFilter::All)
        } else {
            s.parse().map(DepartmentFilter::Only)
        }
    }
}

impl From<Department> for DepartmentFilter {
    fn from(department: Department) -> Self {
        DepartmentFilter::Only(department)
    }
}

/// Criteria for deriving the visible document list.
///
/// Both criteria must hold. An empty query matches everything; otherwise it
/// is a case-insensitive substring match against the title or the
/// department label.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub department: DepartmentFilter,
    pub query: String,
}

impl ListFilter {
    /// Whether any criterion is active.
    pub fn is_active(&self) -> bool {
        self.department != DepartmentFilter::All || !self.query.is_empty()
    }

    /// Tests a single document against the criteria.
    pub fn matches(&self, document: &Document) -> bool {
        self.department.matches(document.department) && self.matches_query(document)
    }

    fn matches_query(&self, document: &Document) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        document.title.to_lowercase().contains(&needle)
            || document.department.as_str().to_lowercase().contains(&needle)
    }

    /// Applies the filter, preserving the relative order of `documents`.
    pub fn apply<'a>(&self, documents: &'a [Document]) -> Vec<&'a Document> {
        documents.iter().filter(|d| self.matches(d)).collect()
    }
}
