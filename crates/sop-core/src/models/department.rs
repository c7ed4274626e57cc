//! The fixed set of departments a document can belong to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SopError;

/// Department owning a standard operating procedure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Department {
    #[serde(rename = "Front Desk")]
    FrontDesk,
    Instruction,
    Sales,
    Marketing,
    #[default]
    Operations,
    Management,
    Finance,
    #[serde(rename = "HR")]
    Hr,
    Facilities,
    Other,
}

impl Department {
    /// All departments in presentation order.
    pub const ALL: [Department; 10] = [
        Department::FrontDesk,
        Department::Instruction,
        Department::Sales,
        Department::Marketing,
        Department::Operations,
        Department::Management,
        Department::Finance,
        Department::Hr,
        Department::Facilities,
        Department::Other,
    ];

    /// Human-readable label, identical to the persisted value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::FrontDesk => "Front Desk",
            Department::Instruction => "Instruction",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
            Department::Management => "Management",
            Department::Finance => "Finance",
            Department::Hr => "HR",
            Department::Facilities => "Facilities",
            Department::Other => "Other",
        }
    }
}

impl FromStr for Department {
    type Err = SopError;

    /// Parse a department label, ignoring case and treating `-`/`_` as
    /// spaces.
    ///
    /// ```rust
    /// use sop_core::models::Department;
    ///
    /// assert_eq!("front-desk".parse::<Department>().unwrap(), Department::FrontDesk);
    /// assert_eq!("hr".parse::<Department>().unwrap(), Department::Hr);
    /// assert!("Legal".parse::<Department>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                SopError::invalid_input("department")
                    .with_reason(format!("Unknown department: {s}"))
            })
    }
}
