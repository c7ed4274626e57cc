//! Identifier type and generator for documents and steps.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque string identifier for a document or a step.
///
/// Freshly generated identifiers are UUIDv7 values: a millisecond timestamp
/// prefix followed by random bits, rendered as 32 lowercase hex digits.
/// Identifiers read back from a snapshot are accepted verbatim, whatever
/// their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Generate a new identifier, unique within this process.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
