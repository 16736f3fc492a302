//! Crate-wide error classification.
//!
//! Every service error maps onto one [`ErrorKind`] so transport layers can
//! translate failures without matching on module-specific variants.

use serde::Serialize;
use std::fmt;

/// Coarse classification shared by registry and ledger errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A referenced machine is not registered.
    NotFound,
    /// A duplicate machine id or an already booked slot.
    Conflict,
    /// Malformed timestamp, bad capacity, empty customer or request body.
    InvalidInput,
    /// Storage failure or corrupt persisted data.
    Internal,
}

impl ErrorKind {
    /// Returns the wire representation used in error bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::InvalidInput => "invalid_input",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
