//! Error types for machine domain validation.

use thiserror::Error;

/// Errors returned while constructing machine domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineDomainError {
    /// The capacity is zero, negative, or too large to store.
    #[error("invalid capacity {0} kg, expected a positive integer")]
    InvalidCapacity(i64),
}
