//! Error types for reservation domain validation.

use thiserror::Error;

/// Errors returned while constructing reservation domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReservationDomainError {
    /// The timestamp is not an ISO-8601 local date-time.
    #[error("invalid timestamp '{0}', expected ISO-8601 local date-time")]
    InvalidTimestamp(String),

    /// The customer name is empty after trimming.
    #[error("customer must not be empty")]
    EmptyCustomer,
}
