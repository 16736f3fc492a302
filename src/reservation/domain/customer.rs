//! Validated customer name.

use super::ReservationDomainError;
use std::fmt;

/// Name of the customer holding a reservation. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Customer(String);

impl Customer {
    /// Creates a validated customer name.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationDomainError::EmptyCustomer`] when nothing remains
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ReservationDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ReservationDomainError::EmptyCustomer);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the customer name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
