//! Validated machine load capacity.

use super::MachineDomainError;
use std::fmt;

/// Load capacity in whole kilograms. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capacity(u32);

impl Capacity {
    /// Creates a validated capacity.
    ///
    /// The raw value is signed so that negative request input is reported as
    /// a validation failure rather than a decoding failure.
    ///
    /// # Errors
    ///
    /// Returns [`MachineDomainError::InvalidCapacity`] when the value is zero,
    /// negative, or exceeds `u32::MAX`.
    pub fn new(kilograms: i64) -> Result<Self, MachineDomainError> {
        match u32::try_from(kilograms) {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(MachineDomainError::InvalidCapacity(kilograms)),
        }
    }

    /// Returns the capacity in kilograms.
    #[must_use]
    pub const fn kilograms(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.0)
    }
}
