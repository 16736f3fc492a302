//! Booking timestamps in naive local time.

use super::ReservationDomainError;
use chrono::{NaiveDate, NaiveDateTime, SubsecRound, Timelike};
use std::fmt;

/// Date-time layouts accepted by [`BookingTime::parse`], tried in order.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Canonical storage and display layout.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A naive local date-time truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingTime(NaiveDateTime);

impl BookingTime {
    /// Wraps a date-time, dropping sub-second precision.
    #[must_use]
    pub fn from_naive(value: NaiveDateTime) -> Self {
        Self(value.trunc_subsecs(0))
    }

    /// Parses an ISO-8601 local date-time.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` and `YYYY-MM-DDTHH:MM:SS`
    /// with optional fractional seconds, using `T` or a space as separator.
    /// A bare date means midnight. UTC offsets are not accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationDomainError::InvalidTimestamp`] for any other
    /// input.
    pub fn parse(raw: &str) -> Result<Self, ReservationDomainError> {
        let input = raw.trim();
        DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(input, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(Self::from_naive)
            .ok_or_else(|| ReservationDomainError::InvalidTimestamp(raw.to_owned()))
    }

    /// Returns the wrapped date-time.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the start of the minute this time falls in.
    #[must_use]
    pub fn minute(&self) -> NaiveDateTime {
        truncate_to_minute(self.0)
    }
}

/// Drops the seconds and sub-second components of `value`.
///
/// A leap second (`:60`) falls in the minute it extends.
pub(super) fn truncate_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    value
        .with_nanosecond(0)
        .and_then(|whole| whole.with_second(0))
        .unwrap_or(value)
}

impl fmt::Display for BookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}
