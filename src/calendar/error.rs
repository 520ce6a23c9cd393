//! Error types for calendar conversion.

use thiserror::Error;

use super::types::GregorianDate;

/// Result type for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Errors raised by the converters and month helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A Gregorian date that is not a real calendar day, or an unparsable string.
    #[error("invalid Gregorian date: {0}")]
    InvalidDate(String),

    /// An Ethiopian month/day outside the valid range for that month and year.
    #[error("invalid Ethiopian date {year}-{month}-{day}: {reason}")]
    InvalidEthiopianDate {
        year: i32,
        month: u8,
        day: u8,
        reason: String,
    },

    /// Month index outside 1..=13.
    #[error("invalid Ethiopian month: {0} (expected 1-13)")]
    InvalidMonth(u8),

    /// No Ethiopian month segment contains the date.
    ///
    /// The day-number arithmetic always lands on a month, so this indicates
    /// a broken invariant rather than bad input.
    #[error("no Ethiopian month segment contains {0}")]
    NoMatchingAnchor(GregorianDate),

    /// A converted year does not fit in `i32`.
    #[error("year out of range: {0}")]
    YearOutOfRange(i64),
}

impl CalendarError {
    /// Create an invalid Ethiopian date error.
    pub fn invalid_ethiopian(year: i32, month: u8, day: u8, reason: impl Into<String>) -> Self {
        Self::InvalidEthiopianDate {
            year,
            month,
            day,
            reason: reason.into(),
        }
    }

    /// Check if the error was caused by caller input rather than an internal fault.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, CalendarError::NoMatchingAnchor(_))
    }
}
