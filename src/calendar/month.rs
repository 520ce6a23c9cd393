//! Month lengths and the Gregorian span of an Ethiopian month.

use serde::{Deserialize, Serialize};

use super::convert::ethiopian_to_gregorian;
use super::error::{CalendarError, CalendarResult};
use super::leap::is_ethiopian_leap;
use super::types::GregorianDate;

/// Number of Ethiopian months, including Pagume.
pub const MONTHS_PER_YEAR: u8 = 13;

/// Index of the intercalary month.
pub const PAGUME: u8 = 13;

/// Number of days in an Ethiopian month: 30, or 5/6 for Pagume.
pub fn days_in_ethiopian_month(month: u8, year: i32) -> CalendarResult<u8> {
    match month {
        1..=12 => Ok(30),
        PAGUME => Ok(if is_ethiopian_leap(year) { 6 } else { 5 }),
        _ => Err(CalendarError::InvalidMonth(month)),
    }
}

/// Inclusive Gregorian span covered by one Ethiopian month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    pub start: GregorianDate,
    pub end: GregorianDate,
}

impl MonthRange {
    /// A degenerate range covering one day.
    pub fn single(date: GregorianDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Check if a Gregorian date falls inside the range.
    pub fn contains(&self, date: &GregorianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Number of days covered, both ends included.
    pub fn len_days(&self) -> i64 {
        self.start.days_until(&self.end) + 1
    }
}

/// Gregorian first and last day of an Ethiopian month.
pub fn ethiopian_month_range(year: i32, month: u8) -> CalendarResult<MonthRange> {
    let last_day = days_in_ethiopian_month(month, year)?;
    Ok(MonthRange {
        start: ethiopian_to_gregorian(year, month, 1)?,
        end: ethiopian_to_gregorian(year, month, last_day)?,
    })
}
