//! Date value types for both calendars.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{CalendarError, CalendarResult};
use super::jdn;
use super::leap::{days_in_gregorian_month, is_ethiopian_leap};
use super::month::days_in_ethiopian_month;

/// Day of the week. Indexed from Sunday, matching the grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Weekday for an index, wrapping modulo 7 (0 = Sunday).
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    /// Index of this weekday, 0 = Sunday.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Parse a weekday from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sunday" | "sun" => Some(Weekday::Sunday),
            "monday" | "mon" => Some(Weekday::Monday),
            "tuesday" | "tue" => Some(Weekday::Tuesday),
            "wednesday" | "wed" => Some(Weekday::Wednesday),
            "thursday" | "thu" => Some(Weekday::Thursday),
            "friday" | "fri" => Some(Weekday::Friday),
            "saturday" | "sat" => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Number of days from `start` forward to this weekday (0..=6).
    pub fn days_since(self, start: Weekday) -> u8 {
        (self.index() + 7 - start.index()) % 7
    }
}

/// A whole-day proleptic Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    /// Create a date, rejecting days that do not exist.
    pub fn new(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    /// Check that the fields name a real calendar day.
    pub fn validate(&self) -> CalendarResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(CalendarError::InvalidDate(format!(
                "month {} out of range in {}",
                self.month, self
            )));
        }
        let max_day = days_in_gregorian_month(self.year, self.month);
        if self.day < 1 || self.day > max_day {
            return Err(CalendarError::InvalidDate(format!(
                "day {} out of range in {} (max {max_day})",
                self.day, self
            )));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Today's date from the local clock.
    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }

    pub(crate) fn jdn(&self) -> i64 {
        jdn::jdn_from_gregorian(self.year as i64, self.month, self.day)
    }

    pub(crate) fn from_jdn(day_number: i64) -> CalendarResult<Self> {
        let (year, month, day) = jdn::gregorian_from_jdn(day_number);
        let year = i32::try_from(year).map_err(|_| CalendarError::YearOutOfRange(year))?;
        Ok(Self { year, month, day })
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_index(jdn::weekday_from_jdn(self.jdn()))
    }

    /// Shift by a signed number of days, crossing month and year boundaries.
    pub fn add_days(self, delta: i64) -> CalendarResult<Self> {
        Self::from_jdn(self.jdn() + delta)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &GregorianDate) -> i64 {
        other.jdn() - self.jdn()
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|e| CalendarError::InvalidDate(format!("{s:?}: {e}")))
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl TryFrom<GregorianDate> for NaiveDate {
    type Error = CalendarError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(date.year, date.month as u32, date.day as u32)
            .ok_or_else(|| CalendarError::InvalidDate(date.to_string()))
    }
}

/// A date in the Ethiopian (Ge'ez) calendar.
///
/// Months 1-12 have 30 days; month 13 (Pagume) has 5, or 6 in a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EthiopianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl EthiopianDate {
    /// Create a date, rejecting month/day combinations that do not exist.
    pub fn new(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    /// Check the month is 1..=13 and the day fits that month in this year.
    pub fn validate(&self) -> CalendarResult<()> {
        let max_day = days_in_ethiopian_month(self.month, self.year).map_err(|_| {
            CalendarError::invalid_ethiopian(
                self.year,
                self.month,
                self.day,
                "month must be between 1 and 13",
            )
        })?;
        if self.day < 1 || self.day > max_day {
            return Err(CalendarError::invalid_ethiopian(
                self.year,
                self.month,
                self.day,
                format!("day must be between 1 and {max_day}"),
            ));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether this date's year has a 6-day Pagume.
    pub fn is_leap_year(&self) -> bool {
        is_ethiopian_leap(self.year)
    }

    pub(crate) fn jdn(&self) -> i64 {
        jdn::jdn_from_ethiopian(self.year as i64, self.month, self.day)
    }

    pub(crate) fn from_jdn(day_number: i64) -> CalendarResult<Self> {
        let (year, month, day) = jdn::ethiopian_from_jdn(day_number);
        let year = i32::try_from(year).map_err(|_| CalendarError::YearOutOfRange(year))?;
        Ok(Self { year, month, day })
    }

    /// Day of the week. Identical to the weekday of the Gregorian equivalent.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_index(jdn::weekday_from_jdn(self.jdn()))
    }

    /// Shift by a signed number of days, rolling over months and Pagume.
    pub fn add_days(self, delta: i64) -> CalendarResult<Self> {
        Self::from_jdn(self.jdn() + delta)
    }
}

impl fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
