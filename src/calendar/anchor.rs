//! Month-start anchors: where each Ethiopian month begins on the Gregorian
//! calendar.

use serde::{Deserialize, Serialize};

use super::error::{CalendarError, CalendarResult};
use super::jdn::{gregorian_from_jdn, jdn_from_ethiopian};
use super::month::MONTHS_PER_YEAR;
use super::types::GregorianDate;

/// Start of one Ethiopian month expressed as a Gregorian month/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorEntry {
    pub ethiopian_month: u8,
    /// Always 1.
    pub ethiopian_start_day: u8,
    pub gregorian_month: u8,
    pub gregorian_start_day: u8,
}

impl AnchorEntry {
    const fn new(ethiopian_month: u8, gregorian_month: u8, gregorian_start_day: u8) -> Self {
        Self {
            ethiopian_month,
            ethiopian_start_day: 1,
            gregorian_month,
            gregorian_start_day,
        }
    }

    /// Offset from the Ethiopian year to the Gregorian year in which this
    /// month starts. Meskerem..Tahsas start before the Gregorian new year.
    pub fn gregorian_year_offset(&self) -> i32 {
        if self.ethiopian_month <= 4 {
            7
        } else {
            8
        }
    }
}

/// Ethiopian year whose month starts [`REFERENCE_ANCHORS`] describes.
pub const REFERENCE_YEAR: i32 = 2018;

/// Month starts for the reference year 2018 (Sep 11, 2025 - Sep 10, 2026).
///
/// Exact for Ethiopian years 1893..=2091 with `y mod 4 != 0`, the span
/// between the Gregorian non-leap centuries 1900 and 2100. A year that
/// follows a leap Pagume starts on Sep 12 and runs a day late until the
/// Gregorian leap day; use [`AnchorTable::for_year`] for exact dates.
pub const REFERENCE_ANCHORS: [AnchorEntry; 13] = [
    AnchorEntry::new(1, 9, 11),
    AnchorEntry::new(2, 10, 11),
    AnchorEntry::new(3, 11, 10),
    AnchorEntry::new(4, 12, 10),
    AnchorEntry::new(5, 1, 9),
    AnchorEntry::new(6, 2, 8),
    AnchorEntry::new(7, 3, 10),
    AnchorEntry::new(8, 4, 9),
    AnchorEntry::new(9, 5, 9),
    AnchorEntry::new(10, 6, 8),
    AnchorEntry::new(11, 7, 8),
    AnchorEntry::new(12, 8, 7),
    AnchorEntry::new(13, 9, 6),
];

/// Exact month starts for one Ethiopian year.
///
/// Starts are kept as Julian Day Numbers, so a table can be built for any
/// `i32` year even when some of its months begin past the last representable
/// Gregorian year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorTable {
    year: i32,
    starts: [i64; 13],
    /// First day of the following Ethiopian year (exclusive end).
    next_new_year: i64,
}

impl AnchorTable {
    /// Build the table for an Ethiopian year.
    pub fn for_year(year: i32) -> Self {
        let mut starts = [0; 13];
        for (i, slot) in starts.iter_mut().enumerate() {
            *slot = jdn_from_ethiopian(year as i64, i as u8 + 1, 1);
        }

        Self {
            year,
            starts,
            next_new_year: jdn_from_ethiopian(year as i64 + 1, 1, 1),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Gregorian date on which an Ethiopian month begins.
    ///
    /// Fails with [`CalendarError::YearOutOfRange`] when that date lies
    /// outside the `i32` Gregorian years.
    pub fn start_of(&self, month: u8) -> CalendarResult<GregorianDate> {
        GregorianDate::from_jdn(self.start_jdn(month)?)
    }

    pub(crate) fn start_jdn(&self, month: u8) -> CalendarResult<i64> {
        Self::index(month).map(|i| self.starts[i])
    }

    /// Anchor entry for a month.
    pub fn entry(&self, month: u8) -> CalendarResult<AnchorEntry> {
        let start = self.start_jdn(month)?;
        Ok(Self::entry_at(month, start))
    }

    /// All 13 entries in month order.
    pub fn entries(&self) -> impl Iterator<Item = AnchorEntry> + '_ {
        self.starts
            .iter()
            .enumerate()
            .map(|(i, &start)| Self::entry_at(i as u8 + 1, start))
    }

    /// Ethiopian month whose segment contains `date`, if it falls in this year.
    pub fn month_containing(&self, date: &GregorianDate) -> Option<u8> {
        let day_number = date.jdn();
        if day_number < self.starts[0] || day_number >= self.next_new_year {
            return None;
        }
        // Number of month starts on or before the date.
        let idx = self.starts.partition_point(|&start| start <= day_number);
        Some(idx as u8)
    }

    fn entry_at(month: u8, start: i64) -> AnchorEntry {
        let (_, gregorian_month, gregorian_day) = gregorian_from_jdn(start);
        AnchorEntry::new(month, gregorian_month, gregorian_day)
    }

    fn index(month: u8) -> CalendarResult<usize> {
        if (1..=MONTHS_PER_YEAR).contains(&month) {
            Ok(month as usize - 1)
        } else {
            Err(CalendarError::InvalidMonth(month))
        }
    }
}
