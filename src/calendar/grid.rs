//! Week-aligned month grids for month-view rendering.

use serde::{Deserialize, Serialize};

use super::convert::ethiopian_to_gregorian;
use super::error::CalendarResult;
use super::month::days_in_ethiopian_month;
use super::types::{GregorianDate, Weekday};

pub const DAYS_PER_WEEK: usize = 7;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub gregorian_date: GregorianDate,
    /// Day of the displayed Ethiopian month, or 0 for padding.
    pub ethiopian_day: u8,
    pub is_current_month: bool,
}

impl CalendarCell {
    fn padding(gregorian_date: GregorianDate) -> Self {
        Self {
            gregorian_date,
            ethiopian_day: 0,
            is_current_month: false,
        }
    }

    pub fn is_padding(&self) -> bool {
        !self.is_current_month
    }
}

/// Sunday-first grid for an Ethiopian month.
///
/// Row-major, 7 cells per week, padded on both ends with days of the
/// neighbouring months so the length is a multiple of 7.
pub fn visible_dates_for_ethiopian_month(year: i32, month: u8) -> CalendarResult<Vec<CalendarCell>> {
    visible_dates_with_week_start(year, month, Weekday::Sunday)
}

/// Month grid whose rows start on `week_start`.
pub fn visible_dates_with_week_start(
    year: i32,
    month: u8,
    week_start: Weekday,
) -> CalendarResult<Vec<CalendarCell>> {
    let days = days_in_ethiopian_month(month, year)?;
    let first = ethiopian_to_gregorian(year, month, 1)?;

    let leading = first.weekday().days_since(week_start) as usize;
    let trailing = (DAYS_PER_WEEK - (leading + days as usize) % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    let mut cells = Vec::with_capacity(leading + days as usize + trailing);

    for offset in (1..=leading as i64).rev() {
        cells.push(CalendarCell::padding(first.add_days(-offset)?));
    }

    let mut last = first;
    for day in 1..=days {
        last = ethiopian_to_gregorian(year, month, day)?;
        cells.push(CalendarCell {
            gregorian_date: last,
            ethiopian_day: day,
            is_current_month: true,
        });
    }

    for offset in 1..=trailing as i64 {
        cells.push(CalendarCell::padding(last.add_days(offset)?));
    }

    tracing::debug!(
        year,
        month,
        leading,
        trailing,
        cells = cells.len(),
        "built month grid"
    );
    Ok(cells)
}

/// Split a grid into week rows.
pub fn weeks(cells: &[CalendarCell]) -> impl Iterator<Item = &[CalendarCell]> {
    cells.chunks(DAYS_PER_WEEK)
}
