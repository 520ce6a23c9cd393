//! Gregorian <-> Ethiopian conversion.
//!
//! The Ethiopian year is found from the Julian Day Number, then the month
//! segment is located in that year's [`AnchorTable`] and the day is the
//! offset from the month's anchor.

use super::anchor::AnchorTable;
use super::error::{CalendarError, CalendarResult};
use super::jdn;
use super::types::{EthiopianDate, GregorianDate};

/// Convert a Gregorian date to the Ethiopian calendar.
///
/// Fails with [`CalendarError::InvalidDate`] when the fields do not name a
/// real day.
pub fn to_ethiopian(date: GregorianDate) -> CalendarResult<EthiopianDate> {
    date.validate()?;

    let year = jdn::ethiopian_year_of(date.jdn());
    let year = i32::try_from(year).map_err(|_| CalendarError::YearOutOfRange(year))?;
    let table = AnchorTable::for_year(year);

    let month = table
        .month_containing(&date)
        .ok_or(CalendarError::NoMatchingAnchor(date))?;
    let days_since_start = date.jdn() - table.start_jdn(month)?;
    let day = u8::try_from(days_since_start + 1)
        .map_err(|_| CalendarError::NoMatchingAnchor(date))?;

    let ethiopian = EthiopianDate { year, month, day };
    if !ethiopian.is_valid() {
        return Err(CalendarError::NoMatchingAnchor(date));
    }

    tracing::trace!(gregorian = %date, ethiopian = %ethiopian, "converted to ethiopian");
    Ok(ethiopian)
}

/// Convert an Ethiopian `(year, month, day)` to a Gregorian date.
///
/// Fails with [`CalendarError::InvalidEthiopianDate`] when the month is not
/// 1..=13 or the day exceeds the month length. Never clamps.
pub fn ethiopian_to_gregorian(year: i32, month: u8, day: u8) -> CalendarResult<GregorianDate> {
    let ethiopian = EthiopianDate::new(year, month, day)?;
    let anchor = AnchorTable::for_year(year).start_of(month)?;
    let gregorian = anchor.add_days(day as i64 - 1)?;
    tracing::trace!(ethiopian = %ethiopian, gregorian = %gregorian, "converted to gregorian");
    Ok(gregorian)
}

impl GregorianDate {
    /// Shorthand for [`to_ethiopian`].
    pub fn to_ethiopian(self) -> CalendarResult<EthiopianDate> {
        to_ethiopian(self)
    }
}

impl EthiopianDate {
    /// Shorthand for [`ethiopian_to_gregorian`].
    pub fn to_gregorian(self) -> CalendarResult<GregorianDate> {
        ethiopian_to_gregorian(self.year, self.month, self.day)
    }
}

impl TryFrom<GregorianDate> for EthiopianDate {
    type Error = CalendarError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        to_ethiopian(date)
    }
}

impl TryFrom<EthiopianDate> for GregorianDate {
    type Error = CalendarError;

    fn try_from(date: EthiopianDate) -> Result<Self, Self::Error> {
        date.to_gregorian()
    }
}
