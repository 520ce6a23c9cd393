//! Configured entry point for calendar UIs.
//!
//! [`EthiopianCalendar`] binds [`Settings`] to the free functions in
//! [`crate::calendar`] and [`crate::names`]: the locale picks the names,
//! the grid settings pick the first weekday, and the error policy decides
//! whether range and grid helpers propagate errors or substitute a fallback.

use crate::calendar::{
    self, AnchorTable, CalendarCell, CalendarError, CalendarResult, EthiopianDate, GregorianDate,
    MonthRange,
};
use crate::config::{ErrorPolicy, Settings};
use crate::names::{self, Locale};

/// Calendar engine configured by [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct EthiopianCalendar {
    settings: Settings,
}

impl EthiopianCalendar {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn locale(&self) -> Locale {
        self.settings.locale
    }

    /// Today's Ethiopian date from the local clock.
    pub fn today(&self) -> CalendarResult<EthiopianDate> {
        calendar::to_ethiopian(GregorianDate::today())
    }

    pub fn to_ethiopian(&self, date: GregorianDate) -> CalendarResult<EthiopianDate> {
        calendar::to_ethiopian(date)
    }

    /// Parse an ISO `YYYY-MM-DD` Gregorian date and convert it.
    pub fn parse_to_ethiopian(&self, input: &str) -> CalendarResult<EthiopianDate> {
        calendar::to_ethiopian(input.parse()?)
    }

    pub fn to_gregorian(&self, year: i32, month: u8, day: u8) -> CalendarResult<GregorianDate> {
        calendar::ethiopian_to_gregorian(year, month, day)
    }

    pub fn days_in_month(&self, month: u8, year: i32) -> CalendarResult<u8> {
        calendar::days_in_ethiopian_month(month, year)
    }

    pub fn anchors(&self, year: i32) -> AnchorTable {
        AnchorTable::for_year(year)
    }

    /// Gregorian span of an Ethiopian month.
    ///
    /// Under [`ErrorPolicy::Fallback`] an invalid month yields `(today, today)`.
    /// Internal faults propagate under either policy.
    pub fn month_range(&self, year: i32, month: u8) -> CalendarResult<MonthRange> {
        match calendar::ethiopian_month_range(year, month) {
            Ok(range) => Ok(range),
            Err(e) if self.falls_back(&e) => {
                tracing::warn!(year, month, error = %e, "month range failed, using today");
                Ok(MonthRange::single(GregorianDate::today()))
            }
            Err(e) => Err(e),
        }
    }

    /// Month grid using the configured first weekday.
    ///
    /// Under [`ErrorPolicy::Fallback`] an invalid month yields an empty grid.
    /// Internal faults propagate under either policy.
    pub fn visible_dates(&self, year: i32, month: u8) -> CalendarResult<Vec<CalendarCell>> {
        let week_start = self.settings.grid.week_start;
        match calendar::visible_dates_with_week_start(year, month, week_start) {
            Ok(cells) => Ok(cells),
            Err(e) if self.falls_back(&e) => {
                tracing::warn!(year, month, error = %e, "month grid failed, using empty grid");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn falls_back(&self, error: &CalendarError) -> bool {
        self.settings.errors.policy == ErrorPolicy::Fallback && error.is_input_error()
    }

    pub fn month_name(&self, month: u8) -> &'static str {
        names::ethiopian_month_name_in(self.locale(), month)
    }

    pub fn day_name(&self, weekday: u8) -> &'static str {
        names::ethiopian_day_name_in(self.locale(), weekday)
    }

    pub fn format(&self, date: &EthiopianDate) -> String {
        names::format_ethiopian_date_in(self.locale(), date)
    }
}
