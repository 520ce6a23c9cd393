//! Ethiopian / Gregorian calendar engine.
//!
//! All operations are pure functions over value types. The only shared
//! data is the constant [`REFERENCE_ANCHORS`] table.

mod anchor;
mod convert;
mod error;
mod grid;
pub mod jdn;
mod leap;
mod month;
mod types;

pub use anchor::{AnchorEntry, AnchorTable, REFERENCE_ANCHORS, REFERENCE_YEAR};
pub use convert::{ethiopian_to_gregorian, to_ethiopian};
pub use error::{CalendarError, CalendarResult};
pub use grid::{
    visible_dates_for_ethiopian_month, visible_dates_with_week_start, weeks, CalendarCell,
    DAYS_PER_WEEK,
};
pub use leap::{days_in_gregorian_month, is_ethiopian_leap, is_gregorian_leap};
pub use month::{
    days_in_ethiopian_month, ethiopian_month_range, MonthRange, MONTHS_PER_YEAR, PAGUME,
};
pub use types::{EthiopianDate, GregorianDate, Weekday};
