//! # Geez
//!
//! Bidirectional conversion between the Gregorian and Ethiopian (Ge'ez)
//! calendars, plus the helpers a calendar UI needs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        EthiopianCalendar (Settings: locale, policy)      │
//! └─────────────────────────────────────────────────────────┘
//!              │                              │
//!              ▼                              ▼
//! ┌───────────────────────────┐  ┌──────────────────────────┐
//! │  Grid builder / ranges    │  │  Names / formatting      │
//! └───────────────────────────┘  └──────────────────────────┘
//!              │
//!              ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │   Converters  ──►  AnchorTable  ──►  Julian Day Number   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ```
//! use geez::calendar::{ethiopian_to_gregorian, to_ethiopian, GregorianDate};
//!
//! let date = GregorianDate::new(2025, 9, 11).unwrap();
//! let ethiopian = to_ethiopian(date).unwrap();
//! assert_eq!((ethiopian.year, ethiopian.month, ethiopian.day), (2018, 1, 1));
//! assert_eq!(ethiopian_to_gregorian(2018, 1, 1).unwrap(), date);
//! ```

pub mod calendar;
pub mod config;
pub mod engine;
pub mod names;
pub mod render;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::calendar::{
        days_in_ethiopian_month, ethiopian_month_range, ethiopian_to_gregorian, to_ethiopian,
        visible_dates_for_ethiopian_month, CalendarCell, CalendarError, CalendarResult,
        EthiopianDate, GregorianDate, MonthRange, Weekday,
    };
    pub use crate::config::{ErrorPolicy, Settings};
    pub use crate::engine::EthiopianCalendar;
    pub use crate::names::{
        ethiopian_day_name, ethiopian_month_name, format_ethiopian_date, Locale,
    };
}

// Also export at crate root for convenience
pub use calendar::{
    ethiopian_to_gregorian, to_ethiopian, CalendarError, CalendarResult, EthiopianDate,
    GregorianDate,
};
pub use engine::EthiopianCalendar;
