//! Display names for Ethiopian months and weekdays.
//!
//! Lookups are display-only and never fail: an out-of-range index falls
//! back to the first entry of the table.

use serde::{Deserialize, Serialize};

use crate::calendar::EthiopianDate;

/// Language used for month and weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Ge'ez script names.
    #[default]
    Amharic,
    /// Latin transliterations and English weekday names.
    English,
}

impl Locale {
    /// Parse a locale from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "amharic" | "am" | "am-et" => Some(Locale::Amharic),
            "english" | "en" | "en-us" | "en-gb" => Some(Locale::English),
            _ => None,
        }
    }

    fn month_names(self) -> &'static [&'static str; 13] {
        match self {
            Locale::Amharic => &AMHARIC_MONTHS,
            Locale::English => &ENGLISH_MONTHS,
        }
    }

    fn day_names(self) -> &'static [&'static str; 7] {
        match self {
            Locale::Amharic => &AMHARIC_DAYS,
            Locale::English => &ENGLISH_DAYS,
        }
    }
}

const AMHARIC_MONTHS: [&str; 13] = [
    "መስከረም",
    "ጥቅምት",
    "ኅዳር",
    "ታኅሣሥ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሐሴ",
    "ጳጉሜን",
];

const ENGLISH_MONTHS: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazia", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

// Sunday first, matching `Weekday::index`.
const AMHARIC_DAYS: [&str; 7] = ["እሑድ", "ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ"];

const ENGLISH_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Amharic name of an Ethiopian month (1-13).
pub fn ethiopian_month_name(month: u8) -> &'static str {
    ethiopian_month_name_in(Locale::Amharic, month)
}

/// Name of an Ethiopian month (1-13) in the given locale.
pub fn ethiopian_month_name_in(locale: Locale, month: u8) -> &'static str {
    let names = locale.month_names();
    let idx = month
        .checked_sub(1)
        .map(usize::from)
        .filter(|i| *i < names.len())
        .unwrap_or(0);
    names[idx]
}

/// Amharic name of a weekday (0 = Sunday).
pub fn ethiopian_day_name(weekday: u8) -> &'static str {
    ethiopian_day_name_in(Locale::Amharic, weekday)
}

/// Name of a weekday (0 = Sunday) in the given locale.
pub fn ethiopian_day_name_in(locale: Locale, weekday: u8) -> &'static str {
    let names = locale.day_names();
    names.get(weekday as usize).copied().unwrap_or(names[0])
}

/// `"<weekday> <day> <month> <year>"` in Amharic.
pub fn format_ethiopian_date(date: &EthiopianDate) -> String {
    format_ethiopian_date_in(Locale::Amharic, date)
}

/// `"<weekday> <day> <month> <year>"` in the given locale.
pub fn format_ethiopian_date_in(locale: Locale, date: &EthiopianDate) -> String {
    format!(
        "{} {} {} {}",
        ethiopian_day_name_in(locale, date.weekday().index()),
        date.day,
        ethiopian_month_name_in(locale, date.month),
        date.year
    )
}
