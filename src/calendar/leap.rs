//! Leap-year rules for both calendars.

/// Proleptic Gregorian leap year.
pub fn is_gregorian_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Ethiopian leap year: Pagume has 6 days when `year mod 4 == 3`.
///
/// The 6th of Pagume falls in the September before a Gregorian year
/// divisible by 4, so Ethiopian year `y` is leap exactly when `y + 9` is
/// divisible by 4. The Gregorian century exceptions do not apply.
pub fn is_ethiopian_leap(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Number of days in a Gregorian month. Months outside 1..=12 yield 0.
pub fn days_in_gregorian_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_gregorian_leap(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
