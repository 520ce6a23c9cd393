//! Julian Day Number arithmetic.
//!
//! Both calendars are mapped onto one continuous day count so that
//! conversion is exact for every year instead of only near a reference
//! year.

/// JDN of 1970-01-01 (Gregorian).
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// JDN of 1 Meskerem 1 (Amete Mihret era), i.e. 29 August 8 CE (Julian).
pub const ETHIOPIAN_EPOCH_JDN: i64 = 1_724_221;

/// Days in a four-year Ethiopian cycle.
const ETHIOPIAN_CYCLE_DAYS: i64 = 1461;

/// JDN of a proleptic Gregorian date.
///
/// Months and days are not validated.
pub fn jdn_from_gregorian(year: i64, month: u8, day: u8) -> i64 {
    let m = month as i64;
    let d = day as i64;
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + UNIX_EPOCH_JDN
}

/// Proleptic Gregorian `(year, month, day)` for a JDN.
pub fn gregorian_from_jdn(jdn: i64) -> (i64, u8, u8) {
    let z = jdn - UNIX_EPOCH_JDN + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}

/// JDN of an Ethiopian date.
///
/// Months and days are not validated.
pub fn jdn_from_ethiopian(year: i64, month: u8, day: u8) -> i64 {
    ETHIOPIAN_EPOCH_JDN - 1
        + 365 * (year - 1)
        + year.div_euclid(4)
        + 30 * (month as i64 - 1)
        + day as i64
}

/// Ethiopian year containing a JDN.
pub fn ethiopian_year_of(jdn: i64) -> i64 {
    (4 * (jdn - ETHIOPIAN_EPOCH_JDN) + 1463).div_euclid(ETHIOPIAN_CYCLE_DAYS)
}

/// Ethiopian `(year, month, day)` for a JDN.
pub fn ethiopian_from_jdn(jdn: i64) -> (i64, u8, u8) {
    let year = ethiopian_year_of(jdn);
    let month = (jdn - jdn_from_ethiopian(year, 1, 1)).div_euclid(30) + 1;
    let day = jdn - jdn_from_ethiopian(year, month as u8, 1) + 1;
    (year, month as u8, day as u8)
}

/// Weekday index for a JDN, 0 = Sunday.
pub fn weekday_from_jdn(jdn: i64) -> u8 {
    (jdn + 1).rem_euclid(7) as u8
}
