//! Integration tests for month lengths and month ranges.

use geez::calendar::{
    days_in_ethiopian_month, ethiopian_month_range, is_ethiopian_leap, CalendarError,
    GregorianDate, PAGUME,
};

#[test]
fn test_month_length_consistency() {
    for year in 1900..=2100 {
        for month in 1..=12 {
            assert_eq!(days_in_ethiopian_month(month, year).unwrap(), 30);
        }
        let expected = if year % 4 == 3 { 6 } else { 5 };
        assert_eq!(days_in_ethiopian_month(PAGUME, year).unwrap(), expected);
        assert_eq!(is_ethiopian_leap(year), expected == 6);
    }
}

#[test]
fn test_year_lengths_sum() {
    for year in 2010..=2030 {
        let total: u32 = (1..=13)
            .map(|m| days_in_ethiopian_month(m, year).unwrap() as u32)
            .sum();
        assert_eq!(total, if is_ethiopian_leap(year) { 366 } else { 365 });
    }
}

#[test]
fn test_invalid_month() {
    assert_eq!(
        days_in_ethiopian_month(14, 2018),
        Err(CalendarError::InvalidMonth(14))
    );
    assert_eq!(
        days_in_ethiopian_month(0, 2018),
        Err(CalendarError::InvalidMonth(0))
    );
}

#[test]
fn test_ranges_tile_the_year() {
    for year in [2015, 2016, 2017, 2018] {
        let mut expected_start = ethiopian_month_range(year, 1).unwrap().start;
        for month in 1..=13 {
            let range = ethiopian_month_range(year, month).unwrap();
            assert_eq!(range.start, expected_start);
            assert_eq!(
                range.len_days(),
                days_in_ethiopian_month(month, year).unwrap() as i64
            );
            expected_start = range.end.add_days(1).unwrap();
        }
        assert_eq!(expected_start, ethiopian_month_range(year + 1, 1).unwrap().start);
    }
}

#[test]
fn test_tahsas_crosses_gregorian_year() {
    let range = ethiopian_month_range(2018, 4).unwrap();
    assert_eq!(range.start, GregorianDate::new(2025, 12, 10).unwrap());
    assert_eq!(range.end, GregorianDate::new(2026, 1, 8).unwrap());
}

#[test]
fn test_range_propagates_errors() {
    assert_eq!(
        ethiopian_month_range(2018, 0),
        Err(CalendarError::InvalidMonth(0))
    );
}
