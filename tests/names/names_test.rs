//! Integration tests for month/weekday names and date formatting.

use geez::calendar::EthiopianDate;
use geez::names::{
    ethiopian_day_name, ethiopian_day_name_in, ethiopian_month_name, ethiopian_month_name_in,
    format_ethiopian_date, format_ethiopian_date_in, Locale,
};

#[test]
fn test_all_months_named() {
    for locale in [Locale::Amharic, Locale::English] {
        let names: Vec<_> = (1..=13).map(|m| ethiopian_month_name_in(locale, m)).collect();
        assert!(names.iter().all(|n| !n.is_empty()));
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate month name {name}");
        }
    }
}

#[test]
fn test_english_names() {
    assert_eq!(ethiopian_month_name_in(Locale::English, 1), "Meskerem");
    assert_eq!(ethiopian_month_name_in(Locale::English, 13), "Pagume");
    assert_eq!(ethiopian_day_name_in(Locale::English, 0), "Sunday");
    assert_eq!(ethiopian_day_name_in(Locale::English, 6), "Saturday");
}

#[test]
fn test_lookup_is_deterministic() {
    for month in 0..=20 {
        assert_eq!(ethiopian_month_name(month), ethiopian_month_name(month));
    }
}

#[test]
fn test_out_of_range_falls_back_to_first() {
    assert_eq!(ethiopian_month_name(0), ethiopian_month_name(1));
    assert_eq!(ethiopian_month_name(99), ethiopian_month_name(1));
    assert_eq!(ethiopian_day_name(7), ethiopian_day_name(0));
    assert_eq!(ethiopian_day_name(u8::MAX), ethiopian_day_name(0));
}

#[test]
fn test_format_new_year() {
    let date = EthiopianDate::new(2018, 1, 1).unwrap();
    assert_eq!(format_ethiopian_date(&date), "ሐሙስ 1 መስከረም 2018");
    assert_eq!(
        format_ethiopian_date_in(Locale::English, &date),
        "Thursday 1 Meskerem 2018"
    );
}

#[test]
fn test_format_pagume() {
    let date = EthiopianDate::new(2015, 13, 6).unwrap();
    // Sep 11, 2023 was a Monday
    assert_eq!(
        format_ethiopian_date_in(Locale::English, &date),
        "Monday 6 Pagume 2015"
    );
}
