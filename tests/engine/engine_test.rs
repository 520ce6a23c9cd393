//! Integration tests for the configured calendar engine.

use geez::calendar::{CalendarError, GregorianDate, Weekday};
use geez::config::{ErrorPolicy, Settings};
use geez::names::Locale;
use geez::EthiopianCalendar;

fn fallback() -> EthiopianCalendar {
    EthiopianCalendar::new(Settings::default().with_policy(ErrorPolicy::Fallback))
}

#[test]
fn test_default_engine_propagates() {
    let cal = EthiopianCalendar::default();
    assert_eq!(cal.month_range(2018, 14), Err(CalendarError::InvalidMonth(14)));
    assert_eq!(cal.visible_dates(2018, 0), Err(CalendarError::InvalidMonth(0)));
}

#[test]
fn test_fallback_range_is_today() {
    let cal = fallback();
    let before = GregorianDate::today();
    let range = cal.month_range(2018, 14).unwrap();
    let after = GregorianDate::today();

    assert_eq!(range.start, range.end);
    assert!(range.start == before || range.start == after);
}

#[test]
fn test_fallback_grid_is_empty() {
    let cal = fallback();
    assert!(cal.visible_dates(2018, 14).unwrap().is_empty());
}

#[test]
fn test_fallback_masks_unrepresentable_year() {
    let cal = fallback();
    let range = cal.month_range(i32::MAX, 1).unwrap();
    assert_eq!(range.start, range.end);

    assert!(matches!(
        EthiopianCalendar::default().month_range(i32::MAX, 1),
        Err(CalendarError::YearOutOfRange(_))
    ));
}

#[test]
fn test_fallback_does_not_mask_valid_input() {
    let cal = fallback();
    let range = cal.month_range(2018, 1).unwrap();
    assert_eq!(range.start, GregorianDate::new(2025, 9, 11).unwrap());
    assert_eq!(cal.visible_dates(2018, 1).unwrap().len(), 35);
}

#[test]
fn test_converters_always_propagate() {
    let cal = fallback();
    assert!(cal.to_gregorian(2018, 13, 7).is_err());
    assert!(matches!(
        cal.parse_to_ethiopian("2025-02-30"),
        Err(CalendarError::InvalidDate(_))
    ));
    assert!(cal.days_in_month(14, 2018).is_err());
}

#[test]
fn test_parse_to_ethiopian() {
    let cal = EthiopianCalendar::default();
    let date = cal.parse_to_ethiopian("2025-09-11").unwrap();
    assert_eq!((date.year, date.month, date.day), (2018, 1, 1));
}

#[test]
fn test_week_start_setting() {
    let cal = EthiopianCalendar::new(Settings::default().with_week_start(Weekday::Monday));
    let cells = cal.visible_dates(2018, 1).unwrap();
    assert_eq!(cells[0].gregorian_date.weekday(), Weekday::Monday);
}

#[test]
fn test_locale_setting() {
    let cal = EthiopianCalendar::new(Settings::default().with_locale(Locale::English));
    assert_eq!(cal.month_name(2), "Tikimt");
    assert_eq!(cal.day_name(4), "Thursday");

    let date = cal.to_ethiopian(GregorianDate::new(2025, 9, 11).unwrap()).unwrap();
    assert_eq!(cal.format(&date), "Thursday 1 Meskerem 2018");

    let amharic = EthiopianCalendar::default();
    assert_eq!(amharic.format(&date), "ሐሙስ 1 መስከረም 2018");
}

#[test]
fn test_today_round_trips() {
    let cal = EthiopianCalendar::default();
    let today = cal.today().unwrap();
    let gregorian = today.to_gregorian().unwrap();
    assert_eq!(cal.to_ethiopian(gregorian).unwrap(), today);
}

#[test]
fn test_anchors() {
    let cal = EthiopianCalendar::default();
    let table = cal.anchors(2018);
    assert_eq!(table.year(), 2018);
    assert_eq!(table.entries().count(), 13);
}
