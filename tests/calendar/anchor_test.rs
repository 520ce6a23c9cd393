//! Integration tests for the month-start anchor tables.

use geez::calendar::{
    ethiopian_to_gregorian, AnchorTable, GregorianDate, REFERENCE_ANCHORS, REFERENCE_YEAR,
};

#[test]
fn test_reference_anchors_hold_for_matching_years() {
    // The fixed table is exact unless the previous year had a leap Pagume
    for year in [2013, 2014, 2015, 2017, 2018, 2019, 2021, 2022] {
        let table = AnchorTable::for_year(year);
        assert_eq!(table.entries().collect::<Vec<_>>(), REFERENCE_ANCHORS.to_vec());
    }
}

#[test]
fn test_reference_anchors_stop_at_century_exceptions() {
    // 1900 and 2100 are not Gregorian leap years
    for year in [1893, 1895, 2089, 2091] {
        let table = AnchorTable::for_year(year);
        assert_eq!(table.entries().collect::<Vec<_>>(), REFERENCE_ANCHORS.to_vec());
    }
    for year in [1889, 1891, 2093, 2094, 2095, 2097] {
        let table = AnchorTable::for_year(year);
        assert_ne!(table.entries().collect::<Vec<_>>(), REFERENCE_ANCHORS.to_vec());
    }
}

#[test]
fn test_reference_anchors_drift_in_other_years() {
    // New Year falls on Sep 12 after a leap Pagume
    let table = AnchorTable::for_year(2016);
    assert_ne!(table.entries().collect::<Vec<_>>(), REFERENCE_ANCHORS.to_vec());
    assert_eq!(table.start_of(1).unwrap(), GregorianDate::new(2023, 9, 12).unwrap());

    assert_eq!(table.start_of(6).unwrap(), GregorianDate::new(2024, 2, 9).unwrap());

    // The Gregorian leap day brings it back in step
    assert_eq!(table.start_of(7).unwrap(), GregorianDate::new(2024, 3, 10).unwrap());
    let table = AnchorTable::for_year(2020);
    assert_eq!(table.start_of(1).unwrap(), GregorianDate::new(2027, 9, 12).unwrap());
    assert_eq!(table.start_of(7).unwrap(), GregorianDate::new(2028, 3, 10).unwrap());
}

#[test]
fn test_anchor_matches_converter() {
    for year in 2010..=2030 {
        let table = AnchorTable::for_year(year);
        for month in 1..=13 {
            assert_eq!(
                table.start_of(month).unwrap(),
                ethiopian_to_gregorian(year, month, 1).unwrap()
            );
        }
    }
}

#[test]
fn test_month_containing_covers_whole_year() {
    let table = AnchorTable::for_year(REFERENCE_YEAR);
    let first = table.start_of(1).unwrap();
    let mut month = 1;
    for offset in 0..365 {
        let date = first.add_days(offset).unwrap();
        let found = table.month_containing(&date).unwrap();
        assert!(found == month || found == month + 1);
        month = found;
    }
    assert_eq!(month, 13);
    assert_eq!(table.month_containing(&first.add_days(365).unwrap()), None);
}
