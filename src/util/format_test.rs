use super::*;

#[test]
fn group_thousands_inserts_commas() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(89), "89");
    assert_eq!(group_thousands(847), "847");
    assert_eq!(group_thousands(1250), "1,250");
    assert_eq!(group_thousands(100_000), "100,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn short_date_drops_leading_zeros() {
    assert_eq!(short_date(ymd(2024, 12, 1)), "12/1/2024");
    assert_eq!(short_date(ymd(2024, 1, 15)), "1/15/2024");
}

#[test]
fn short_date_keeps_leap_day() {
    assert_eq!(short_date(ymd(2024, 2, 29)), "2/29/2024");
}

#[test]
fn impossible_calendar_dates_cannot_be_built() {
    assert!(NaiveDate::from_ymd_opt(2024, 2, 31).is_none());
    assert!(NaiveDate::from_ymd_opt(2023, 2, 29).is_none());
    assert!(NaiveDate::from_ymd_opt(2024, 4, 31).is_none());
}

#[test]
fn count_label_shows_placeholder_until_loaded() {
    assert_eq!(count_label(None, "posts"), "...");
    assert_eq!(count_label(Some(6), "posts"), "6 posts");
}
