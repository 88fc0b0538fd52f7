use super::*;

#[test]
fn joined_label_uses_short_date() {
    let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
    assert_eq!(joined_label(date), "Joined 1/15/2023");
}
