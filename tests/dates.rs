use agenda::dates::{format_date, merge, parse_date, parse_date_set};
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn parse_and_format_canonical_dates() {
    assert_eq!(parse_date("05/11/25"), Some(ymd(2025, 11, 5)));
    assert_eq!(format_date(ymd(2025, 1, 2)), "02/01/25");
}

#[test]
fn parse_rejects_impossible_and_foreign_shapes() {
    assert_eq!(parse_date("32/01/25"), None);
    assert_eq!(parse_date("29/02/25"), None);
    assert_eq!(parse_date("2025-11-05"), None);
    assert_eq!(parse_date("5/1/25"), None);
    assert_eq!(parse_date("05/11/2025"), None);
    assert_eq!(parse_date(""), None);
}

#[test]
fn merge_into_empty_set() {
    assert_eq!(merge("", "05/11/25"), "05/11/25");
}

#[test]
fn merge_appends_in_order() {
    assert_eq!(merge("01/01/25", "02/01/25"), "01/01/25, 02/01/25");
    assert_eq!(merge("02/01/25", "01/01/25"), "01/01/25, 02/01/25");
}

#[test]
fn merge_is_idempotent() {
    let once = merge("01/01/25, 03/01/25", "02/01/25");
    let twice = merge(&once, "02/01/25");
    assert_eq!(once, twice);
    assert_eq!(twice, "01/01/25, 02/01/25, 03/01/25");
}

#[test]
fn merge_order_does_not_matter() {
    let inputs = ["15/03/25", "01/01/25", "28/02/24", "01/01/25", "31/12/25"];
    let expected = "28/02/24, 01/01/25, 15/03/25, 31/12/25";

    let forward = inputs.iter().fold(String::new(), |acc, d| merge(&acc, d));
    let backward = inputs.iter().rev().fold(String::new(), |acc, d| merge(&acc, d));
    let rotated = inputs
        .iter()
        .cycle()
        .skip(2)
        .take(inputs.len())
        .fold(String::new(), |acc, d| merge(&acc, d));

    assert_eq!(forward, expected);
    assert_eq!(backward, expected);
    assert_eq!(rotated, expected);
}

#[test]
fn merge_drops_garbage_segments() {
    assert_eq!(
        merge("soon, 01/01/25, ,tomorrow", "02/01/25"),
        "01/01/25, 02/01/25"
    );
}

#[test]
fn merge_sorts_across_years() {
    assert_eq!(merge("01/01/26", "31/12/25"), "31/12/25, 01/01/26");
}

#[test]
fn parse_date_set_sorts_and_dedups() {
    assert_eq!(
        parse_date_set("03/01/25, 01/01/25,01/01/25"),
        vec![ymd(2025, 1, 1), ymd(2025, 1, 3)]
    );
    assert!(parse_date_set("").is_empty());
}
