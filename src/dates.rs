//! Meeting dates
//!
//! Dates are stored as `dd/mm/yy`. A contact may carry several of them as a
//! comma-separated, ascending, duplicate-free set such as
//! `01/01/25, 14/02/25`.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// chrono format string for the canonical date rendering
pub const DATE_FORMAT: &str = "%d/%m/%y";

/// Separator used when rendering a date set
pub const DATE_SET_SEPARATOR: &str = ", ";

/// Parse a date in the exact canonical shape `dd/mm/yy`.
///
/// Unpadded forms such as `5/1/25` are rejected here even though chrono
/// would accept them.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != 8 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'/',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

/// Render a date in the canonical shape
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_lenient(segment: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(segment.trim(), DATE_FORMAT).ok()
}

/// Parse every segment of a stored date set.
///
/// Segments that do not parse are dropped. The result is ascending and
/// holds each calendar date once.
pub fn parse_date_set(existing: &str) -> Vec<NaiveDate> {
    existing
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(parse_lenient)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Render a date set in canonical form
pub fn format_date_set<'a>(dates: impl IntoIterator<Item = &'a NaiveDate>) -> String {
    dates
        .into_iter()
        .map(|date| format_date(*date))
        .collect::<Vec<_>>()
        .join(DATE_SET_SEPARATOR)
}

/// Merge one new date into a stored date set.
///
/// The result is the sorted, deduplicated union rendered canonically.
/// If `new_date` itself does not parse, `existing` is returned untouched.
pub fn merge(existing: &str, new_date: &str) -> String {
    let Some(new_date) = parse_lenient(new_date) else {
        return existing.to_string();
    };

    let mut set: BTreeSet<NaiveDate> = parse_date_set(existing).into_iter().collect();
    set.insert(new_date);
    format_date_set(&set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_requires_padded_shape() {
        assert!(parse_date("05/11/25").is_some());
        assert!(parse_date("5/11/25").is_none());
        assert!(parse_date("05/1/25").is_none());
        assert!(parse_date("05-11-25").is_none());
    }

    #[test]
    fn merge_ignores_unparseable_new_date() {
        assert_eq!(merge("01/01/25", "not a date"), "01/01/25");
        assert_eq!(merge("", "junk"), "");
    }

    #[test]
    fn merge_normalizes_legacy_segments() {
        assert_eq!(merge("5/1/25", "01/01/25"), "01/01/25, 05/01/25");
    }
}
