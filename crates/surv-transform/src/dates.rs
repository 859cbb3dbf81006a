//! Lenient date handling for string-valued record fields.

use chrono::NaiveDate;

/// Returns the calendar-date part of a date or datetime string: everything
/// before the first `T` or space, trimmed.
pub fn date_key(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .split(['T', ' '])
        .next()
        .unwrap_or(trimmed)
}

/// Parses `YYYY-MM-DD` or a datetime starting with it.
///
/// Empty, partial and invalid values return `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let key = date_key(raw);
    if key.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Parses an optional field, treating absence as unparseable.
pub fn parse_optional_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_date)
}

/// Inclusive bound check. A missing date fails once any bound is active.
pub fn within_range(
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let Some(date) = date else {
        return false;
    };
    from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn strips_time_component() {
        assert_eq!(date_key("2025-01-03T10:00:00Z"), "2025-01-03");
        assert_eq!(date_key("2025-01-03 10:00"), "2025-01-03");
        assert_eq!(parse_date("2025-01-03T10:00:00Z"), Some(ymd(2025, 1, 3)));
    }

    #[test]
    fn rejects_partial_and_invalid() {
        assert!(parse_date("").is_none());
        assert!(parse_date("2025-01").is_none());
        assert!(parse_date("2025-13-01").is_none());
        assert!(parse_date("03/01/2025").is_none());
        assert!(parse_optional_date(None).is_none());
    }

    #[test]
    fn range_is_inclusive_and_excludes_missing() {
        let from = Some(ymd(2025, 1, 1));
        let to = Some(ymd(2025, 1, 31));
        assert!(within_range(Some(ymd(2025, 1, 1)), from, to));
        assert!(within_range(Some(ymd(2025, 1, 31)), from, to));
        assert!(!within_range(Some(ymd(2025, 2, 1)), from, to));
        assert!(!within_range(None, from, None));
        assert!(within_range(None, None, None));
    }
}
