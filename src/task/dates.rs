use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a due date in `YYYY-MM-DD` form.
///
/// Empty or malformed input yields `None` rather than an error: a bad date
/// is treated the same as no date at all.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Signed number of days from `today` until the due date.
/// Negative when the date has already passed.
pub fn days_left(due_date: Option<&str>, today: NaiveDate) -> Option<i64> {
    let due = parse_date(due_date?)?;
    Some((due - today).num_days())
}

/// Current calendar date in the local timezone
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_date("2025-03-14"), Some(day(2025, 3, 14)));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(parse_date("tomorrow"), None);
        assert_eq!(parse_date("14/03/2025"), None);
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("2025-03-14T10:00:00"), None);
    }

    #[test]
    fn test_days_left_future() {
        assert_eq!(days_left(Some("2025-03-24"), day(2025, 3, 14)), Some(10));
    }

    #[test]
    fn test_days_left_past() {
        assert_eq!(days_left(Some("2025-03-12"), day(2025, 3, 14)), Some(-2));
    }

    #[test]
    fn test_days_left_today() {
        assert_eq!(days_left(Some("2025-03-14"), day(2025, 3, 14)), Some(0));
    }

    #[test]
    fn test_days_left_across_month_boundary() {
        assert_eq!(days_left(Some("2025-03-01"), day(2025, 2, 27)), Some(2));
    }

    #[test]
    fn test_days_left_missing_or_bad() {
        assert_eq!(days_left(None, day(2025, 3, 14)), None);
        assert_eq!(days_left(Some("soon"), day(2025, 3, 14)), None);
    }
}
