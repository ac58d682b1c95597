use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Parse a calendar date as stored in the governance data.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; the latter are
/// taken as midnight UTC.
pub fn parse_calendar_date(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

pub(crate) fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).map_err(|e| {
        serde::de::Error::custom(format!("invalid date {:?}: {}", raw, e))
    })
}

/// Whole days from `from` to `to`, rounded up. Negative when `to` is earlier.
pub fn days_between_ceil(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let millis = (to - from).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_plain_date_is_midnight_utc() {
        let dt = parse_calendar_date("2025-03-01").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 3, 1));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_rfc3339_with_millis() {
        let dt = parse_calendar_date("2025-03-31T23:59:59.000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_calendar_date("next tuesday").is_err());
        assert!(parse_calendar_date("2025-13-01").is_err());
    }

    #[test]
    fn test_days_between_rounds_up_partial_days() {
        let from = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap();
        // 1.5 days
        assert_eq!(days_between_ceil(from, to), 2);
    }

    #[test]
    fn test_days_between_exact_and_negative() {
        let a = parse_calendar_date("2024-12-01").unwrap();
        let b = parse_calendar_date("2024-12-31").unwrap();
        assert_eq!(days_between_ceil(a, b), 30);
        assert_eq!(days_between_ceil(b, a), -30);
    }
}
