//! Date codec for `Date` filters and persisted clauses.
//!
//! Dates are held as local wall-clock time. The API form has seconds
//! precision and no zone designator.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Format sent to the backend, e.g. `2024-03-01T08:15:00`.
pub const API_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601-shaped date/time. Returns `None` for anything else.
///
/// Zoned inputs (`Z` or an offset) are converted to local time; naive inputs
/// are taken as local already; a bare date means midnight.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(API_DATETIME_FORMAT).to_string()
}

/// Serde adapter reviving ISO-8601 strings into dates.
pub mod serde_iso {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_datetime(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_datetime(&raw)
            .ok_or_else(|| de::Error::custom(format!("not an ISO-8601 date: '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn naive(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, API_DATETIME_FORMAT).unwrap()
    }

    #[test]
    fn parses_naive_forms() {
        let expected = naive("2024-03-01T08:15:00");
        assert_eq!(parse_datetime("2024-03-01T08:15:00"), Some(expected));
        assert_eq!(parse_datetime("2024-03-01T08:15"), Some(expected));
        assert_eq!(parse_datetime("2024-03-01 08:15:00"), Some(expected));
        assert_eq!(parse_datetime(" 2024-03-01T08:15:00 "), Some(expected));
    }

    #[test]
    fn fractional_seconds_are_accepted_and_dropped_on_format() {
        let dt = parse_datetime("2024-03-01T08:15:00.250").unwrap();
        assert_eq!(format_datetime(&dt), "2024-03-01T08:15:00");
    }

    #[test]
    fn bare_date_is_midnight() {
        assert_eq!(parse_datetime("2024-03-01"), Some(naive("2024-03-01T00:00:00")));
    }

    #[test]
    fn zoned_input_converts_to_local() {
        let parsed = parse_datetime("2024-03-01T08:15:00Z").unwrap();
        let expected = Utc
            .with_ymd_and_hms(2024, 3, 1, 8, 15, 0)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_datetime("not a date"), None);
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("2024-13-45"), None);
    }

    #[test]
    fn format_has_no_zone_letter() {
        let formatted = format_datetime(&naive("2023-12-31T23:59:59"));
        assert_eq!(formatted, "2023-12-31T23:59:59");
        assert!(!formatted.ends_with('Z'));
    }
}
