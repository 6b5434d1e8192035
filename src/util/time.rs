//! ISO-8601 text timestamps.
//!
//! Event and participant timestamps are persisted as text with millisecond precision and a
//! `Z` suffix, e.g. `2026-10-18T12:00:00.000Z`. The fixed width keeps them sortable as
//! plain strings.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{internal::InternalError, AppError};

/// Formats a timestamp into the stored ISO-8601 form.
pub fn format_iso(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a stored ISO-8601 timestamp.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed timestamp
/// - `Err(AppError::InternalErr(ParseTimestamp))` - The stored text is not RFC 3339
pub fn parse_iso(value: &str) -> Result<DateTime<Utc>, AppError> {
    let parsed = DateTime::parse_from_rfc3339(value).map_err(|e| InternalError::ParseTimestamp {
        value: value.to_string(),
        source: e,
    })?;

    Ok(parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn formats_with_millis_and_zulu_suffix() {
        let timestamp = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();

        assert_eq!(format_iso(timestamp), "2026-10-18T12:00:00.000Z");
    }

    #[test]
    fn parse_reverses_format() {
        let timestamp = Utc.with_ymd_and_hms(2026, 10, 18, 12, 34, 56).unwrap()
            + Duration::milliseconds(789);

        assert_eq!(parse_iso(&format_iso(timestamp)).unwrap(), timestamp);
    }

    #[test]
    fn stored_text_sorts_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2026, 9, 30, 23, 59, 59).unwrap();
        let later = earlier + Duration::seconds(1);

        assert!(format_iso(earlier) < format_iso(later));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_iso("yesterday").is_err());
    }
}
