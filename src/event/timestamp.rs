//! Timestamp display formatting
//!
//! The feed's `created_at` values are RFC 3339 instants. They are rendered
//! in a fixed UTC format; a value that does not parse is shown verbatim so
//! a single odd record never breaks the whole listing.

use chrono::{DateTime, Utc};

/// Format an RFC 3339 instant as `YYYY-MM-DD HH:MM UTC`.
///
/// Input offsets are converted to UTC. Returns the input unchanged when it
/// is not a valid instant.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zulu_instant() {
        assert_eq!(
            format_timestamp("2024-01-02T03:04:05Z"),
            "2024-01-02 03:04 UTC"
        );
    }

    #[test]
    fn test_offset_converted_to_utc() {
        assert_eq!(
            format_timestamp("2024-01-02T03:04:05+02:00"),
            "2024-01-02 01:04 UTC"
        );
    }

    #[test]
    fn test_negative_offset_crosses_midnight() {
        assert_eq!(
            format_timestamp("2024-06-30T23:30:00-05:00"),
            "2024-07-01 04:30 UTC"
        );
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_empty_input_passes_through() {
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_date_only_is_not_an_instant() {
        // RFC 3339 requires a time component; show the raw value instead.
        assert_eq!(format_timestamp("2024-01-02"), "2024-01-02");
    }
}
