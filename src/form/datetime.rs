//! Conversion between the form's display date/time and POSIX timestamps.
//!
//! Display strings are interpreted in the host's local time zone.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::fmt::Write;

use super::error::FormError;

/// Day/month/year hour:minute
pub const DISPLAY_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Check that chrono understands every specifier in `format`
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

pub fn timestamp_to_display(timestamp: i64, format: &str) -> Result<String, FormError> {
    let utc = DateTime::from_timestamp(timestamp, 0)
        .ok_or(FormError::TimestampOutOfRange(timestamp))?;
    render(&utc.with_timezone(&Local), format)
}

// `to_string()` on a chrono format with bad specifiers panics, `write!` reports it
fn render(moment: &DateTime<Local>, format: &str) -> Result<String, FormError> {
    let mut out = String::new();
    write!(out, "{}", moment.format(format)).map_err(|_| {
        FormError::InvalidConfig(format!("cannot format date/time with '{}'", format))
    })?;
    Ok(out)
}

pub fn display_to_timestamp(input: &str, format: &str) -> Result<i64, FormError> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), format).map_err(|e| {
        FormError::InvalidDatetime {
            input: input.to_string(),
            reason: e.to_string(),
        }
    })?;

    // Ambiguous wall-clock times (DST fold) resolve to the earlier instant
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| FormError::NonexistentLocalTime(input.to_string()))
}

pub fn now_display(format: &str) -> String {
    render(&Local::now(), format).unwrap_or_else(|e| {
        log::warn!("{}", e);
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_to_the_minute() {
        for ts in [0_i64, 1_293_855_202, 1_536_494_400, 1_600_000_000, 1_700_000_059] {
            let display = timestamp_to_display(ts, DISPLAY_DATETIME_FORMAT).unwrap();
            let parsed = display_to_timestamp(&display, DISPLAY_DATETIME_FORMAT).unwrap();
            assert_eq!(parsed, ts - ts.rem_euclid(60), "round trip of {}", ts);
        }
    }

    #[test]
    fn test_display_matches_local_time() {
        let expected = Local
            .timestamp_opt(1_600_000_000, 0)
            .unwrap()
            .format("%d/%m/%Y %H:%M")
            .to_string();
        assert_eq!(
            timestamp_to_display(1_600_000_000, DISPLAY_DATETIME_FORMAT).unwrap(),
            expected
        );
    }

    #[test]
    fn test_alternate_format() {
        let format = "%Y-%m-%dT%H:%M";
        let display = timestamp_to_display(1_536_494_400, format).unwrap();
        assert_eq!(display.len(), 16);
        assert_eq!(display_to_timestamp(&display, format).unwrap(), 1_536_494_400);
    }

    #[test]
    fn test_malformed_input() {
        let err = display_to_timestamp("31/02/2020 10:00", DISPLAY_DATETIME_FORMAT).unwrap_err();
        assert!(matches!(err, FormError::InvalidDatetime { .. }));

        assert!(display_to_timestamp("", DISPLAY_DATETIME_FORMAT).is_err());
        assert!(display_to_timestamp("yesterday", DISPLAY_DATETIME_FORMAT).is_err());
        // Month-first input is rejected rather than silently swapped
        assert!(display_to_timestamp("12/25/2020 10:00", DISPLAY_DATETIME_FORMAT).is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let display = timestamp_to_display(1_600_000_000, DISPLAY_DATETIME_FORMAT).unwrap();
        let padded = format!("  {} ", display);
        assert_eq!(
            display_to_timestamp(&padded, DISPLAY_DATETIME_FORMAT).unwrap(),
            display_to_timestamp(&display, DISPLAY_DATETIME_FORMAT).unwrap()
        );
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert_eq!(
            timestamp_to_display(i64::MAX, DISPLAY_DATETIME_FORMAT),
            Err(FormError::TimestampOutOfRange(i64::MAX))
        );
    }

    #[test]
    fn test_format_validation() {
        assert!(is_valid_format(DISPLAY_DATETIME_FORMAT));
        assert!(!is_valid_format("%Q"));
    }

    #[test]
    fn test_bad_format_does_not_panic() {
        assert!(matches!(
            timestamp_to_display(1_600_000_000, "%Q"),
            Err(FormError::InvalidConfig(_))
        ));
        assert_eq!(now_display("%Q"), "");
    }

    #[test]
    fn test_now_display_parses_back() {
        let before = Local::now().timestamp();
        let parsed = display_to_timestamp(&now_display(DISPLAY_DATETIME_FORMAT), DISPLAY_DATETIME_FORMAT).unwrap();
        assert!((before - parsed).abs() <= 120);
    }
}
