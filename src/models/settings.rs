use serde::{Deserialize, Serialize};

use crate::form::datetime::{self, DISPLAY_DATETIME_FORMAT};
use crate::form::error::FormError;

/// Reference moment used to check that a date/time format round-trips
const VALIDATION_SAMPLE_TIMESTAMP: i64 = 1_600_000_020;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// chrono strftime pattern used for the date/time field
    pub datetime_format: String,
    /// Refuse to submit when the date/time field does not parse
    pub reject_invalid_datetime: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            datetime_format: DISPLAY_DATETIME_FORMAT.to_string(),
            reject_invalid_datetime: false,
        }
    }
}

impl FormConfig {
    /// Parse and validate a JSON configuration block
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let config: FormConfig = serde_json::from_str(json)
            .map_err(|e| FormError::InvalidConfig(format!("Malformed form config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.datetime_format.trim().is_empty() {
            return Err(FormError::InvalidConfig(
                "datetime_format must not be empty".to_string(),
            ));
        }
        if !datetime::is_valid_format(&self.datetime_format) {
            return Err(FormError::InvalidConfig(format!(
                "datetime_format '{}' is not a valid strftime pattern",
                self.datetime_format
            )));
        }

        // The format has to carry enough fields to be parsed back
        let sample = datetime::timestamp_to_display(VALIDATION_SAMPLE_TIMESTAMP, &self.datetime_format)?;
        let parsed = datetime::display_to_timestamp(&sample, &self.datetime_format).map_err(|e| {
            FormError::InvalidConfig(format!(
                "datetime_format '{}' cannot be parsed back: {}",
                self.datetime_format, e
            ))
        })?;

        if !reproduces_sample(parsed) {
            return Err(FormError::InvalidConfig(format!(
                "datetime_format '{}' does not round-trip: {} came back as {}",
                self.datetime_format, VALIDATION_SAMPLE_TIMESTAMP, parsed
            )));
        }

        Ok(())
    }
}

/// Formats with seconds give the sample back exactly, minute formats truncate it
fn reproduces_sample(parsed: i64) -> bool {
    parsed == VALIDATION_SAMPLE_TIMESTAMP
        || parsed == VALIDATION_SAMPLE_TIMESTAMP - VALIDATION_SAMPLE_TIMESTAMP.rem_euclid(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FormConfig::default();
        assert_eq!(config.datetime_format, "%d/%m/%Y %H:%M");
        assert!(!config.reject_invalid_datetime);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = FormConfig::from_json(r#"{"reject_invalid_datetime": true}"#).unwrap();
        assert_eq!(config.datetime_format, DISPLAY_DATETIME_FORMAT);
        assert!(config.reject_invalid_datetime);

        let config = FormConfig::from_json(r#"{"datetime_format": "%Y-%m-%d %H:%M"}"#).unwrap();
        assert_eq!(config.datetime_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_rejects_unusable_formats() {
        assert!(FormConfig::from_json(r#"{"datetime_format": ""}"#).is_err());
        assert!(FormConfig::from_json(r#"{"datetime_format": "%Q %H"}"#).is_err());
        // No year, cannot be turned back into a timestamp
        assert!(FormConfig::from_json(r#"{"datetime_format": "%d/%m %H:%M"}"#).is_err());
        assert!(FormConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_sample_must_come_back_unchanged() {
        let minute = VALIDATION_SAMPLE_TIMESTAMP - VALIDATION_SAMPLE_TIMESTAMP.rem_euclid(60);
        assert!(reproduces_sample(VALIDATION_SAMPLE_TIMESTAMP));
        assert!(reproduces_sample(minute));
        assert!(!reproduces_sample(minute - 60));
        assert!(!reproduces_sample(VALIDATION_SAMPLE_TIMESTAMP + 3600));

        let with_seconds = FormConfig {
            datetime_format: "%d/%m/%Y %H:%M:%S".to_string(),
            ..FormConfig::default()
        };
        assert!(with_seconds.validate().is_ok());
    }
}
