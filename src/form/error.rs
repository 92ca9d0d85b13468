use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid date/time '{input}': {reason}")]
    InvalidDatetime { input: String, reason: String },

    #[error("Date/time '{0}' does not exist in the local time zone")]
    NonexistentLocalTime(String),

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    #[error("Invalid form configuration: {0}")]
    InvalidConfig(String),
}

impl From<FormError> for String {
    fn from(err: FormError) -> Self {
        err.to_string()
    }
}
