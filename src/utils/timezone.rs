use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Error types for timezone operations
#[derive(Debug, thiserror::Error)]
pub enum TimezoneError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Parse an IANA timezone string
pub fn parse_timezone(tz_str: &str) -> Result<Tz, TimezoneError> {
    tz_str
        .trim()
        .parse()
        .map_err(|_| TimezoneError::InvalidTimezone(tz_str.to_string()))
}

/// Calendar date of an instant as seen in a timezone
pub fn date_in_timezone(instant: DateTime<Utc>, timezone: &Tz) -> NaiveDate {
    instant.with_timezone(timezone).date_naive()
}

/// Today's calendar date in a timezone
pub fn today_in(timezone: &Tz) -> NaiveDate {
    date_in_timezone(Utc::now(), timezone)
}
