//! Signing timestamps.
//!
//! A [`SigningTime`] holds the `x-amz-date` timestamp and the credential-scope
//! datestamp. Both come from a single clock read so they can never disagree.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::AuthError;

/// Format of the `x-amz-date` / `X-Amz-Date` value.
const AMZ_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// The timestamp pair covered by one signature.
///
/// # Examples
///
/// ```
/// use s3sign_auth::time::SigningTime;
///
/// let time = SigningTime::parse("20240101T000000Z").unwrap();
/// assert_eq!(time.timestamp(), "20240101T000000Z");
/// assert_eq!(time.datestamp(), "20240101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningTime {
    instant: DateTime<Utc>,
    timestamp: String,
}

impl SigningTime {
    /// Read the wall clock once.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Build a signing time from an explicit instant. Sub-second precision is dropped.
    #[must_use]
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        let timestamp = instant.format(AMZ_DATE_FORMAT).to_string();
        Self { instant, timestamp }
    }

    /// Parse a compact ISO 8601 timestamp such as `20130524T000000Z`.
    pub fn parse(timestamp: &str) -> Result<Self, AuthError> {
        let naive = NaiveDateTime::parse_from_str(timestamp, AMZ_DATE_FORMAT)
            .map_err(|_| AuthError::InvalidTimestamp(timestamp.to_owned()))?;
        Ok(Self::from_datetime(naive.and_utc()))
    }

    /// The `YYYYMMDDTHHMMSSZ` timestamp.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The `YYYYMMDD` prefix of the timestamp.
    #[must_use]
    pub fn datestamp(&self) -> &str {
        &self.timestamp[..8]
    }

    /// The instant this timestamp was taken from.
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl fmt::Display for SigningTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_should_format_compact_timestamp() {
        let instant = Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap();
        let time = SigningTime::from_datetime(instant);
        assert_eq!(time.timestamp(), "20130524T000000Z");
        assert_eq!(time.datestamp(), "20130524");
    }

    #[test]
    fn test_should_drop_sub_second_precision() {
        let instant = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(987))
            .unwrap();
        let time = SigningTime::from_datetime(instant);
        assert_eq!(time.timestamp(), "20241231T235959Z");
    }

    #[test]
    fn test_should_derive_datestamp_from_timestamp() {
        let time = SigningTime::now();
        assert_eq!(time.timestamp().len(), 16);
        assert!(time.timestamp().starts_with(time.datestamp()));
    }

    #[test]
    fn test_should_reject_malformed_timestamp() {
        assert!(matches!(
            SigningTime::parse("2024-01-01T00:00:00Z"),
            Err(AuthError::InvalidTimestamp(_))
        ));
        assert!(SigningTime::parse("").is_err());
    }
}
