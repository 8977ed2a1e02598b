//! Coercion of date-like client input into UTC timestamps.
//!
//! Clients send dates as ISO-8601 strings (with or without a time part) or as
//! epoch milliseconds. [`DateLike`] accepts all of them at deserialization time
//! and keeps unparseable input around so the validation layer can reject it
//! with the name of the offending field.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// ## Summary
/// Parses a date-like string into a UTC timestamp.
///
/// Accepted shapes, tried in order: RFC 3339, naive date-time (interpreted as
/// UTC), and a bare `YYYY-MM-DD` date (midnight UTC).
///
/// ## Errors
/// Returns `ValidationError` if none of the accepted shapes match.
pub fn parse_date_like(input: &str) -> CoreResult<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(CoreError::ValidationError(format!(
        "'{trimmed}' is not a valid date"
    )))
}

/// ## Summary
/// Parses the inclusive upper end of a date range.
///
/// A bare `YYYY-MM-DD` date covers the whole day, so it resolves to the last
/// microsecond of that day. Anything else parses as [`parse_date_like`].
///
/// ## Errors
/// Returns `ValidationError` if the input is not date-like.
pub fn parse_range_end(input: &str) -> CoreResult<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_micro_opt(23, 59, 59, 999_999)
            .map(|end| end.and_utc())
            .ok_or_else(|| {
                CoreError::ValidationError(format!("'{trimmed}' is not a valid date"))
            });
    }

    parse_date_like(trimmed)
}

/// ## Summary
/// Converts epoch milliseconds into a UTC timestamp.
///
/// ## Errors
/// Returns `ValidationError` if the value is outside chrono's representable range.
pub fn from_epoch_millis(millis: i64) -> CoreResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        CoreError::ValidationError(format!("{millis} is out of range for a timestamp"))
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDateInput {
    Millis(i64),
    Text(String),
}

/// A date-like input value, already coerced when possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    Valid(DateTime<Utc>),
    Invalid(String),
}

impl DateLike {
    /// ## Summary
    /// Returns the coerced timestamp.
    ///
    /// ## Errors
    /// Returns `ValidationError` carrying the original input if it did not parse.
    pub fn into_utc(self) -> CoreResult<DateTime<Utc>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(raw) => Err(CoreError::ValidationError(format!(
                "'{raw}' is not a valid date"
            ))),
        }
    }
}

impl From<DateTime<Utc>> for DateLike {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Valid(value)
    }
}

impl<'de> Deserialize<'de> for DateLike {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let coerced = match RawDateInput::deserialize(deserializer)? {
            RawDateInput::Millis(millis) => {
                from_epoch_millis(millis).map_err(|_err| millis.to_string())
            }
            RawDateInput::Text(text) => parse_date_like(&text).map_err(|_err| text),
        };

        Ok(match coerced {
            Ok(value) => Self::Valid(value),
            Err(raw) => Self::Invalid(raw),
        })
    }
}

impl Serialize for DateLike {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Valid(value) => value.serialize(serializer),
            Self::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}
