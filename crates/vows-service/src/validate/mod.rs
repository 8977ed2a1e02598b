//! Input schemas for every entity.
//!
//! Each entity has a create schema (required fields mandatory) and a patch
//! schema (every field optional; nullable columns accept an explicit `null`
//! to clear). Server-managed fields are not part of any schema, so serde
//! drops them silently. Content rules are declared with `validator`; date
//! coercion failures are reported by the `into_*` conversions.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use validator::Validate;

use vows_core::date::DateLike;

use crate::error::{ServiceError, ServiceResult};

pub mod account;
pub mod content;
pub mod guest;
pub mod singleton;

/// ## Summary
/// Parses a JSON body into `T` and runs its content rules.
///
/// ## Errors
/// Returns `ValidationError` naming the offending field if the body is not
/// valid JSON for `T` or breaks one of its rules.
pub fn parse_body<T>(body: &[u8]) -> ServiceResult<T>
where
    T: DeserializeOwned + Validate,
{
    let input: T = serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "Rejected request body");
        ServiceError::ValidationError(describe_json_error(&err))
    })?;
    input.validate()?;
    Ok(input)
}

/// Renders `validator` output as `field: message` pairs, sorted by field.
#[must_use]
pub fn describe(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let reasons: Vec<String> = field_errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| default_message(error), ToString::to_string)
                })
                .collect();
            format!("{}: {}", camel_case(&field), reasons.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Words a rule that carries no message of its own from its bounds.
fn default_message(error: &validator::ValidationError) -> String {
    let min = bound(error, "min");
    let max = bound(error, "max");
    match (&*error.code, min, max) {
        ("length", Some(min), Some(max)) => format!("must be {min} to {max} characters"),
        ("length", Some(min), None) => format!("must be at least {min} characters"),
        ("length", None, Some(max)) => format!("must be at most {max} characters"),
        ("range", Some(min), Some(max)) => format!("must be between {min} and {max}"),
        ("range", Some(min), None) => format!("must be at least {min}"),
        ("range", None, Some(max)) => format!("must be at most {max}"),
        (code, _, _) => code.to_string(),
    }
}

fn bound(error: &validator::ValidationError, name: &str) -> Option<String> {
    match error.params.get(name)? {
        serde_json::Value::Number(number) => Some(match number.as_f64() {
            Some(float) if number.is_f64() && float.fract().abs() < f64::EPSILON => {
                format!("{float:.0}")
            }
            _ => number.to_string(),
        }),
        other => Some(other.to_string()),
    }
}

fn describe_json_error(err: &serde_json::Error) -> String {
    // serde already names the field for missing/unknown fields and type mismatches
    match err.classify() {
        serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
            "request body is not valid JSON".to_string()
        }
        _ => err.to_string(),
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// ## Summary
/// Coerces a required date field.
///
/// ## Errors
/// Returns `ValidationError` naming `field` if the value did not parse.
pub fn required_date(field: &str, value: DateLike) -> ServiceResult<DateTime<Utc>> {
    value
        .into_utc()
        .map_err(|err| ServiceError::ValidationError(format!("{field}: {err}")))
}

/// ## Summary
/// Coerces an optional date field.
///
/// ## Errors
/// Returns `ValidationError` naming `field` if the value is present but did not parse.
pub fn optional_date(field: &str, value: Option<DateLike>) -> ServiceResult<Option<DateTime<Utc>>> {
    value.map(|inner| required_date(field, inner)).transpose()
}

/// ## Summary
/// Coerces a patch date field (absent, `null`, or a value).
///
/// ## Errors
/// Returns `ValidationError` naming `field` if the value is present but did not parse.
pub fn patch_date(
    field: &str,
    value: Option<Option<DateLike>>,
) -> ServiceResult<Option<Option<DateTime<Utc>>>> {
    value.map(|inner| optional_date(field, inner)).transpose()
}

/// ## Summary
/// Builds a `ValidationError` for a field that a first insert requires.
#[must_use]
pub fn missing(field: &str) -> ServiceError {
    ServiceError::ValidationError(format!("{field}: is required"))
}
