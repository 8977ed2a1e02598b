//! Request extraction shared by the JSON handlers.

use chrono::{DateTime, Utc};
use salvo::{Depot, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use vows_core::error::CoreResult;
use vows_db::model::user::AdminUser;
use vows_service::auth::get_user_from_depot;
use vows_service::validate::parse_body;

use crate::error::{AppError, AppResult};

/// ## Summary
/// Returns the signed-in admin.
///
/// ## Errors
/// Returns `Unauthorized` for public requests.
pub fn require_admin(depot: &Depot) -> AppResult<&AdminUser> {
    get_user_from_depot(depot).map_err(|_err| AppError::Unauthorized("Authentication required"))
}

/// ## Summary
/// Parses the `{id}` path segment.
///
/// ## Errors
/// Returns `BadRequest` if the segment is missing or not a UUID.
pub fn path_id(req: &Request) -> AppResult<uuid::Uuid> {
    let raw = req.param::<String>("id").unwrap_or_default();
    uuid::Uuid::parse_str(&raw)
        .map_err(|_err| AppError::BadRequest(format!("id: '{raw}' is not a valid id")))
}

/// ## Summary
/// Reads an optional boolean query parameter (`true` / `false`).
///
/// ## Errors
/// Returns `BadRequest` for any other value.
pub fn query_flag(req: &Request, name: &str) -> AppResult<Option<bool>> {
    match req.query::<String>(name).as_deref() {
        None | Some("") => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(AppError::BadRequest(format!(
            "{name}: '{other}' is not a boolean"
        ))),
    }
}

/// ## Summary
/// Reads an optional date-like query parameter used as a lower bound.
///
/// ## Errors
/// Returns `BadRequest` naming the parameter if the value is not a date.
pub fn query_date(req: &Request, name: &str) -> AppResult<Option<DateTime<Utc>>> {
    query_date_with(req, name, vows_core::date::parse_date_like)
}

/// ## Summary
/// Reads an optional date-like query parameter used as an inclusive upper
/// bound. A bare date includes the whole of that day.
///
/// ## Errors
/// Returns `BadRequest` naming the parameter if the value is not a date.
pub fn query_date_end(req: &Request, name: &str) -> AppResult<Option<DateTime<Utc>>> {
    query_date_with(req, name, vows_core::date::parse_range_end)
}

fn query_date_with(
    req: &Request,
    name: &str,
    parse: fn(&str) -> CoreResult<DateTime<Utc>>,
) -> AppResult<Option<DateTime<Utc>>> {
    match req.query::<String>(name) {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => parse(&raw)
            .map(Some)
            .map_err(|err| AppError::BadRequest(format!("{name}: {err}"))),
    }
}

/// ## Summary
/// Reads the request body and validates it as `T`.
///
/// ## Errors
/// Returns `BadRequest` if the body cannot be read, or `ValidationError` if it
/// does not satisfy `T`.
pub async fn body<T>(req: &mut Request) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let bytes = req.payload().await.map_err(|err| {
        tracing::debug!(error = %err, "Failed to read request body");
        AppError::BadRequest("request body could not be read".to_string())
    })?;
    Ok(parse_body(bytes)?)
}
