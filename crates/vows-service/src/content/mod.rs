//! Content operations: validated input in, rows out.
//!
//! These functions sit between the route handlers and the query modules.
//! They turn "absent" results of targeted writes into `NotFound` and unique
//! violations into `Conflict`.

pub mod collection;
pub mod guest;
pub mod singleton;

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Turns the result of a targeted write into the row or `NotFound`.
///
/// ## Errors
/// Returns `NotFound` naming `what` and `id` if `row` is `None`.
pub fn found<T>(row: Option<T>, what: &str, id: uuid::Uuid) -> ServiceResult<T> {
    row.ok_or_else(|| ServiceError::NotFound(format!("{what} {id}")))
}
