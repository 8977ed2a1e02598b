mod auth;
mod content;
mod dashboard;
pub mod extract;
mod guest;
mod healthcheck;

use salvo::Router;

use crate::middleware::auth::AuthMiddleware;

pub use vows_core::constants::{API_ROUTE_COMPONENT, API_ROUTE_PREFIX, AUTH_ROUTE_PREFIX};

/// ## Summary
/// Constructs the `/api` router with every JSON resource.
///
/// Public and admin routes share one tree. Admin handlers check the caller
/// themselves through [`extract::require_admin`].
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .push(healthcheck::routes())
        .push(auth::routes())
        .push(content::routes())
        .push(guest::routes())
        .push(dashboard::routes())
}

pub(crate) fn success() -> salvo::writing::Json<serde_json::Value> {
    salvo::writing::Json(serde_json::json!({ "success": true }))
}
