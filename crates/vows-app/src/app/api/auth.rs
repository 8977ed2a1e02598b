//! Admin login, logout, and account maintenance.

use salvo::http::cookie::{Cookie, SameSite, time::Duration};
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use vows_core::config::AuthConfig;
use vows_core::constants::AUTH_ROUTE_COMPONENT;
use vows_db::model::user::AdminUser;
use vows_service::auth::{account, get_session_id_from_depot, session};
use vows_service::validate::account::{ChangePasswordInput, LoginInput, ProfileInput};

use crate::app::api::extract::{body, require_admin};
use crate::app::api::success;
use crate::config::get_config_from_depot;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

fn session_cookie(auth: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((auth.cookie_name.clone(), token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(auth.cookie_secure)
        .path("/")
        .max_age(Duration::hours(i64::from(auth.session_ttl_hours)))
        .build()
}

fn cleared_cookie(auth: &AuthConfig) -> Cookie<'static> {
    Cookie::build((auth.cookie_name.clone(), String::new()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(auth.cookie_secure)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

/// ## Summary
/// POST /api/auth/login - Checks credentials and sets the session cookie.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body and HTTP 401 for bad credentials.
#[handler]
async fn login(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<Json<AdminUser>> {
    let input: LoginInput = body(req).await?;
    let config = get_config_from_depot(depot)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let outcome = account::login(&mut conn, &input, &config.auth).await?;
    res.add_cookie(session_cookie(&config.auth, outcome.token));
    Ok(Json(outcome.user))
}

/// ## Summary
/// POST /api/auth/logout - Revokes the caller's session, if any, and clears the cookie.
#[handler]
async fn logout(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<serde_json::Value>> {
    let config = get_config_from_depot(depot)?;

    if let Some(token) = req
        .cookie(&config.auth.cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
    {
        let provider = get_db_from_depot(depot)?;
        let mut conn = provider.get_connection().await?;
        session::revoke_session(&mut conn, &token).await?;
    }

    res.add_cookie(cleared_cookie(&config.auth));
    Ok(success())
}

#[handler]
async fn me(depot: &mut Depot) -> AppResult<Json<AdminUser>> {
    Ok(Json(require_admin(depot)?.clone()))
}

/// ## Summary
/// POST /api/auth/change-password - Replaces the password and signs out other sessions.
///
/// ## Errors
/// Returns HTTP 401 if the current password is wrong, HTTP 400 if the new one is too short.
#[handler]
async fn change_password(req: &mut Request, depot: &mut Depot) -> AppResult<Json<serde_json::Value>> {
    let user = require_admin(depot)?;
    let current_session = get_session_id_from_depot(depot)?;
    let input: ChangePasswordInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    account::change_password(&mut conn, user, current_session, &input).await?;
    Ok(success())
}

/// ## Summary
/// PATCH /api/auth/profile - Updates the caller's username, email, or display name.
///
/// ## Errors
/// Returns HTTP 409 if the username is taken.
#[handler]
async fn update_profile(req: &mut Request, depot: &mut Depot) -> AppResult<Json<AdminUser>> {
    let user = require_admin(depot)?;
    let input: ProfileInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(Json(account::update_profile(&mut conn, user, input).await?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(AUTH_ROUTE_COMPONENT)
        .push(Router::with_path("login").post(login))
        .push(Router::with_path("logout").post(logout))
        .push(Router::with_path("me").get(me))
        .push(Router::with_path("change-password").post(change_password))
        .push(Router::with_path("profile").patch(update_profile))
}
