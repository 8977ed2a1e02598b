//! Admin account operations.

use vows_core::config::{AuthConfig, BootstrapAdminConfig};
use vows_db::db::connection::DbConnection;
use vows_db::db::query::{session as session_query, user as user_query};
use vows_db::model::user::{AdminUser, NewAdminUser};

use super::password::{hash_password, is_long_enough, verify_password};
use super::session::create_session;
use crate::error::{ServiceError, ServiceResult};
use crate::validate::account::{ChangePasswordInput, LoginInput, ProfileInput};

/// A successful login: the raw cookie token and the admin it belongs to.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub user: AdminUser,
}

/// ## Summary
/// Checks the credentials and opens a session.
///
/// ## Errors
/// Returns `NotAuthenticated` for an unknown username or a wrong password.
/// Both cases look the same to the caller.
#[tracing::instrument(skip(conn, input, auth), fields(username = %input.username))]
pub async fn login(
    conn: &mut DbConnection<'_>,
    input: &LoginInput,
    auth: &AuthConfig,
) -> ServiceResult<LoginOutcome> {
    let Some((user, stored_hash)) =
        user_query::credentials_by_username(conn, &input.username).await?
    else {
        tracing::warn!("Login for unknown username");
        return Err(ServiceError::NotAuthenticated);
    };

    if let Err(err) = verify_password(&input.password, &stored_hash) {
        tracing::warn!(user_id = %user.id, "Login with wrong password");
        return Err(err);
    }

    let (token, _session) = create_session(conn, user.id, auth.session_ttl()).await?;
    tracing::info!(user_id = %user.id, "Admin logged in");
    Ok(LoginOutcome { token, user })
}

/// ## Summary
/// Replaces the admin's password after checking the current one.
///
/// ## Side Effects
/// Every other session of this admin is revoked; `current_session` stays valid.
///
/// ## Errors
/// Returns `NotAuthenticated` if `currentPassword` is wrong.
#[tracing::instrument(skip(conn, input, user), fields(user_id = %user.id))]
pub async fn change_password(
    conn: &mut DbConnection<'_>,
    user: &AdminUser,
    current_session: uuid::Uuid,
    input: &ChangePasswordInput,
) -> ServiceResult<()> {
    let stored_hash = user_query::password_hash(conn, user.id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("admin user {}", user.id)))?;
    verify_password(&input.current_password, &stored_hash)?;

    let new_hash = hash_password(&input.new_password)?;
    user_query::set_password_hash(conn, user.id, &new_hash).await?;
    let revoked = session_query::delete_others(conn, user.id, current_session).await?;

    tracing::info!(revoked, "Admin password changed");
    Ok(())
}

/// ## Summary
/// Updates the admin's own username, email, or display name.
///
/// ## Errors
/// Returns `Conflict` if the new username is taken.
#[tracing::instrument(skip(conn, input, user), fields(user_id = %user.id))]
pub async fn update_profile(
    conn: &mut DbConnection<'_>,
    user: &AdminUser,
    input: ProfileInput,
) -> ServiceResult<AdminUser> {
    let row = user_query::update_profile(conn, user.id, &input.into_changes())
        .await
        .map_err(|err| ServiceError::from(err).conflict_on_unique("username"))?;
    row.ok_or_else(|| ServiceError::NotFound(format!("admin user {}", user.id)))
}

/// ## Summary
/// Creates the configured initial admin when the `admin_user` table is empty.
///
/// Returns the created admin, or `None` if admins already exist or no
/// bootstrap admin is configured.
///
/// ## Errors
/// Returns `InvalidConfiguration` if the configured password is too short,
/// and database errors otherwise.
#[tracing::instrument(skip(conn, config))]
pub async fn ensure_bootstrap_admin(
    conn: &mut DbConnection<'_>,
    config: Option<&BootstrapAdminConfig>,
) -> ServiceResult<Option<AdminUser>> {
    let Some(config) = config else {
        tracing::debug!("No bootstrap admin configured");
        return Ok(None);
    };

    if user_query::count(conn).await? > 0 {
        tracing::debug!("Admin users exist, skipping bootstrap");
        return Ok(None);
    }

    if !is_long_enough(&config.password) {
        return Err(ServiceError::InvalidConfiguration(
            "auth.bootstrap_admin.password is too short".to_string(),
        ));
    }

    let password_hash = hash_password(&config.password)?;
    let new_user = NewAdminUser {
        id: uuid::Uuid::now_v7(),
        username: &config.username,
        email: config.email.as_deref(),
        display_name: config.display_name.as_deref(),
        password_hash: &password_hash,
    };
    let user = user_query::create(conn, &new_user).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "Bootstrap admin created");
    Ok(Some(user))
}
