//! Opaque session tokens.
//!
//! A token is 32 random bytes, base64url-encoded without padding, handed to
//! the browser in a cookie. Only its SHA-256 hex digest is stored.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

use vows_db::db::connection::DbConnection;
use vows_db::db::query::session as session_query;
use vows_db::model::user::AdminUser;
use vows_db::model::user::session::{NewSession, Session};

use crate::error::ServiceResult;

const TOKEN_BYTES: usize = 32;

/// ## Summary
/// Generates a fresh random session token.
#[must_use]
pub fn generate_token() -> String {
    let mut bytes = [0_u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// ## Summary
/// Returns the digest under which `token` is stored.
#[must_use]
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// ## Summary
/// Opens a session for `user_id` and returns the raw token with its record.
///
/// ## Errors
/// Returns database errors.
#[tracing::instrument(skip(conn))]
pub async fn create_session(
    conn: &mut DbConnection<'_>,
    user_id: uuid::Uuid,
    ttl: chrono::TimeDelta,
) -> ServiceResult<(String, Session)> {
    let token = generate_token();
    let token_hash = hash_token(&token);
    let new_session = NewSession {
        id: uuid::Uuid::now_v7(),
        token_hash: &token_hash,
        user_id,
        expires_at: chrono::Utc::now() + ttl,
    };

    let session = session_query::create(conn, &new_session).await?;
    tracing::debug!(session_id = %session.id, expires_at = %session.expires_at, "Session created");
    Ok((token, session))
}

/// ## Summary
/// Resolves a raw token to its unexpired session and owner.
///
/// ## Errors
/// Returns database errors. Unknown and expired tokens yield `Ok(None)`.
#[tracing::instrument(skip(conn, token))]
pub async fn resolve_session(
    conn: &mut DbConnection<'_>,
    token: &str,
) -> ServiceResult<Option<(Session, AdminUser)>> {
    Ok(session_query::find_user(conn, &hash_token(token)).await?)
}

/// ## Summary
/// Deletes the session behind `token`. Unknown tokens are not an error.
///
/// ## Errors
/// Returns database errors.
#[tracing::instrument(skip(conn, token))]
pub async fn revoke_session(conn: &mut DbConnection<'_>, token: &str) -> ServiceResult<()> {
    let removed = session_query::delete_by_token_hash(conn, &hash_token(token)).await?;
    tracing::debug!(removed, "Session revoked");
    Ok(())
}

/// ## Summary
/// Deletes all expired sessions and returns how many were removed.
///
/// ## Errors
/// Returns database errors.
#[tracing::instrument(skip(conn))]
pub async fn purge_expired(conn: &mut DbConnection<'_>) -> ServiceResult<usize> {
    let removed = session_query::delete_expired(conn).await?;
    if removed > 0 {
        tracing::info!(removed, "Purged expired sessions");
    }
    Ok(removed)
}
