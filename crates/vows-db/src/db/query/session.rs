//! Queries for `session`.

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{admin_user, session};
use crate::model::user::AdminUser;
use crate::model::user::session::{NewSession, Session};

/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, new_session), fields(user_id = %new_session.user_id))]
pub async fn create(
    conn: &mut DbConnection<'_>,
    new_session: &NewSession<'_>,
) -> QueryResult<Session> {
    diesel::insert_into(session::table)
        .values(new_session)
        .returning(Session::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Returns the owner of an unexpired session with this token digest.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn, token_hash))]
pub async fn find_user(
    conn: &mut DbConnection<'_>,
    token_hash: &str,
) -> QueryResult<Option<(Session, AdminUser)>> {
    session::table
        .inner_join(admin_user::table)
        .filter(session::token_hash.eq(token_hash))
        .filter(session::expires_at.gt(Utc::now()))
        .select((Session::as_select(), AdminUser::as_select()))
        .first(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn, token_hash))]
pub async fn delete_by_token_hash(
    conn: &mut DbConnection<'_>,
    token_hash: &str,
) -> QueryResult<usize> {
    diesel::delete(session::table.filter(session::token_hash.eq(token_hash)))
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes every session of `user_id` except `keep`.
///
/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete_others(
    conn: &mut DbConnection<'_>,
    user_id: uuid::Uuid,
    keep: uuid::Uuid,
) -> QueryResult<usize> {
    diesel::delete(
        session::table
            .filter(session::user_id.eq(user_id))
            .filter(session::id.ne(keep)),
    )
    .execute(conn)
    .await
}

/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete_expired(conn: &mut DbConnection<'_>) -> QueryResult<usize> {
    diesel::delete(session::table.filter(session::expires_at.le(Utc::now())))
        .execute(conn)
        .await
}
