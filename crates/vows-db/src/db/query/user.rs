//! Queries for `admin_user`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::admin_user;
use crate::model::user::{AdminUser, AdminUserChanges, NewAdminUser};

type BoxedQuery<'a> = admin_user::BoxedQuery<'a, diesel::pg::Pg>;

#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    admin_user::table.filter(admin_user::id.eq(id)).into_boxed()
}

#[must_use]
pub fn by_username(username: &str) -> BoxedQuery<'_> {
    admin_user::table
        .filter(admin_user::username.eq(username))
        .into_boxed()
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<Option<AdminUser>> {
    by_id(id)
        .select(AdminUser::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Returns the user together with its stored password hash, for login.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn credentials_by_username(
    conn: &mut DbConnection<'_>,
    username: &str,
) -> QueryResult<Option<(AdminUser, String)>> {
    by_username(username)
        .select((AdminUser::as_select(), admin_user::password_hash))
        .first(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn password_hash(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> QueryResult<Option<String>> {
    by_id(id)
        .select(admin_user::password_hash)
        .first(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn count(conn: &mut DbConnection<'_>) -> QueryResult<i64> {
    admin_user::table.count().get_result(conn).await
}

/// ## Errors
/// Returns `UniqueViolation` if the username is taken.
#[tracing::instrument(skip(conn, new_user), fields(username = new_user.username))]
pub async fn create(
    conn: &mut DbConnection<'_>,
    new_user: &NewAdminUser<'_>,
) -> QueryResult<AdminUser> {
    diesel::insert_into(admin_user::table)
        .values(new_user)
        .returning(AdminUser::as_returning())
        .get_result(conn)
        .await
}

/// ## Errors
/// Returns `UniqueViolation` if the new username is taken.
#[tracing::instrument(skip(conn, changes))]
pub async fn update_profile(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changes: &AdminUserChanges,
) -> QueryResult<Option<AdminUser>> {
    diesel::update(admin_user::table.find(id))
        .set((changes, admin_user::updated_at.eq(chrono::Utc::now())))
        .returning(AdminUser::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the update fails.
#[tracing::instrument(skip(conn, new_hash))]
pub async fn set_password_hash(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    new_hash: &str,
) -> QueryResult<usize> {
    diesel::update(admin_user::table.find(id))
        .set((
            admin_user::password_hash.eq(new_hash),
            admin_user::updated_at.eq(chrono::Utc::now()),
        ))
        .execute(conn)
        .await
}
