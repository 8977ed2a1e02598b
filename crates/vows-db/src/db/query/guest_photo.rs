//! Queries for `guest_photo`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::guest_photo;
use crate::model::guest_photo::{GuestPhoto, NewGuestPhoto};

type BoxedQuery<'a> = guest_photo::BoxedQuery<'a, diesel::pg::Pg>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuestPhotoFilter {
    pub approved: Option<bool>,
}

#[must_use]
pub fn all() -> BoxedQuery<'static> {
    guest_photo::table
        .order(guest_photo::created_at.desc())
        .into_boxed()
}

#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    guest_photo::table.filter(guest_photo::id.eq(id)).into_boxed()
}

#[must_use]
pub fn filtered(filter: GuestPhotoFilter) -> BoxedQuery<'static> {
    match filter.approved {
        Some(approved) => all().filter(guest_photo::approved.eq(approved)),
        None => all(),
    }
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list(
    conn: &mut DbConnection<'_>,
    filter: GuestPhotoFilter,
) -> QueryResult<Vec<GuestPhoto>> {
    filtered(filter)
        .select(GuestPhoto::as_select())
        .load(conn)
        .await
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<Option<GuestPhoto>> {
    by_id(id)
        .select(GuestPhoto::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn count_pending(conn: &mut DbConnection<'_>) -> QueryResult<i64> {
    guest_photo::table
        .filter(guest_photo::approved.eq(false))
        .count()
        .get_result(conn)
        .await
}

/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, new_photo), fields(photo_id = %new_photo.id))]
pub async fn create(
    conn: &mut DbConnection<'_>,
    new_photo: &NewGuestPhoto,
) -> QueryResult<GuestPhoto> {
    diesel::insert_into(guest_photo::table)
        .values(new_photo)
        .returning(GuestPhoto::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Sets the approval flag. Only `approved` and `updated_at` change.
///
/// ## Errors
/// Returns a database error if the update fails.
#[tracing::instrument(skip(conn))]
pub async fn set_approved(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    approved: bool,
) -> QueryResult<Option<GuestPhoto>> {
    diesel::update(guest_photo::table.find(id))
        .set((
            guest_photo::approved.eq(approved),
            guest_photo::updated_at.eq(chrono::Utc::now()),
        ))
        .returning(GuestPhoto::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<usize> {
    diesel::delete(guest_photo::table.find(id))
        .execute(conn)
        .await
}
