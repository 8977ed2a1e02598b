//! Queries for `photo`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::db::connection::DbConnection;
use crate::db::enums::PhotoCategory;
use crate::db::schema::photo;
use crate::db::transaction::with_transaction;
use crate::error::DbResult;
use crate::model::photo::{NewPhoto, Photo, PhotoChanges};

type BoxedQuery<'a> = photo::BoxedQuery<'a, diesel::pg::Pg>;

/// List filter for gallery photos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoFilter {
    pub category: Option<PhotoCategory>,
}

/// ## Summary
/// Returns a query over all photos in display order.
#[must_use]
pub fn all() -> BoxedQuery<'static> {
    photo::table
        .order((photo::display_order.asc(), photo::created_at.asc()))
        .into_boxed()
}

#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    photo::table.filter(photo::id.eq(id)).into_boxed()
}

/// ## Summary
/// Returns the ordered query narrowed by `filter`.
#[must_use]
pub fn filtered(filter: &PhotoFilter) -> BoxedQuery<'static> {
    let mut query = all();
    if let Some(category) = &filter.category {
        query = query.filter(photo::category.eq(category.clone()));
    }
    query
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list(conn: &mut DbConnection<'_>, filter: &PhotoFilter) -> QueryResult<Vec<Photo>> {
    filtered(filter).select(Photo::as_select()).load(conn).await
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<Option<Photo>> {
    by_id(id)
        .select(Photo::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, new_photo), fields(photo_id = %new_photo.id))]
pub async fn create(conn: &mut DbConnection<'_>, new_photo: &NewPhoto) -> QueryResult<Photo> {
    diesel::insert_into(photo::table)
        .values(new_photo)
        .returning(Photo::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Applies the supplied fields and bumps `updated_at`. `None` if the id is unknown.
///
/// ## Errors
/// Returns a database error if the update fails.
#[tracing::instrument(skip(conn, changes))]
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changes: &PhotoChanges,
) -> QueryResult<Option<Photo>> {
    diesel::update(photo::table.find(id))
        .set((changes, photo::updated_at.eq(chrono::Utc::now())))
        .returning(Photo::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<usize> {
    diesel::delete(photo::table.find(id)).execute(conn).await
}

/// ## Summary
/// Sets `display_order` to each id's position in `ids`, in one transaction.
///
/// ## Errors
/// Returns a database error if any update fails.
#[tracing::instrument(skip(conn, ids), fields(count = ids.len()))]
pub async fn reorder(conn: &mut DbConnection<'_>, ids: &[uuid::Uuid]) -> DbResult<usize> {
    let ids = ids.to_vec();
    with_transaction(conn, |tx| {
        async move {
            let now = chrono::Utc::now();
            let mut updated = 0;
            for (position, id) in (0_i32..).zip(ids.iter()) {
                updated += diesel::update(photo::table.find(*id))
                    .set((photo::display_order.eq(position), photo::updated_at.eq(now)))
                    .execute(tx)
                    .await?;
            }
            Ok(updated)
        }
        .scope_boxed()
    })
    .await
}
