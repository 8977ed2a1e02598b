//! Queries for `music_track`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::db::connection::DbConnection;
use crate::db::schema::music_track;
use crate::db::transaction::with_transaction;
use crate::error::DbResult;
use crate::model::music::{MusicTrack, MusicTrackChanges, NewMusicTrack};

type BoxedQuery<'a> = music_track::BoxedQuery<'a, diesel::pg::Pg>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MusicTrackFilter {
    pub active_only: bool,
}

/// ## Summary
/// Returns a query over all tracks in playlist order.
#[must_use]
pub fn all() -> BoxedQuery<'static> {
    music_track::table
        .order((music_track::display_order.asc(), music_track::created_at.asc()))
        .into_boxed()
}

#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    music_track::table.filter(music_track::id.eq(id)).into_boxed()
}

#[must_use]
pub fn filtered(filter: MusicTrackFilter) -> BoxedQuery<'static> {
    let query = all();
    if filter.active_only {
        query.filter(music_track::is_active.eq(true))
    } else {
        query
    }
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list(
    conn: &mut DbConnection<'_>,
    filter: MusicTrackFilter,
) -> QueryResult<Vec<MusicTrack>> {
    filtered(filter)
        .select(MusicTrack::as_select())
        .load(conn)
        .await
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<Option<MusicTrack>> {
    by_id(id)
        .select(MusicTrack::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Counts active tracks.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn count_active(conn: &mut DbConnection<'_>) -> QueryResult<i64> {
    music_track::table
        .filter(music_track::is_active.eq(true))
        .count()
        .get_result(conn)
        .await
}

/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, new_track), fields(track_id = %new_track.id))]
pub async fn create(
    conn: &mut DbConnection<'_>,
    new_track: &NewMusicTrack,
) -> QueryResult<MusicTrack> {
    diesel::insert_into(music_track::table)
        .values(new_track)
        .returning(MusicTrack::as_returning())
        .get_result(conn)
        .await
}

/// ## Errors
/// Returns a database error if the update fails.
#[tracing::instrument(skip(conn, changes))]
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changes: &MusicTrackChanges,
) -> QueryResult<Option<MusicTrack>> {
    diesel::update(music_track::table.find(id))
        .set((changes, music_track::updated_at.eq(chrono::Utc::now())))
        .returning(MusicTrack::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<usize> {
    diesel::delete(music_track::table.find(id))
        .execute(conn)
        .await
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
                updated += diesel::update(music_track::table.find(*id))
                    .set((
                        music_track::display_order.eq(position),
                        music_track::updated_at.eq(now),
                    ))
                    .execute(tx)
                    .await?;
            }
            Ok(updated)
        }
        .scope_boxed()
    })
    .await
}
