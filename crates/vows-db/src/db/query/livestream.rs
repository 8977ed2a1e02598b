//! Singleton access to `livestream_info`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::livestream_info;
use crate::model::livestream::{LivestreamInfo, LivestreamInfoChanges, NewLivestreamInfo};

/// ## Summary
/// Returns the livestream row, or `None` before the first write.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(conn: &mut DbConnection<'_>) -> QueryResult<Option<LivestreamInfo>> {
    livestream_info::table
        .select(LivestreamInfo::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Applies `changes` to the existing row and bumps `updated_at`.
///
/// ## Errors
/// Returns a database error if the update fails.
#[tracing::instrument(skip(conn, changes))]
pub async fn update(
    conn: &mut DbConnection<'_>,
    changes: &LivestreamInfoChanges,
) -> QueryResult<Option<LivestreamInfo>> {
    diesel::update(livestream_info::table.filter(livestream_info::singleton.eq(true)))
        .set((changes, livestream_info::updated_at.eq(chrono::Utc::now())))
        .returning(LivestreamInfo::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Inserts the first row, merging `changes` onto a concurrently inserted row
/// if one won the race.
///
/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, new_row, changes))]
pub async fn insert(
    conn: &mut DbConnection<'_>,
    new_row: &NewLivestreamInfo,
    changes: &LivestreamInfoChanges,
) -> QueryResult<LivestreamInfo> {
    diesel::insert_into(livestream_info::table)
        .values(new_row)
        .on_conflict(livestream_info::singleton)
        .do_update()
        .set((changes, livestream_info::updated_at.eq(chrono::Utc::now())))
        .returning(LivestreamInfo::as_returning())
        .get_result(conn)
        .await
}
