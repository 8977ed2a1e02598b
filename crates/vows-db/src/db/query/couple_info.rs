//! Singleton access to `couple_info`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::couple_info;
use crate::model::couple::{CoupleInfo, CoupleInfoChanges, NewCoupleInfo};

/// ## Summary
/// Returns the couple info row, or `None` before the first write.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(conn: &mut DbConnection<'_>) -> QueryResult<Option<CoupleInfo>> {
    couple_info::table
        .select(CoupleInfo::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Applies `changes` to the existing row and bumps `updated_at`.
///
/// Returns `None` when no row exists yet; the caller then inserts.
///
/// ## Errors
/// Returns a database error if the update fails.
#[tracing::instrument(skip(conn, changes))]
pub async fn update(
    conn: &mut DbConnection<'_>,
    changes: &CoupleInfoChanges,
) -> QueryResult<Option<CoupleInfo>> {
    diesel::update(couple_info::table.filter(couple_info::singleton.eq(true)))
        .set((changes, couple_info::updated_at.eq(chrono::Utc::now())))
        .returning(CoupleInfo::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Inserts the first row. If another writer inserted in the meantime, the
/// same `changes` are merged onto that row instead.
///
/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, new_row, changes))]
pub async fn insert(
    conn: &mut DbConnection<'_>,
    new_row: &NewCoupleInfo,
    changes: &CoupleInfoChanges,
) -> QueryResult<CoupleInfo> {
    diesel::insert_into(couple_info::table)
        .values(new_row)
        .on_conflict(couple_info::singleton)
        .do_update()
        .set((changes, couple_info::updated_at.eq(chrono::Utc::now())))
        .returning(CoupleInfo::as_returning())
        .get_result(conn)
        .await
}
