//! Singleton access to `site_settings`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::site_settings;
use crate::model::settings::{NewSiteSettings, SiteSettings, SiteSettingsChanges};

/// ## Summary
/// Returns the settings row, or `None` before the first write.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(conn: &mut DbConnection<'_>) -> QueryResult<Option<SiteSettings>> {
    site_settings::table
        .select(SiteSettings::as_select())
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
    changes: &SiteSettingsChanges,
) -> QueryResult<Option<SiteSettings>> {
    diesel::update(site_settings::table.filter(site_settings::singleton.eq(true)))
        .set((changes, site_settings::updated_at.eq(chrono::Utc::now())))
        .returning(SiteSettings::as_returning())
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
    new_row: &NewSiteSettings,
    changes: &SiteSettingsChanges,
) -> QueryResult<SiteSettings> {
    diesel::insert_into(site_settings::table)
        .values(new_row)
        .on_conflict(site_settings::singleton)
        .do_update()
        .set((changes, site_settings::updated_at.eq(chrono::Utc::now())))
        .returning(SiteSettings::as_returning())
        .get_result(conn)
        .await
}
