//! Upserts for couple info, site settings, and livestream info.

use vows_db::db::connection::DbConnection;
use vows_db::db::query::{couple_info, livestream, site_settings};
use vows_db::model::couple::CoupleInfo;
use vows_db::model::livestream::LivestreamInfo;
use vows_db::model::settings::SiteSettings;

use crate::error::ServiceResult;
use crate::validate::singleton::{
    CoupleInfoInput, LivestreamInput, SiteSettingsInput, first_couple_info, first_livestream,
    first_site_settings,
};

/// ## Summary
/// Merges `input` onto the couple info row, creating it on first use.
///
/// ## Errors
/// Returns `ValidationError` if a date does not parse or the first write
/// lacks `weddingDate`, and database errors otherwise.
#[tracing::instrument(skip(conn, input))]
pub async fn upsert_couple_info(
    conn: &mut DbConnection<'_>,
    input: CoupleInfoInput,
) -> ServiceResult<CoupleInfo> {
    let changes = input.into_changes()?;

    if let Some(row) = couple_info::update(conn, &changes).await? {
        tracing::debug!(id = %row.id, "Couple info updated");
        return Ok(row);
    }

    let new_row = first_couple_info(&changes)?;
    let row = couple_info::insert(conn, &new_row, &changes).await?;
    tracing::info!(id = %row.id, "Couple info created");
    Ok(row)
}

/// ## Summary
/// Merges `input` onto the settings row, creating it on first use.
///
/// ## Errors
/// Returns `ValidationError` for malformed input, and database errors otherwise.
#[tracing::instrument(skip(conn, input))]
pub async fn upsert_site_settings(
    conn: &mut DbConnection<'_>,
    input: SiteSettingsInput,
) -> ServiceResult<SiteSettings> {
    let changes = input.into_changes()?;

    if let Some(row) = site_settings::update(conn, &changes).await? {
        tracing::debug!(id = %row.id, "Site settings updated");
        return Ok(row);
    }

    let row = site_settings::insert(conn, &first_site_settings(&changes), &changes).await?;
    tracing::info!(id = %row.id, "Site settings created");
    Ok(row)
}

/// ## Summary
/// Merges `input` onto the livestream row, creating it on first use.
///
/// ## Errors
/// Returns `ValidationError` if a time does not parse or the first write
/// lacks `streamUrl`, and database errors otherwise.
#[tracing::instrument(skip(conn, input))]
pub async fn upsert_livestream(
    conn: &mut DbConnection<'_>,
    input: LivestreamInput,
) -> ServiceResult<LivestreamInfo> {
    let changes = input.into_changes()?;

    if let Some(row) = livestream::update(conn, &changes).await? {
        tracing::debug!(id = %row.id, "Livestream info updated");
        return Ok(row);
    }

    let new_row = first_livestream(&changes)?;
    let row = livestream::insert(conn, &new_row, &changes).await?;
    tracing::info!(id = %row.id, "Livestream info created");
    Ok(row)
}
