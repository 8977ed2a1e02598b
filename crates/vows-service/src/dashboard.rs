//! Counts shown on the admin dashboard.

use serde::Serialize;

use vows_db::db::connection::DbConnection;
use vows_db::db::query::{guest_photo, message, music, rsvp};

use crate::error::ServiceResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub rsvp_attending: i64,
    pub rsvp_declining: i64,
    pub total_guests: i64,
    pub pending_messages: i64,
    pub pending_guest_photos: i64,
    pub active_music_tracks: i64,
}

/// ## Summary
/// Collects the dashboard counts. Each count is its own query, so the
/// numbers are not a single consistent snapshot.
///
/// ## Errors
/// Returns database errors.
#[tracing::instrument(skip(conn))]
pub async fn summary(conn: &mut DbConnection<'_>) -> ServiceResult<DashboardSummary> {
    let totals = rsvp::totals(conn).await?;
    let pending_messages = message::count_pending(conn).await?;
    let pending_guest_photos = guest_photo::count_pending(conn).await?;
    let active_music_tracks = music::count_active(conn).await?;

    Ok(DashboardSummary {
        rsvp_attending: totals.attending,
        rsvp_declining: totals.declining,
        total_guests: totals.total_guests,
        pending_messages,
        pending_guest_photos,
        active_music_tracks,
    })
}
