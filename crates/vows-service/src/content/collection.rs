//! Writes for the admin-managed collections.

use vows_db::db::connection::DbConnection;
use vows_db::db::enums::PopupKind;
use vows_db::db::query::{music, party, photo, popup, schedule};
use vows_db::model::music::MusicTrack;
use vows_db::model::party::WeddingPartyMember;
use vows_db::model::photo::Photo;
use vows_db::model::popup::Popup;
use vows_db::model::schedule::ScheduleEvent;

use super::found;
use crate::error::{ServiceError, ServiceResult};
use crate::validate::content::{
    CreateMusicTrack, CreatePhoto, CreatePopup, CreateScheduleEvent, CreateWeddingPartyMember,
    PatchMusicTrack, PatchPhoto, PatchPopup, PatchScheduleEvent, PatchWeddingPartyMember,
};

/// ## Errors
/// Returns `NotFound` if no event has this id.
pub async fn get_schedule_event(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> ServiceResult<ScheduleEvent> {
    found(schedule::get(conn, id).await?, "schedule event", id)
}

/// ## Errors
/// Returns `ValidationError` if `eventTime` does not parse.
#[tracing::instrument(skip(conn, input))]
pub async fn create_schedule_event(
    conn: &mut DbConnection<'_>,
    input: CreateScheduleEvent,
) -> ServiceResult<ScheduleEvent> {
    let new_event = input.into_new()?;
    Ok(schedule::create(conn, &new_event).await?)
}

/// ## Errors
/// Returns `NotFound` if no event has this id.
#[tracing::instrument(skip(conn, input))]
pub async fn update_schedule_event(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    input: PatchScheduleEvent,
) -> ServiceResult<ScheduleEvent> {
    let changes = input.into_changes()?;
    found(
        schedule::update(conn, id, &changes).await?,
        "schedule event",
        id,
    )
}

/// ## Errors
/// Returns `NotFound` if no photo has this id.
pub async fn get_photo(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<Photo> {
    found(photo::get(conn, id).await?, "photo", id)
}

/// ## Errors
/// Returns database errors.
#[tracing::instrument(skip(conn, input))]
pub async fn create_photo(
    conn: &mut DbConnection<'_>,
    input: CreatePhoto,
) -> ServiceResult<Photo> {
    Ok(photo::create(conn, &input.into_new()).await?)
}

/// ## Errors
/// Returns `NotFound` if no photo has this id.
#[tracing::instrument(skip(conn, input))]
pub async fn update_photo(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    input: PatchPhoto,
) -> ServiceResult<Photo> {
    found(
        photo::update(conn, id, &input.into_changes()).await?,
        "photo",
        id,
    )
}

/// ## Errors
/// Returns `NotFound` if no member has this id.
pub async fn get_party_member(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> ServiceResult<WeddingPartyMember> {
    found(party::get(conn, id).await?, "wedding party member", id)
}

/// ## Errors
/// Returns database errors.
#[tracing::instrument(skip(conn, input))]
pub async fn create_party_member(
    conn: &mut DbConnection<'_>,
    input: CreateWeddingPartyMember,
) -> ServiceResult<WeddingPartyMember> {
    Ok(party::create(conn, &input.into_new()).await?)
}

/// ## Errors
/// Returns `NotFound` if no member has this id.
#[tracing::instrument(skip(conn, input))]
pub async fn update_party_member(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    input: PatchWeddingPartyMember,
) -> ServiceResult<WeddingPartyMember> {
    found(
        party::update(conn, id, &input.into_changes()).await?,
        "wedding party member",
        id,
    )
}

/// ## Errors
/// Returns `NotFound` if no track has this id.
pub async fn get_music_track(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> ServiceResult<MusicTrack> {
    found(music::get(conn, id).await?, "music track", id)
}

/// ## Errors
/// Returns database errors.
#[tracing::instrument(skip(conn, input))]
pub async fn create_music_track(
    conn: &mut DbConnection<'_>,
    input: CreateMusicTrack,
) -> ServiceResult<MusicTrack> {
    Ok(music::create(conn, &input.into_new()).await?)
}

/// ## Errors
/// Returns `NotFound` if no track has this id.
#[tracing::instrument(skip(conn, input))]
pub async fn update_music_track(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    input: PatchMusicTrack,
) -> ServiceResult<MusicTrack> {
    found(
        music::update(conn, id, &input.into_changes()).await?,
        "music track",
        id,
    )
}

/// ## Errors
/// Returns `NotFound` if no popup has this id.
pub async fn get_popup(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<Popup> {
    found(popup::get(conn, id).await?, "popup", id)
}

/// ## Summary
/// Returns the popup shown for `kind`, or `None` if none is configured.
///
/// ## Errors
/// Returns `ValidationError` for an unknown kind.
pub async fn get_popup_by_kind(
    conn: &mut DbConnection<'_>,
    kind: &str,
) -> ServiceResult<Option<Popup>> {
    let kind: PopupKind = kind
        .parse()
        .map_err(|err: vows_core::error::CoreError| ServiceError::ValidationError(err.to_string()))?;
    Ok(popup::get_by_kind(conn, kind).await?)
}

/// ## Errors
/// Returns `Conflict` if a popup of the same kind exists.
#[tracing::instrument(skip(conn, input), fields(kind = %input.kind))]
pub async fn create_popup(
    conn: &mut DbConnection<'_>,
    input: CreatePopup,
) -> ServiceResult<Popup> {
    let kind = input.kind;
    popup::create(conn, &input.into_new())
        .await
        .map_err(|err| ServiceError::from(err).conflict_on_unique(&format!("{kind} popup")))
}

/// ## Errors
/// Returns `NotFound` if no popup has this id, or `Conflict` if the new
/// kind is already taken.
#[tracing::instrument(skip(conn, input))]
pub async fn update_popup(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    input: PatchPopup,
) -> ServiceResult<Popup> {
    let changes = input.into_changes();
    let row = popup::update(conn, id, &changes).await.map_err(|err| {
        let what = changes
            .kind
            .map_or_else(|| "popup".to_string(), |kind| format!("{kind} popup"));
        ServiceError::from(err).conflict_on_unique(&what)
    })?;
    found(row, "popup", id)
}
