//! Guest submissions and the admin approval action.

use vows_db::db::connection::DbConnection;
use vows_db::db::query::{guest_photo, message, rsvp};
use vows_db::model::guest_photo::GuestPhoto;
use vows_db::model::message::GuestMessage;
use vows_db::model::rsvp::Rsvp;

use super::found;
use crate::error::ServiceResult;
use crate::validate::guest::{CreateGuestMessage, CreateGuestPhoto, CreateRsvp, PatchRsvp};

/// ## Errors
/// Returns database errors.
#[tracing::instrument(skip(conn, input))]
pub async fn submit_rsvp(conn: &mut DbConnection<'_>, input: CreateRsvp) -> ServiceResult<Rsvp> {
    let row = rsvp::create(conn, &input.into_new()).await?;
    tracing::info!(id = %row.id, attending = row.attending, "RSVP received");
    Ok(row)
}

/// ## Errors
/// Returns `NotFound` if no reply has this id.
pub async fn get_rsvp(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<Rsvp> {
    found(rsvp::get(conn, id).await?, "rsvp", id)
}

/// ## Errors
/// Returns `NotFound` if no reply has this id.
#[tracing::instrument(skip(conn, input))]
pub async fn update_rsvp(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    input: PatchRsvp,
) -> ServiceResult<Rsvp> {
    found(
        rsvp::update(conn, id, &input.into_changes()).await?,
        "rsvp",
        id,
    )
}

/// ## Errors
/// Returns database errors.
#[tracing::instrument(skip(conn, input))]
pub async fn submit_message(
    conn: &mut DbConnection<'_>,
    input: CreateGuestMessage,
) -> ServiceResult<GuestMessage> {
    let row = message::create(conn, &input.into_new()).await?;
    tracing::info!(id = %row.id, "Guest message received");
    Ok(row)
}

/// ## Summary
/// Sets the approval flag of a message. Nothing else on the row changes.
///
/// ## Errors
/// Returns `NotFound` if no message has this id.
#[tracing::instrument(skip(conn))]
pub async fn set_message_approved(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    approved: bool,
) -> ServiceResult<GuestMessage> {
    found(
        message::set_approved(conn, id, approved).await?,
        "message",
        id,
    )
}

/// ## Errors
/// Returns database errors.
#[tracing::instrument(skip(conn, input))]
pub async fn submit_guest_photo(
    conn: &mut DbConnection<'_>,
    input: CreateGuestPhoto,
) -> ServiceResult<GuestPhoto> {
    let row = guest_photo::create(conn, &input.into_new()).await?;
    tracing::info!(id = %row.id, "Guest photo received");
    Ok(row)
}

/// ## Summary
/// Sets the approval flag of a guest photo. Nothing else on the row changes.
///
/// ## Errors
/// Returns `NotFound` if no guest photo has this id.
#[tracing::instrument(skip(conn))]
pub async fn set_guest_photo_approved(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    approved: bool,
) -> ServiceResult<GuestPhoto> {
    found(
        guest_photo::set_approved(conn, id, approved).await?,
        "guest photo",
        id,
    )
}
