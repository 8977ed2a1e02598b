use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::query::guest_photo::{self, GuestPhotoFilter};
use vows_db::model::guest_photo::GuestPhoto;
use vows_service::auth::is_authenticated;
use vows_service::content::guest::{set_guest_photo_approved, submit_guest_photo};
use vows_service::validate::guest::{ApprovalInput, CreateGuestPhoto};

use crate::app::api::extract::{body, path_id, query_flag, require_admin};
use crate::app::api::success;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/guest-photos - Lists guest uploads, newest first.
///
/// Public callers only see approved photos.
#[handler]
async fn list(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<GuestPhoto>>> {
    let approved = if is_authenticated(depot) {
        query_flag(req, "approved")?
    } else {
        Some(true)
    };
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(
        guest_photo::list(&mut conn, GuestPhotoFilter { approved }).await?,
    ))
}

#[handler]
async fn submit(req: &mut Request, depot: &mut Depot) -> AppResult<Json<GuestPhoto>> {
    let input: CreateGuestPhoto = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(submit_guest_photo(&mut conn, input).await?))
}

#[handler]
async fn approve(req: &mut Request, depot: &mut Depot) -> AppResult<Json<GuestPhoto>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let input: ApprovalInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(
        set_guest_photo_approved(&mut conn, id, input.approved).await?,
    ))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<serde_json::Value>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    guest_photo::delete(&mut conn, id).await?;
    Ok(success())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("guest-photos")
        .get(list)
        .post(submit)
        .push(Router::with_path("{id}").delete(delete))
        .push(Router::with_path("{id}/approve").patch(approve))
}
