use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::query::message::{self, MessageFilter};
use vows_db::model::message::GuestMessage;
use vows_service::auth::is_authenticated;
use vows_service::content::guest::{set_message_approved, submit_message};
use vows_service::validate::guest::{ApprovalInput, CreateGuestMessage};

use crate::app::api::extract::{
    body, path_id, query_date, query_date_end, query_flag, require_admin,
};
use crate::app::api::success;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/messages - Lists guestbook messages, newest first.
///
/// Public callers only ever see approved messages. Admins may filter with
/// `?approved=`, `?from=` and `?to=`.
#[handler]
async fn list(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<GuestMessage>>> {
    let filter = if is_authenticated(depot) {
        MessageFilter {
            approved: query_flag(req, "approved")?,
            from: query_date(req, "from")?,
            to: query_date_end(req, "to")?,
        }
    } else {
        MessageFilter {
            approved: Some(true),
            ..MessageFilter::default()
        }
    };
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(message::list(&mut conn, filter).await?))
}

/// ## Summary
/// POST /api/messages - Stores a guestbook entry. New entries await approval.
#[handler]
async fn submit(req: &mut Request, depot: &mut Depot) -> AppResult<Json<GuestMessage>> {
    let input: CreateGuestMessage = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(submit_message(&mut conn, input).await?))
}

#[handler]
async fn approve(req: &mut Request, depot: &mut Depot) -> AppResult<Json<GuestMessage>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let input: ApprovalInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(set_message_approved(&mut conn, id, input.approved).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<serde_json::Value>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    message::delete(&mut conn, id).await?;
    Ok(success())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("messages")
        .get(list)
        .post(submit)
        .push(Router::with_path("{id}").delete(delete))
        .push(Router::with_path("{id}/approve").patch(approve))
}
