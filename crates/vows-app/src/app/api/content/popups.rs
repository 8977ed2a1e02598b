use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::query::popup::{self, PopupFilter};
use vows_db::model::popup::Popup;
use vows_service::content::collection::{create_popup, get_popup, get_popup_by_kind, update_popup};
use vows_service::validate::content::{CreatePopup, PatchPopup};

use crate::app::api::extract::{body, path_id, query_flag, require_admin};
use crate::app::api::success;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

#[handler]
async fn list(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<Popup>>> {
    let filter = PopupFilter {
        active_only: query_flag(req, "activeOnly")?.unwrap_or(false),
    };
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(popup::list(&mut conn, filter).await?))
}

#[handler]
async fn get(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Popup>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(get_popup(&mut conn, id).await?))
}

/// ## Summary
/// GET /api/popups/kind/{kind} - Returns the popup of one kind, or `null` if none exists.
///
/// ## Errors
/// Returns HTTP 400 for a kind other than `welcome` or `scroll_end`.
#[handler]
async fn get_by_kind(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Option<Popup>>> {
    let kind = req.param::<String>("kind").unwrap_or_default();
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(get_popup_by_kind(&mut conn, &kind).await?))
}

/// ## Summary
/// POST /api/popups - Creates a popup.
///
/// ## Errors
/// Returns HTTP 409 if a popup of the same kind already exists.
#[handler]
async fn create(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Popup>> {
    require_admin(depot)?;
    let input: CreatePopup = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(create_popup(&mut conn, input).await?))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Popup>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let input: PatchPopup = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(update_popup(&mut conn, id, input).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<serde_json::Value>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    popup::delete(&mut conn, id).await?;
    Ok(success())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("popups")
        .get(list)
        .post(create)
        .push(Router::with_path("kind/{kind}").get(get_by_kind))
        .push(Router::with_path("{id}").get(get).patch(update).delete(delete))
}
