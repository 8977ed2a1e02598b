use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::query::party;
use vows_db::model::party::WeddingPartyMember;
use vows_service::content::collection::{
    create_party_member, get_party_member, update_party_member,
};
use vows_service::validate::content::{CreateWeddingPartyMember, PatchWeddingPartyMember, ReorderInput};

use crate::app::api::extract::{body, path_id, require_admin};
use crate::app::api::success;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/wedding-party - Lists members by `displayOrder`.
#[handler]
async fn list(depot: &mut Depot) -> AppResult<Json<Vec<WeddingPartyMember>>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(party::list(&mut conn).await?))
}

#[handler]
async fn get(req: &mut Request, depot: &mut Depot) -> AppResult<Json<WeddingPartyMember>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(get_party_member(&mut conn, id).await?))
}

#[handler]
async fn create(req: &mut Request, depot: &mut Depot) -> AppResult<Json<WeddingPartyMember>> {
    require_admin(depot)?;
    let input: CreateWeddingPartyMember = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(create_party_member(&mut conn, input).await?))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<WeddingPartyMember>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let input: PatchWeddingPartyMember = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(update_party_member(&mut conn, id, input).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<serde_json::Value>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    party::delete(&mut conn, id).await?;
    Ok(success())
}

/// ## Summary
/// POST /api/wedding-party/reorder - Renumbers members in the given order and returns the new list.
#[handler]
async fn reorder(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<WeddingPartyMember>>> {
    require_admin(depot)?;
    let input: ReorderInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    party::reorder(&mut conn, &input.ids).await?;
    Ok(Json(party::list(&mut conn).await?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("wedding-party")
        .get(list)
        .post(create)
        .push(Router::with_path("reorder").post(reorder))
        .push(Router::with_path("{id}").get(get).patch(update).delete(delete))
}
