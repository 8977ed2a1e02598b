use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::query::schedule;
use vows_db::model::schedule::ScheduleEvent;
use vows_service::content::collection::{
    create_schedule_event, get_schedule_event, update_schedule_event,
};
use vows_service::validate::content::{CreateScheduleEvent, PatchScheduleEvent, ReorderInput};

use crate::app::api::extract::{body, path_id, require_admin};
use crate::app::api::success;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/schedule - Lists events by `displayOrder`, then by time.
#[handler]
async fn list(depot: &mut Depot) -> AppResult<Json<Vec<ScheduleEvent>>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(schedule::list(&mut conn).await?))
}

#[handler]
async fn get(req: &mut Request, depot: &mut Depot) -> AppResult<Json<ScheduleEvent>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(get_schedule_event(&mut conn, id).await?))
}

#[handler]
async fn create(req: &mut Request, depot: &mut Depot) -> AppResult<Json<ScheduleEvent>> {
    require_admin(depot)?;
    let input: CreateScheduleEvent = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(create_schedule_event(&mut conn, input).await?))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<ScheduleEvent>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let input: PatchScheduleEvent = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(update_schedule_event(&mut conn, id, input).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<serde_json::Value>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    schedule::delete(&mut conn, id).await?;
    Ok(success())
}

/// ## Summary
/// POST /api/schedule/reorder - Renumbers events in the given order and returns the new list.
#[handler]
async fn reorder(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<ScheduleEvent>>> {
    require_admin(depot)?;
    let input: ReorderInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    schedule::reorder(&mut conn, &input.ids).await?;
    Ok(Json(schedule::list(&mut conn).await?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("schedule")
        .get(list)
        .post(create)
        .push(Router::with_path("reorder").post(reorder))
        .push(Router::with_path("{id}").get(get).patch(update).delete(delete))
}
