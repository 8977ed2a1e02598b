use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::query::rsvp::{self, RsvpFilter};
use vows_db::model::rsvp::Rsvp;
use vows_service::content::guest::{get_rsvp, submit_rsvp, update_rsvp};
use vows_service::validate::guest::{CreateRsvp, PatchRsvp};

use crate::app::api::extract::{
    body, path_id, query_date, query_date_end, query_flag, require_admin,
};
use crate::app::api::success;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/rsvps - Lists replies, newest first.
///
/// Supports `?attending=`, and `?from=` / `?to=` bounds on the submission time.
#[handler]
async fn list(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<Rsvp>>> {
    require_admin(depot)?;
    let filter = RsvpFilter {
        attending: query_flag(req, "attending")?,
        from: query_date(req, "from")?,
        to: query_date_end(req, "to")?,
    };
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(rsvp::list(&mut conn, filter).await?))
}

#[handler]
async fn get(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Rsvp>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(get_rsvp(&mut conn, id).await?))
}

/// ## Summary
/// POST /api/rsvps - Records a guest's reply.
///
/// ## Errors
/// Returns HTTP 400 naming the field for a missing name, a bad email, or a
/// party size outside the accepted range.
#[handler]
async fn submit(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Rsvp>> {
    let input: CreateRsvp = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(submit_rsvp(&mut conn, input).await?))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Rsvp>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let input: PatchRsvp = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(update_rsvp(&mut conn, id, input).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<serde_json::Value>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    rsvp::delete(&mut conn, id).await?;
    Ok(success())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("rsvps")
        .get(list)
        .post(submit)
        .push(Router::with_path("{id}").get(get).patch(update).delete(delete))
}
