use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::query::livestream;
use vows_db::model::livestream::LivestreamInfo;
use vows_service::content::singleton::upsert_livestream;
use vows_service::validate::singleton::LivestreamInput;

use crate::app::api::extract::{body, require_admin};
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/livestream - Returns the livestream details, or `null` before the first save.
#[handler]
async fn get(depot: &mut Depot) -> AppResult<Json<Option<LivestreamInfo>>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(livestream::get(&mut conn).await?))
}

/// ## Summary
/// POST /api/livestream - Creates or updates the livestream details.
///
/// ## Errors
/// Returns HTTP 400 if the first save omits `streamUrl` or a field fails validation.
#[handler]
async fn upsert(req: &mut Request, depot: &mut Depot) -> AppResult<Json<LivestreamInfo>> {
    require_admin(depot)?;
    let input: LivestreamInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(upsert_livestream(&mut conn, input).await?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("livestream").get(get).post(upsert)
}
