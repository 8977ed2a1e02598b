use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::query::couple_info;
use vows_db::model::couple::CoupleInfo;
use vows_service::content::singleton::upsert_couple_info;
use vows_service::validate::singleton::CoupleInfoInput;

use crate::app::api::extract::{body, require_admin};
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/couple-info - Returns the couple record, or `null` before the first save.
#[handler]
async fn get(depot: &mut Depot) -> AppResult<Json<Option<CoupleInfo>>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(couple_info::get(&mut conn).await?))
}

/// ## Summary
/// POST /api/couple-info - Creates or updates the couple record.
///
/// ## Errors
/// Returns HTTP 400 if the first save omits `weddingDate` or a field fails validation.
#[handler]
async fn upsert(req: &mut Request, depot: &mut Depot) -> AppResult<Json<CoupleInfo>> {
    require_admin(depot)?;
    let input: CoupleInfoInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(upsert_couple_info(&mut conn, input).await?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("couple-info").get(get).post(upsert)
}
