use salvo::writing::Json;
use salvo::{Depot, Router, handler};

use vows_service::dashboard::{DashboardSummary, summary};

use crate::app::api::extract::require_admin;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

#[handler]
async fn get_summary(depot: &mut Depot) -> AppResult<Json<DashboardSummary>> {
    require_admin(depot)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(summary(&mut conn).await?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("dashboard/summary").get(get_summary)
}
