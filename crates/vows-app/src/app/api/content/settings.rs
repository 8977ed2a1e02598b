use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::query::site_settings;
use vows_db::model::settings::SiteSettings;
use vows_service::content::singleton::upsert_site_settings;
use vows_service::validate::singleton::SiteSettingsInput;

use crate::app::api::extract::{body, require_admin};
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/settings - Returns the site settings, or `null` before the first save.
#[handler]
async fn get(depot: &mut Depot) -> AppResult<Json<Option<SiteSettings>>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(site_settings::get(&mut conn).await?))
}

/// ## Summary
/// POST /api/settings - Creates or updates the site settings.
///
/// ## Errors
/// Returns HTTP 400 if a field fails validation, including a playlist entry without a URL.
#[handler]
async fn upsert(req: &mut Request, depot: &mut Depot) -> AppResult<Json<SiteSettings>> {
    require_admin(depot)?;
    let input: SiteSettingsInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(upsert_site_settings(&mut conn, input).await?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("settings").get(get).post(upsert)
}
