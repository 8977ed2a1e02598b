use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::enums::PhotoCategory;
use vows_db::db::query::photo::{self, PhotoFilter};
use vows_db::model::photo::Photo;
use vows_service::content::collection::{create_photo, get_photo, update_photo};
use vows_service::validate::content::{CreatePhoto, PatchPhoto, ReorderInput};

use crate::app::api::extract::{body, path_id, require_admin};
use crate::app::api::success;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

fn filter_from(req: &Request) -> PhotoFilter {
    PhotoFilter {
        category: req
            .query::<String>("category")
            .filter(|value| !value.is_empty())
            .map(PhotoCategory::from),
    }
}

/// ## Summary
/// GET /api/photos - Lists photos by `displayOrder`, optionally narrowed to one `?category=`.
#[handler]
async fn list(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<Photo>>> {
    let filter = filter_from(req);
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(photo::list(&mut conn, &filter).await?))
}

#[handler]
async fn get(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Photo>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(get_photo(&mut conn, id).await?))
}

#[handler]
async fn create(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Photo>> {
    require_admin(depot)?;
    let input: CreatePhoto = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(create_photo(&mut conn, input).await?))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Photo>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let input: PatchPhoto = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(update_photo(&mut conn, id, input).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<serde_json::Value>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    photo::delete(&mut conn, id).await?;
    Ok(success())
}

/// ## Summary
/// POST /api/photos/reorder - Renumbers photos in the given order and returns the new list.
#[handler]
async fn reorder(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<Photo>>> {
    require_admin(depot)?;
    let input: ReorderInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    photo::reorder(&mut conn, &input.ids).await?;
    Ok(Json(photo::list(&mut conn, &PhotoFilter::default()).await?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("photos")
        .get(list)
        .post(create)
        .push(Router::with_path("reorder").post(reorder))
        .push(Router::with_path("{id}").get(get).patch(update).delete(delete))
}
