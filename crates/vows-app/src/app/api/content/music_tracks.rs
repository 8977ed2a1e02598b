use salvo::writing::Json;
use salvo::{Depot, Request, Router, handler};

use vows_db::db::query::music::{self, MusicTrackFilter};
use vows_db::model::music::MusicTrack;
use vows_service::content::collection::{create_music_track, get_music_track, update_music_track};
use vows_service::validate::content::{CreateMusicTrack, PatchMusicTrack, ReorderInput};

use crate::app::api::extract::{body, path_id, query_flag, require_admin};
use crate::app::api::success;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// GET /api/music-tracks - Lists the playlist; `?activeOnly=true` hides disabled tracks.
#[handler]
async fn list(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<MusicTrack>>> {
    let filter = MusicTrackFilter {
        active_only: query_flag(req, "activeOnly")?.unwrap_or(false),
    };
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(music::list(&mut conn, filter).await?))
}

#[handler]
async fn get(req: &mut Request, depot: &mut Depot) -> AppResult<Json<MusicTrack>> {
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(get_music_track(&mut conn, id).await?))
}

#[handler]
async fn create(req: &mut Request, depot: &mut Depot) -> AppResult<Json<MusicTrack>> {
    require_admin(depot)?;
    let input: CreateMusicTrack = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(create_music_track(&mut conn, input).await?))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<MusicTrack>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let input: PatchMusicTrack = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(Json(update_music_track(&mut conn, id, input).await?))
}

#[handler]
async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<serde_json::Value>> {
    require_admin(depot)?;
    let id = path_id(req)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    music::delete(&mut conn, id).await?;
    Ok(success())
}

#[handler]
async fn reorder(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<MusicTrack>>> {
    require_admin(depot)?;
    let input: ReorderInput = body(req).await?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    music::reorder(&mut conn, &input.ids).await?;
    Ok(Json(music::list(&mut conn, MusicTrackFilter::default()).await?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("music-tracks")
        .get(list)
        .post(create)
        .push(Router::with_path("reorder").post(reorder))
        .push(Router::with_path("{id}").get(get).patch(update).delete(delete))
}
