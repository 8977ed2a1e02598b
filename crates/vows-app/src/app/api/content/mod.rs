//! Site content managed by the admin and read by the public site.

use salvo::Router;

mod couple_info;
mod livestream;
mod music_tracks;
mod photos;
mod popups;
mod schedule;
mod settings;
mod wedding_party;

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(couple_info::routes())
        .push(settings::routes())
        .push(livestream::routes())
        .push(schedule::routes())
        .push(photos::routes())
        .push(wedding_party::routes())
        .push(music_tracks::routes())
        .push(popups::routes())
}
