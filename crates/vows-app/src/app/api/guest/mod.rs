//! Guest submissions: RSVPs, guestbook messages, and guest photos.
//!
//! Creating any of these is public. Reading RSVPs and moderating messages or
//! photos is admin-only.

use salvo::Router;

mod guest_photos;
mod messages;
mod rsvps;

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(rsvps::routes())
        .push(messages::routes())
        .push(guest_photos::routes())
}
