//! Row, insert, and changeset structs for every table.
//!
//! Row structs serialize to the camelCase JSON the API returns. `Changes`
//! structs use `Option<Option<T>>` for nullable columns: `None` leaves the
//! column alone, `Some(None)` clears it.

pub mod couple;
pub mod guest_photo;
pub mod livestream;
pub mod message;
pub mod music;
pub mod party;
pub mod photo;
pub mod popup;
pub mod rsvp;
pub mod schedule;
pub mod settings;
pub mod user;
