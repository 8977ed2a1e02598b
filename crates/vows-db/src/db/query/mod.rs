//! Typed queries, one module per table.
//!
//! Each module exposes boxed query builders (`all`, `by_id`, list filters)
//! that are unit tested through `debug_query`, plus async functions that run
//! them against a pooled connection and return `diesel::QueryResult`.

pub mod couple_info;
pub mod guest_photo;
pub mod livestream;
pub mod message;
pub mod music;
pub mod party;
pub mod photo;
pub mod popup;
pub mod rsvp;
pub mod schedule;
pub mod session;
pub mod site_settings;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;
