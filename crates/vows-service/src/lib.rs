//! Validation, content operations, and authentication on top of `vows-db`.

pub mod auth;
pub mod content;
pub mod dashboard;
pub mod error;
pub mod validate;
