//! Admin authentication.
//!
//! ## Module Organization
//!
//! - `account`: login, password change, profile update, bootstrap admin
//! - `depot`: helpers for reading the authenticated admin from a Salvo depot
//! - `password`: password hashing and verification with Argon2
//! - `session`: opaque session tokens and their server-side records

pub mod account;
pub mod depot;
pub mod password;
pub mod session;

pub use depot::{depot_keys, get_session_id_from_depot, get_user_from_depot, is_authenticated};
