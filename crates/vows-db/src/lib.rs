//! Persistence layer: schema, pooled connections, row models, and typed queries.

pub mod db;
pub mod error;
pub mod model;
