pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod util;
