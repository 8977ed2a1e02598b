//! Vows wedding-site API - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `vows_test::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    pub use vows_core::*;
    pub use vows_service::*;

    pub mod db {
        pub use vows_db::db::*;

        pub mod connection {
            pub use vows_app::db_handler::DbProviderHandler;
            pub use vows_db::db::connection::*;
        }
    }

    pub mod model {
        pub use vows_db::model::*;
    }

    pub mod middleware {
        pub use vows_app::middleware::*;
    }

    pub mod config {
        pub use vows_app::config::ConfigHandler;
        pub use vows_core::config::*;
    }
}

pub mod app {
    pub use vows_app::*;

    pub mod api {
        pub use vows_app::app::api::*;
    }
}
