use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vows_app::app::api::routes;
use vows_app::config::ConfigHandler;
use vows_app::db_handler::DbProviderHandler;
use vows_core::config::load_config;
use vows_db::db::DbProvider;
use vows_db::db::connection::create_pool;
use vows_db::db::migrate::run_migrations;
use vows_service::auth::{account::ensure_bootstrap_admin, session::purge_expired};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Vows wedding-site API");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    if config.database.run_migrations {
        run_migrations(&config.database.url).await?;
    }

    let pool = create_pool(
        &config.database.url,
        u32::from(config.database.max_connections),
    )
    .await?;

    {
        let mut conn = pool.get_connection().await?;
        ensure_bootstrap_admin(&mut conn, config.auth.bootstrap_admin.as_ref()).await?;
        purge_expired(&mut conn).await?;
    }

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(DbProviderHandler::new(pool))
        .hoop(ConfigHandler::new(config.clone()))
        .push(routes());

    tracing::info!(origin = %config.server.origin(), "Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
