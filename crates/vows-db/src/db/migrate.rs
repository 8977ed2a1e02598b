//! Embedded schema migrations.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// ## Summary
/// Applies all pending migrations to the database at `database_url`.
///
/// Migrations run on a blocking connection inside `spawn_blocking`.
///
/// ## Errors
/// Returns an error if the connection cannot be established or a migration fails.
#[tracing::instrument(skip(database_url))]
pub async fn run_migrations(database_url: &str) -> anyhow::Result<()> {
    let url = database_url.to_string();

    let applied = tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url)?;
        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;
        Ok::<_, anyhow::Error>(versions.len())
    })
    .await??;

    tracing::info!(applied, "Database migrations up to date");

    Ok(())
}
