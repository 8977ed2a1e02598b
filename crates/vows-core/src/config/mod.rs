use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Name of the cookie carrying the session token.
    pub cookie_name: String,
    /// Sets the `Secure` attribute on the session cookie.
    pub cookie_secure: bool,
    /// Lifetime of a session from login, in hours.
    pub session_ttl_hours: u32,
    /// Admin account created at startup when no admin exists yet.
    pub bootstrap_admin: Option<BootstrapAdminConfig>,
}

// Hand-written so the bootstrap password never reaches the logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("cookie_name", &self.cookie_name)
            .field("cookie_secure", &self.cookie_secure)
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field(
                "bootstrap_admin",
                &self.bootstrap_admin.as_ref().map(|a| &a.username),
            )
            .finish()
    }
}

#[derive(Clone, Deserialize)]
pub struct BootstrapAdminConfig {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            format!("http://{}", self.bind_addr())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl AuthConfig {
    /// ## Summary
    /// Session lifetime as a `chrono` duration.
    #[must_use]
    pub fn session_ttl(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::hours(i64::from(self.session_ttl_hours))
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// Environment keys use the `VOWS_` prefix and `__` between sections,
    /// e.g. `VOWS_DATABASE__URL` or `VOWS_AUTH__SESSION_TTL_HOURS`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("database.max_connections", 4)?
            .set_default("database.run_migrations", true)?
            .set_default("logging.level", "debug")?
            .set_default("auth.cookie_name", "vows_session")?
            .set_default("auth.cookie_secure", false)?
            .set_default("auth.session_ttl_hours", 168)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file and process environment
            .add_source(
                config::Environment::with_prefix("VOWS")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => tracing::trace!("No .env file found"),
        Err(err) => tracing::warn!(error = %err, "Failed to read .env file"),
    }

    Settings::load()
}
