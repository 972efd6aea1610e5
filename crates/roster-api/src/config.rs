//! # Configuration
//!
//! An explicit configuration value object built from environment variables
//! (with `.env` support loaded in `main`). No ambient globals: the config
//! is constructed once and injected into the pool bootstrap and server.

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Application configuration.
///
/// | Variable      | Default     |
/// |---------------|-------------|
/// | `DB_HOST`     | `localhost` |
/// | `DB_PORT`     | `5430`      |
/// | `DB_USER`     | `postgres`  |
/// | `DB_PASSWORD` | *(empty)*   |
/// | `DB_NAME`     | `roster`    |
/// | `PORT`        | `8080`      |
///
/// Custom `Debug` redacts the password to prevent credential leakage in logs.
#[derive(Clone)]
pub struct Config {
    /// Database host.
    pub db_host: String,
    /// Database port.
    pub db_port: u16,
    /// Database user.
    pub db_user: String,
    /// Database password.
    pub db_password: String,
    /// Database name.
    pub db_name: String,
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Config {
    /// Build the configuration from the environment, applying defaults for
    /// absent or unparseable values.
    pub fn from_env() -> Self {
        Self {
            db_host: env_or("DB_HOST", "localhost"),
            db_port: parse_port(std::env::var("DB_PORT").ok(), 5430),
            db_user: env_or("DB_USER", "postgres"),
            db_password: env_or("DB_PASSWORD", ""),
            db_name: env_or("DB_NAME", "roster"),
            port: parse_port(std::env::var("PORT").ok(), 8080),
        }
    }

    /// Connection options for the configured database.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .ssl_mode(PgSslMode::Disable)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &"[REDACTED]")
            .field("db_name", &self.db_name)
            .field("port", &self.port)
            .finish()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a port value, falling back to the default on absence or failure.
fn parse_port(raw: Option<String>, default: u16) -> u16 {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %value, default, "unparseable port value, using default");
            default
        }),
        None => default,
    }
}
