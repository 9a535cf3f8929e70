//! Application configuration modules

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Top-level application configuration
///
/// Aggregates the per-concern configuration sections. Each section can be
/// hydrated from environment variables on its own; `AppConfig::from_env`
/// hydrates all of them at once.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Runtime environment (development/staging/production)
    pub environment: Environment,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Database connection settings
    pub database: DatabaseConfig,

    /// JWT verification settings
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}
