pub mod app;
pub mod auth;
pub mod database;
pub mod security;
pub mod server;

pub use app::{ApiConfig, AppConfig, AppMetadata};
pub use auth::{Argon2Config, AuthConfig};
pub use database::DatabaseConfig;
pub use security::{CorsConfig, SecurityConfig};
pub use server::ServerConfig;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration validation failed: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

/// Semantic validation applied after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
