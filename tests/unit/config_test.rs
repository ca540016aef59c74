//! Unit tests for configuration loading
//!
//! Covers defaults, semantic validation, and environment variable
//! precedence. Tests that touch process environment run serially.

use serial_test::serial;
use std::env;

use credo_auth::config::{self, AppConfig, DatabaseConfig, ServerConfig, Validate};

/// Clean up environment variables with the CREDO_AUTH prefix
fn clean_env_vars() {
    let keys: Vec<String> = env::vars()
        .filter(|(k, _)| k.starts_with("CREDO_AUTH"))
        .map(|(k, _)| k)
        .collect();

    for key in keys {
        unsafe { env::remove_var(&key) };
    }
}

#[test]
#[serial]
fn load_defaults_without_files_or_env() {
    clean_env_vars();
    unsafe { env::remove_var("APP_ENV") };

    let config = config::load().expect("Default configuration should load");

    assert_eq!(config.app.name, "credo-auth");
    assert_eq!(config.app.environment, "development");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.auth.token_expiration, 3600);
    assert_eq!(config.auth.argon2.memory_cost, 65536);
}

#[test]
#[serial]
fn environment_variables_override_defaults() {
    clean_env_vars();
    unsafe {
        env::set_var("CREDO_AUTH__SERVER__PORT", "9090");
        env::set_var("CREDO_AUTH__AUTH__TOKEN_EXPIRATION", "120");
    }

    let config = config::load().expect("Configuration should load");

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.auth.token_expiration, 120);

    clean_env_vars();
}

#[test]
fn default_app_config_is_valid() {
    assert!(AppConfig::default().validate().is_ok());
}

#[test]
fn zero_port_is_rejected() {
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn zero_workers_are_rejected() {
    let config = ServerConfig {
        workers: 0,
        ..ServerConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn empty_database_url_is_rejected() {
    let config = DatabaseConfig {
        url: "".to_string(),
        ..DatabaseConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn min_connections_cannot_exceed_max() {
    let config = DatabaseConfig {
        min_connections: 20,
        max_connections: 10,
        ..DatabaseConfig::default()
    };

    assert!(config.validate().is_err());
}
