//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use quill_infra::DatabaseConfig;
use quill_infra::auth::DEFAULT_USERNAME;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub credentials: CredentialConfig,
}

/// Where login credentials are checked against.
#[derive(Debug, Clone)]
pub struct CredentialConfig {
    pub username: String,
    /// Argon2 PHC string. Without one the built-in password applies.
    pub password_hash: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: parse_var("DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections),
                min_connections: parse_var("DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.min_connections),
                ..defaults
            }
        });

        let credentials = CredentialConfig {
            username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string()),
            password_hash: env::var("ADMIN_PASSWORD_HASH")
                .ok()
                .filter(|h| !h.is_empty()),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            credentials,
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
