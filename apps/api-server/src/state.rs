//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{CredentialVerifier, PostStore};
use quill_infra::auth::DEFAULT_PASSWORD;
use quill_infra::{InMemoryPostStore, StaticCredentialVerifier};

use crate::config::{AppConfig, CredentialConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostStore>, credentials: Arc<dyn CredentialVerifier>) -> Self {
        Self { posts, credentials }
    }

    /// Build the application state with the implementations the config asks for.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let posts = post_store(config).await?;
        let credentials = credential_verifier(&config.credentials)?;

        tracing::info!(store = posts.backend(), "Application state initialized");

        Ok(Self::new(posts, credentials))
    }
}

#[cfg(feature = "postgres")]
async fn post_store(config: &AppConfig) -> anyhow::Result<Arc<dyn PostStore>> {
    use anyhow::Context;
    use quill_infra::PostgresPostStore;

    match &config.database {
        Some(db_config) => {
            let conn = quill_infra::database::connect(db_config)
                .await
                .context("failed to connect to the post database")?;
            Ok(Arc::new(PostgresPostStore::new(conn)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Running with in-memory post store.");
            Ok(Arc::new(InMemoryPostStore::new()))
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn post_store(config: &AppConfig) -> anyhow::Result<Arc<dyn PostStore>> {
    if config.database.is_some() {
        tracing::warn!("DATABASE_URL ignored - built without postgres feature");
    }
    tracing::info!("Using in-memory post store");
    Ok(Arc::new(InMemoryPostStore::new()))
}

#[cfg(feature = "auth")]
fn credential_verifier(config: &CredentialConfig) -> anyhow::Result<Arc<dyn CredentialVerifier>> {
    use anyhow::Context;
    use quill_infra::Argon2CredentialVerifier;

    if let Some(hash) = &config.password_hash {
        let verifier = Argon2CredentialVerifier::new(config.username.clone(), hash.clone())
            .context("ADMIN_PASSWORD_HASH is not a valid Argon2 hash")?;
        tracing::info!("Login checks use Argon2 password hash");
        return Ok(Arc::new(verifier));
    }

    Ok(static_verifier(config))
}

#[cfg(not(feature = "auth"))]
fn credential_verifier(config: &CredentialConfig) -> anyhow::Result<Arc<dyn CredentialVerifier>> {
    if config.password_hash.is_some() {
        tracing::warn!("ADMIN_PASSWORD_HASH ignored - built without auth feature");
    }
    Ok(static_verifier(config))
}

fn static_verifier(config: &CredentialConfig) -> Arc<dyn CredentialVerifier> {
    tracing::warn!("Login checks use the built-in password");
    Arc::new(StaticCredentialVerifier::new(
        config.username.clone(),
        DEFAULT_PASSWORD,
    ))
}
