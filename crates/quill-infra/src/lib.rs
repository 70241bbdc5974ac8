//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory post store and static credentials only
//! - `postgres` - PostgreSQL post store via SeaORM
//! - `auth` - Argon2 credential verification

pub mod auth;
pub mod database;
pub mod store;

pub use auth::StaticCredentialVerifier;
pub use database::DatabaseConfig;
pub use store::InMemoryPostStore;

#[cfg(feature = "auth")]
pub use auth::Argon2CredentialVerifier;

#[cfg(feature = "postgres")]
pub use database::PostgresPostStore;
