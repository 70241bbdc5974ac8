//! Credential verifier implementations.

#[cfg(feature = "auth")]
mod password;
mod static_credentials;

#[cfg(feature = "auth")]
pub use password::Argon2CredentialVerifier;
pub use static_credentials::{DEFAULT_PASSWORD, DEFAULT_USERNAME, StaticCredentialVerifier};
