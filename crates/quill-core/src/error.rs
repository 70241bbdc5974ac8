//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
