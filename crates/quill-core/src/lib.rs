//! # Quill Core
//!
//! The domain layer of the Quill blog API.
//! Posts, the store and credential ports, and the errors they share.
//! No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
