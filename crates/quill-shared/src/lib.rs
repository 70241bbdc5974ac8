//! # Quill Shared
//!
//! Request and response types that make up the HTTP wire contract.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
