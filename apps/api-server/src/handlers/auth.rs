//! Authentication handlers.

use actix_web::{HttpResponse, web};

use quill_core::ports::Credentials;
use quill_shared::ApiResponse;
use quill_shared::dto::LoginRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/login
///
/// Checks the pair and reports the outcome. No token or session is issued.
/// The body is read leniently: any payload without usable string fields is
/// a mismatch, never a 400.
pub async fn login(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let req = LoginRequest::from_slice(&body);
    let credentials = Credentials::new(
        req.username.unwrap_or_default(),
        req.password.unwrap_or_default(),
    );

    let valid = state
        .credentials
        .verify(&credentials)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        tracing::warn!(username = %credentials.username, "Login rejected");
        return Ok(
            HttpResponse::Unauthorized().json(ApiResponse::failure("Invalid credentials"))
        );
    }

    tracing::info!(username = %credentials.username, "Login successful");
    Ok(HttpResponse::Ok().json(ApiResponse::message("Login successful")))
}
