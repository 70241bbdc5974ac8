//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;


use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, json_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health", web::get().to(health::health_check))
            .route("/login", web::post().to(auth::login))
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post)),
            ),
    )
    .default_service(web::to(not_found));
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("No such route".to_string()))
}
