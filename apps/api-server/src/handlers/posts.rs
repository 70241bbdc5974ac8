//! Post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{NewPost, Post};
use quill_core::ports::OrderBy;
use quill_shared::dto::CreatePostRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.get_all(OrderBy::newest_first()).await?;

    tracing::debug!(count = posts.len(), "Listed posts");
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = NewPost::new(
        req.title.unwrap_or_default(),
        req.content.unwrap_or_default(),
        req.author,
    )?;

    let id = state.posts.add(&draft).await?;
    let post = Post::from_new(id, draft);

    tracing::info!(post_id = %post.id, author = %post.author, "Post created");
    Ok(HttpResponse::Created().json(post))
}
