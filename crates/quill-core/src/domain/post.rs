use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Author recorded when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Opaque identifier assigned by the post store.
pub type PostId = String;

/// Post entity - a blog article as stored and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

impl Post {
    /// Attach a store-assigned id to a validated draft.
    pub fn from_new(id: PostId, post: NewPost) -> Self {
        Self {
            id,
            title: post.title,
            content: post.content,
            author: post.author,
            publish_date: post.publish_date,
        }
    }
}

/// A validated post that has not been persisted yet.
///
/// Title and content are guaranteed non-empty, the author is resolved and
/// the publish date is stamped with the server clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

impl NewPost {
    /// Validate caller input and stamp it with the current time.
    pub fn new(
        title: String,
        content: String,
        author: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::at(title, content, author, Utc::now())
    }

    /// Same as [`NewPost::new`] with an explicit publish date.
    pub fn at(
        title: String,
        content: String,
        author: Option<String>,
        publish_date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if title.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(
                "Title and content are required".to_string(),
            ));
        }

        Ok(Self {
            title,
            content,
            author: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            publish_date,
        })
    }
}
