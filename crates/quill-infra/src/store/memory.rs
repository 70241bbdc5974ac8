//! In-memory post store - used when no database is configured.

use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::RepoError;
use quill_core::domain::{NewPost, Post, PostId};
use quill_core::ports::{Direction, OrderBy, PostField, PostStore};

/// In-memory post store backed by a `Vec` behind an async RwLock.
///
/// Posts are kept in insertion order. Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    fn compare(a: &Post, b: &Post, field: PostField) -> Ordering {
        match field {
            PostField::PublishDate => a.publish_date.cmp(&b.publish_date),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn add(&self, post: &NewPost) -> Result<PostId, RepoError> {
        let id = Uuid::new_v4().simple().to_string();

        let mut posts = self.posts.write().await;
        posts.push(Post::from_new(id.clone(), post.clone()));

        tracing::debug!(post_id = %id, total = posts.len(), "Post stored in memory");
        Ok(id)
    }

    async fn get_all(&self, order_by: OrderBy) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;

        // Ties keep insertion order for ascending and reverse it for
        // descending, so equal timestamps still list newest insert first.
        let mut result: Vec<Post> = match order_by.direction {
            Direction::Ascending => posts.iter().cloned().collect(),
            Direction::Descending => posts.iter().rev().cloned().collect(),
        };
        drop(posts);

        result.sort_by(|a, b| {
            let ord = Self::compare(a, b, order_by.field);
            match order_by.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        });

        Ok(result)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
