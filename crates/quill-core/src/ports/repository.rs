use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Field a post listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    PublishDate,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordering applied by [`PostStore::get_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: PostField,
    pub direction: Direction,
}

impl OrderBy {
    /// Most recently published first.
    pub fn newest_first() -> Self {
        Self {
            field: PostField::PublishDate,
            direction: Direction::Descending,
        }
    }
}

/// Post store - the `posts` collection of the document store.
///
/// Every call is a network round-trip for real backends and may fail with
/// any [`RepoError`].
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post. The store assigns and returns its id.
    async fn add(&self, post: &NewPost) -> Result<PostId, RepoError>;

    /// Fetch every post in the given order.
    async fn get_all(&self, order_by: OrderBy) -> Result<Vec<Post>, RepoError>;

    /// Short backend name, reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
