//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{DbConn, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use quill_core::RepoError;
use quill_core::domain::{NewPost, Post, PostId};
use quill_core::ports::{Direction, OrderBy, PostField, PostStore};

use super::entity::post::{self, Entity as PostEntity};

/// Post store over the `posts` table.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        self.db
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match &err {
        DbErr::Conn(_) => RepoError::Connection(err.to_string()),
        DbErr::ConnectionAcquire(_) => RepoError::Unavailable(err.to_string()),
        _ => {
            let msg = err.to_string();
            if msg.contains("permission denied") {
                RepoError::Permission(msg)
            } else {
                RepoError::Query(msg)
            }
        }
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn add(&self, post: &NewPost) -> Result<PostId, RepoError> {
        let id = Uuid::new_v4().simple().to_string();

        PostEntity::insert(post::ActiveModel::from_new(&id, post))
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = %id, "Post inserted");
        Ok(id)
    }

    async fn get_all(&self, order_by: OrderBy) -> Result<Vec<Post>, RepoError> {
        let column = match order_by.field {
            PostField::PublishDate => post::Column::PublishDate,
        };

        let query = PostEntity::find();
        let query = match order_by.direction {
            Direction::Ascending => query.order_by_asc(column),
            Direction::Descending => query.order_by_desc(column),
        };

        let rows = query.all(&self.db).await.map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
