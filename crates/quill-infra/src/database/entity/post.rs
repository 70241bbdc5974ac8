//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::NewPost;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub publish_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            publish_date: model.publish_date.into(),
        }
    }
}

impl ActiveModel {
    /// Build the row for a new post under a freshly assigned id.
    pub fn from_new(id: &str, post: &NewPost) -> Self {
        Self {
            id: Set(id.to_string()),
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            author: Set(post.author.clone()),
            publish_date: Set(post.publish_date.into()),
        }
    }
}
