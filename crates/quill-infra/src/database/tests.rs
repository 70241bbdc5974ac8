use chrono::{Duration, Utc};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Transaction};

use quill_core::RepoError;
use quill_core::domain::NewPost;
use quill_core::ports::{OrderBy, PostStore};

use crate::database::PostgresPostStore;
use crate::database::entity::post;

fn row(id: &str, title: &str, offset_mins: i64) -> post::Model {
    let at = Utc::now() + Duration::minutes(offset_mins);
    post::Model {
        id: id.to_owned(),
        title: title.to_owned(),
        content: "Content".to_owned(),
        author: "Admin".to_owned(),
        publish_date: at.into(),
    }
}

#[tokio::test]
async fn test_get_all_orders_by_publish_date_desc() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row("b", "Newer", 0), row("a", "Older", -5)]])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let posts = store.get_all(OrderBy::newest_first()).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "b");
    assert_eq!(posts[0].title, "Newer");
    assert_eq!(posts[1].id, "a");

    assert_eq!(
        store.into_connection().into_transaction_log(),
        [Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "posts"."id", "posts"."title", "posts"."content", "posts"."author", "posts"."publish_date" FROM "posts" ORDER BY "posts"."publish_date" DESC"#,
            []
        )]
    );
}

#[tokio::test]
async fn test_get_all_empty_table() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let posts = store.get_all(OrderBy::newest_first()).await.unwrap();

    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_add_returns_generated_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let draft = NewPost::new("Title".into(), "Body".into(), None).unwrap();

    let id = store.add(&draft).await.unwrap();
    assert_eq!(id.len(), 32);
}

#[tokio::test]
async fn test_query_failure_maps_to_repo_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("relation \"posts\" does not exist".into())])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let result = store.get_all(OrderBy::newest_first()).await;

    assert!(matches!(result, Err(RepoError::Query(_))));
}
