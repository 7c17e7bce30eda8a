use chrono::Duration;
use sensei_core::model::{TopicId, TopicProgress};
use chrono::{DateTime, Utc};
use sensei_core::time::{fixed_clock, fixed_now};
use storage::repository::{ProgressRepository, Storage, StorageError};
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url, fixed_clock()).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrip_persists_completion_record() {
    let repo = connect("memdb_progress_roundtrip").await;

    assert!(repo.get_progress(TopicId::DragDrop).await.unwrap().is_none());

    let record = TopicProgress::completed_at(TopicId::DragDrop, fixed_now());
    repo.put_progress(TopicId::DragDrop, &record).await.unwrap();

    let fetched = repo.get_progress(TopicId::DragDrop).await.unwrap();
    assert_eq!(fetched, Some(record));
}

#[tokio::test]
async fn sqlite_stamps_rows_with_the_injected_clock() {
    let repo = connect("memdb_progress_updated_at").await;
    let pending = TopicProgress::not_started(TopicId::Forms);
    repo.put_progress(TopicId::Forms, &pending).await.unwrap();

    let (updated_at,): (DateTime<Utc>,) =
        sqlx::query_as("SELECT updated_at FROM progress WHERE key = ?1")
            .bind("forms")
            .fetch_one(repo.pool())
            .await
            .unwrap();
    assert_eq!(updated_at, fixed_now());
}

#[tokio::test]
async fn sqlite_overwrites_and_lists_in_catalog_order() {
    let repo = connect("memdb_progress_list").await;
    let later = fixed_now() + Duration::hours(2);

    for topic in [TopicId::EndToEnd, TopicId::Alerts, TopicId::Locators] {
        repo.put_progress(topic, &TopicProgress::completed_at(topic, fixed_now()))
            .await
            .unwrap();
    }
    repo.put_progress(
        TopicId::Alerts,
        &TopicProgress::completed_at(TopicId::Alerts, later),
    )
    .await
    .unwrap();

    let all = repo.list_progress().await.unwrap();
    let ids: Vec<_> = all.iter().map(TopicProgress::id).collect();
    assert_eq!(ids, [TopicId::Locators, TopicId::Alerts, TopicId::EndToEnd]);
    assert_eq!(all[1].last_attempt(), Some(later));
}

#[tokio::test]
async fn sqlite_rejects_mismatched_key_without_writing() {
    let repo = connect("memdb_progress_mismatch").await;
    let record = TopicProgress::completed_at(TopicId::Hover, fixed_now());

    let err = repo
        .put_progress(TopicId::Slider, &record)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Validation(_)));
    assert!(repo.list_progress().await.unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_surfaces_corrupt_values() {
    let repo = connect("memdb_progress_corrupt").await;
    sqlx::query("INSERT INTO progress (key, value, updated_at) VALUES (?1, ?2, ?3)")
        .bind("waits")
        .bind(r#"{"id":"waits","completed":"soon"}"#)
        .bind(fixed_now())
        .execute(repo.pool())
        .await
        .unwrap();

    let err = repo.get_progress(TopicId::Waits).await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
    assert!(repo.list_progress().await.is_err());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = connect("memdb_progress_migrate_twice").await;
    repo.migrate().await.expect("second migrate");
    let storage = Storage::sqlite(
        "sqlite:file:memdb_progress_migrate_twice?mode=memory&cache=shared",
        fixed_clock(),
    )
        .await
        .expect("storage");
    assert!(storage.progress.list_progress().await.unwrap().is_empty());
}
