//! Integration tests for the PostgreSQL event store
//!
//! These tests require a database connection.
//! They share one table, so run them serially:
//! DATABASE_URL=... cargo test --test integration_store -- --ignored --test-threads=1

use chrono::{TimeZone, Utc};
use event_api::store::row::decode_event;
use event_api::{db, EventInput, EventRepository, PgEventStore, StoreError};

mod common;

fn standup() -> EventInput {
    EventInput {
        title: "Standup".to_string(),
        description: "daily sync".to_string(),
        location: "Room A".to_string(),
        start_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap(),
        created_by: "alice".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_schema_check() {
    let pool = common::setup_test_db().await;

    db::verify_connection(&pool).await.unwrap();
    assert!(db::check_schema(&pool).await.unwrap());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_get() {
    let store = PgEventStore::new(common::setup_test_db().await);

    let created = store.create(standup()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.to_input(), standup());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_and_empty_list() {
    let store = PgEventStore::new(common::setup_test_db().await);
    assert!(store.list().await.unwrap().is_empty());

    store.create(standup()).await.unwrap();
    store.create(standup()).await.unwrap();

    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_preserves_created_at() {
    let store = PgEventStore::new(common::setup_test_db().await);
    let created = store.create(standup()).await.unwrap();

    let updated = store
        .update(
            created.id,
            EventInput {
                title: "Standup (moved)".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.description, "");
    assert_eq!(updated.start_time.timestamp(), 0);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_writes_every_field_in_place() {
    let store = PgEventStore::new(common::setup_test_db().await);
    let created = store.create(standup()).await.unwrap();

    let replacement = EventInput {
        title: "Planning".to_string(),
        description: "quarterly roadmap".to_string(),
        location: "Room B".to_string(),
        start_time: Utc.with_ymd_and_hms(2024, 2, 3, 13, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 2, 3, 15, 30, 0).unwrap(),
        created_by: "bob".to_string(),
    };

    let updated = store.update(created.id, replacement.clone()).await.unwrap();
    assert_eq!(updated.to_input(), replacement);

    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched.to_input(), replacement);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_decode_rejects_short_row() {
    let pool = common::setup_test_db().await;

    let row = sqlx::query("SELECT 1::bigint, 'a'::text")
        .fetch_one(&pool)
        .await
        .unwrap();

    let err = decode_event(&row).unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_decode_rejects_mistyped_row() {
    let pool = common::setup_test_db().await;

    let row = sqlx::query(
        r#"
        SELECT 'one'::text, 'title'::text, 'description'::text, 'location'::text,
               NOW(), NOW(), 'alice'::text, NOW(), NOW()
        "#,
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let err = decode_event(&row).unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_missing_ids_are_not_found() {
    let store = PgEventStore::new(common::setup_test_db().await);

    assert!(store.get(424242).await.unwrap_err().is_not_found());
    assert!(store.update(424242, standup()).await.unwrap_err().is_not_found());
    assert!(store.delete(424242).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_removes_one() {
    let store = PgEventStore::new(common::setup_test_db().await);
    let first = store.create(standup()).await.unwrap();
    store.create(standup()).await.unwrap();

    store.delete(first.id).await.unwrap();

    assert!(store.get(first.id).await.unwrap_err().is_not_found());
    assert_eq!(store.list().await.unwrap().len(), 1);
}
