//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency.
//! Run with:
//!
//! ```bash
//! cargo test -p course-store --test postgres_integration -- --test-threads=1
//! ```

use std::sync::Arc;

use course_store::{CourseId, CourseStore, DatabaseConfig, NewCourse, PostgresCourseStore};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    config: DatabaseConfig,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let config = DatabaseConfig {
                host: host.to_string(),
                port,
                database: "postgres".to_string(),
                ..DatabaseConfig::default()
            };

            // Schema creation goes through the store itself
            let store = PostgresCourseStore::connect(&config).await.unwrap();
            store.ensure_schema().await.unwrap();
            store.pool().close().await;

            Arc::new(ContainerInfo { container, config })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and an emptied table
async fn get_test_store() -> PostgresCourseStore {
    let info = get_container_info().await;
    let store = PostgresCourseStore::connect(&info.config).await.unwrap();

    sqlx::query("TRUNCATE TABLE course RESTART IDENTITY")
        .execute(store.pool())
        .await
        .unwrap();

    store
}

fn new_course(title: &str, credits: i32) -> NewCourse {
    NewCourse::new(title, "Dr. Lovelace", credits).unwrap()
}

#[tokio::test]
async fn insert_returns_generated_id() {
    let store = get_test_store().await;

    let course = store.insert(new_course("Analytical Engines", 4)).await.unwrap();

    assert!(course.id.as_i32() > 0);
    assert_eq!(course.title, "Analytical Engines");
    assert_eq!(course.instructor, "Dr. Lovelace");
    assert_eq!(course.credits, 4);
}

#[tokio::test]
async fn insert_never_reuses_ids() {
    let store = get_test_store().await;

    let first = store.insert(new_course("First", 1)).await.unwrap();
    let second = store.insert(new_course("Second", 2)).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn get_round_trips_inserted_course() {
    let store = get_test_store().await;
    let created = store.insert(new_course("Looms", 3)).await.unwrap();

    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn get_missing_course_returns_none() {
    let store = get_test_store().await;

    let fetched = store.get(CourseId::new(999_999)).await.unwrap();
    assert!(fetched.is_none());
}

#[tokio::test]
async fn list_returns_all_courses_in_id_order() {
    let store = get_test_store().await;
    let created = vec![
        store.insert(new_course("A", 1)).await.unwrap(),
        store.insert(new_course("B", 2)).await.unwrap(),
        store.insert(new_course("C", 3)).await.unwrap(),
    ];

    let listed = store.list().await.unwrap();
    assert_eq!(listed, created);
}

#[tokio::test]
async fn list_empty_table() {
    let store = get_test_store().await;
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let store = get_test_store().await;
    store.insert(new_course("Kept", 2)).await.unwrap();

    store.ensure_schema().await.unwrap();

    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn database_rejects_overlong_title() {
    let store = get_test_store().await;

    let result = sqlx::query("INSERT INTO course (title, instructor, credits) VALUES ($1, $2, $3)")
        .bind("x".repeat(101))
        .bind("Dr. Lovelace")
        .bind(1)
        .execute(store.pool())
        .await;

    assert!(result.is_err());
}
