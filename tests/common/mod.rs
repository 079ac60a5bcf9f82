#![allow(dead_code)]

use course_registry::server;
use course_registry::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

/// Fresh in-memory database with migrations applied.
///
/// A single never-recycled connection keeps the in-memory database alive for
/// the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    server::migrate(&pool).await.unwrap();

    pool
}

pub async fn create_test_course(
    pool: &SqlitePool,
    title: &str,
    start_date: &str,
    end_date: &str,
    lectures: i64,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO courses (title, start_date, end_date, lectures) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(title)
    .bind(start_date)
    .bind(end_date)
    .bind(lectures)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Seeds the six courses used by the filtering scenario.
///
/// Ids 2, 3 and 6 are titled `course` and fall inside 2017-01-01..2020-01-01;
/// id 5 has the same title but starts in 2010.
pub async fn seed_filter_scenario(pool: &SqlitePool) {
    create_test_course(pool, "course1", "2018-09-11", "2019-07-12", 17).await;
    create_test_course(pool, "course", "2018-01-17", "2018-05-11", 14).await;
    create_test_course(pool, "course", "2017-02-21", "2018-10-22", 6).await;
    create_test_course(pool, "course2", "2018-09-11", "2019-07-12", 7).await;
    create_test_course(pool, "course", "2010-01-17", "2018-05-11", 34).await;
    create_test_course(pool, "course", "2017-02-21", "2019-11-22", 16).await;
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}
