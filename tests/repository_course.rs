mod common;

use chrono::NaiveDate;
use course_registry::domain::entities::{CoursePatch, NewCourse};
use course_registry::domain::repositories::CourseRepository;
use course_registry::infrastructure::persistence::SqliteCourseRepository;
use std::sync::Arc;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn test_create_course() {
    let pool = common::test_pool().await;
    let repo = SqliteCourseRepository::new(Arc::new(pool));

    let course = repo
        .create(NewCourse {
            title: "course1".to_string(),
            start_date: date("2018-09-11"),
            end_date: date("2019-07-12"),
            lectures: 7,
        })
        .await
        .unwrap();

    assert_eq!(course.id, 1);
    assert_eq!(course.title, "course1");
    assert_eq!(course.start_date, date("2018-09-11"));
    assert_eq!(course.end_date, date("2019-07-12"));
    assert_eq!(course.lectures, 7);
}

#[tokio::test]
async fn test_dates_stored_as_plain_text() {
    let pool = common::test_pool().await;
    let repo = SqliteCourseRepository::new(Arc::new(pool.clone()));

    let course = repo
        .create(NewCourse {
            title: "course1".to_string(),
            start_date: date("2018-09-11"),
            end_date: date("2019-07-12"),
            lectures: 7,
        })
        .await
        .unwrap();

    let (start, end): (String, String) =
        sqlx::query_as("SELECT start_date, end_date FROM courses WHERE id = ?")
            .bind(course.id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(start, "2018-09-11");
    assert_eq!(end, "2019-07-12");
}

#[tokio::test]
async fn test_find_by_id() {
    let pool = common::test_pool().await;
    let id = common::create_test_course(&pool, "right", "2015-01-17", "2018-05-11", 24).await;
    let repo = SqliteCourseRepository::new(Arc::new(pool));

    let course = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(course.title, "right");
    assert_eq!(course.lectures, 24);
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let pool = common::test_pool().await;
    let repo = SqliteCourseRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_all_in_insertion_order() {
    let pool = common::test_pool().await;
    common::create_test_course(&pool, "b", "2018-09-11", "2019-07-12", 1).await;
    common::create_test_course(&pool, "a", "2015-01-17", "2018-05-11", 2).await;
    common::create_test_course(&pool, "b", "2019-02-21", "2019-11-22", 3).await;
    let repo = SqliteCourseRepository::new(Arc::new(pool));

    let titles: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.title)
        .collect();

    assert_eq!(titles, vec!["b", "a", "b"]);
}

#[tokio::test]
async fn test_find_by_title_is_exact() {
    let pool = common::test_pool().await;
    common::seed_filter_scenario(&pool).await;
    let repo = SqliteCourseRepository::new(Arc::new(pool));

    let ids: Vec<i64> = repo
        .find_by_title("course")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec![2, 3, 5, 6]);
    assert!(repo.find_by_title("Course").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_only_touches_given_fields() {
    let pool = common::test_pool().await;
    let id = common::create_test_course(&pool, "course2", "2018-01-17", "2018-05-11", 14).await;
    let repo = SqliteCourseRepository::new(Arc::new(pool));

    let patch = CoursePatch {
        title: Some("changed_title".to_string()),
        end_date: Some(date("2021-09-15")),
        ..Default::default()
    };

    assert!(repo.update(id, patch).await.unwrap());

    let course = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(course.title, "changed_title");
    assert_eq!(course.start_date, date("2018-01-17"));
    assert_eq!(course.end_date, date("2021-09-15"));
    assert_eq!(course.lectures, 14);
}

#[tokio::test]
async fn test_update_binds_quotes_literally() {
    let pool = common::test_pool().await;
    let id = common::create_test_course(&pool, "course", "2018-01-17", "2018-05-11", 14).await;
    let repo = SqliteCourseRepository::new(Arc::new(pool));

    let title = "it's'; DROP TABLE courses; --".to_string();
    let patch = CoursePatch {
        title: Some(title.clone()),
        ..Default::default()
    };

    assert!(repo.update(id, patch).await.unwrap());
    assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().title, title);
}

#[tokio::test]
async fn test_update_missing_course() {
    let pool = common::test_pool().await;
    let repo = SqliteCourseRepository::new(Arc::new(pool));

    let patch = CoursePatch {
        lectures: Some(3),
        ..Default::default()
    };

    assert!(!repo.update(7, patch).await.unwrap());
    assert!(!repo.update(7, CoursePatch::default()).await.unwrap());
}

#[tokio::test]
async fn test_empty_patch_reports_existing_course() {
    let pool = common::test_pool().await;
    let id = common::create_test_course(&pool, "course", "2018-01-17", "2018-05-11", 14).await;
    let repo = SqliteCourseRepository::new(Arc::new(pool));

    assert!(repo.update(id, CoursePatch::default()).await.unwrap());
}

#[tokio::test]
async fn test_delete_course() {
    let pool = common::test_pool().await;
    let id = common::create_test_course(&pool, "course", "2018-01-17", "2018-05-11", 14).await;
    let repo = SqliteCourseRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete(id).await.unwrap());
}
