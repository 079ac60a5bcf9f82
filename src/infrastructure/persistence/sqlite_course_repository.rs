//! SQLite implementation of the course repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

/// Raw `courses` row. Dates are stored as `YYYY-MM-DD` text.
#[derive(Debug, FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    lectures: i64,
}

impl TryFrom<CourseRow> for Course {
    type Error = AppError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let lectures = u32::try_from(row.lectures).map_err(|_| {
            AppError::internal(
                "Stored lecture count out of range",
                json!({ "id": row.id, "lectures": row.lectures }),
            )
        })?;

        Ok(Course::new(
            row.id,
            row.title,
            row.start_date,
            row.end_date,
            lectures,
        ))
    }
}

fn into_courses(rows: Vec<CourseRow>) -> Result<Vec<Course>, AppError> {
    rows.into_iter().map(Course::try_from).collect()
}

/// SQLite repository for course storage and retrieval.
///
/// Every value reaches SQL through bind parameters. Each call checks a
/// connection out of the pool and hands it back when the call returns.
pub struct SqliteCourseRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (title, start_date, end_date, lectures)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, start_date, end_date, lectures
            "#,
        )
        .bind(new_course.title)
        .bind(new_course.start_date)
        .bind(new_course.end_date)
        .bind(i64::from(new_course.lectures))
        .fetch_one(self.pool.as_ref())
        .await?;

        Course::try_from(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, start_date, end_date, lectures
            FROM courses
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Course::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, start_date, end_date, lectures
            FROM courses
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        into_courses(rows)
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, start_date, end_date, lectures
            FROM courses
            WHERE title = ?
            ORDER BY id
            "#,
        )
        .bind(title)
        .fetch_all(self.pool.as_ref())
        .await?;

        into_courses(rows)
    }

    async fn update(&self, id: i64, patch: CoursePatch) -> Result<bool, AppError> {
        if patch.is_empty() {
            let exists = sqlx::query_scalar::<_, i64>("SELECT 1 FROM courses WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?
                .is_some();
            return Ok(exists);
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE courses SET ");
        {
            let mut assignments = builder.separated(", ");
            if let Some(title) = patch.title {
                assignments.push("title = ").push_bind_unseparated(title);
            }
            if let Some(start_date) = patch.start_date {
                assignments
                    .push("start_date = ")
                    .push_bind_unseparated(start_date);
            }
            if let Some(end_date) = patch.end_date {
                assignments.push("end_date = ").push_bind_unseparated(end_date);
            }
            if let Some(lectures) = patch.lectures {
                assignments
                    .push("lectures = ")
                    .push_bind_unseparated(i64::from(lectures));
            }
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(self.pool.as_ref()).await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
