//! Repository trait for course data access.

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing courses.
///
/// Every method is a single storage round trip; date-range rules are
/// enforced by the caller before anything is written.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCourseRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Inserts a new course and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError>;

    /// Finds a course by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Course))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Lists every course in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Course>, AppError>;

    /// Lists courses whose title equals `title` exactly, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_title(&self, title: &str) -> Result<Vec<Course>, AppError>;

    /// Writes the fields present in `patch`.
    ///
    /// Returns `Ok(false)` if no course has this id. An empty patch writes
    /// nothing and only reports whether the course exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: CoursePatch) -> Result<bool, AppError>;

    /// Permanently removes a course.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
