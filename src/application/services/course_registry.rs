//! Course validation, filtering and partial-update reconciliation.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;
use tokio::sync::Mutex;

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;
use crate::utils::date_parser::{parse_date, parse_optional_date};

/// Requested changes for [`CourseRegistry::change_attributes`].
///
/// Dates are still raw strings here; they are parsed only after the course
/// is known to exist.
#[derive(Debug, Clone, Default)]
pub struct AttributeChanges {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub lectures: Option<u32>,
}

/// Service owning every rule about course records.
///
/// Handlers hand it raw request values; it parses dates, enforces
/// `start_date < end_date`, and talks to the repository.
pub struct CourseRegistry<R: CourseRepository> {
    repository: Arc<R>,
    /// Serializes read-then-write sequences within this process.
    write_lock: Mutex<()>,
}

impl<R: CourseRepository> CourseRegistry<R> {
    /// Creates a new course registry.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Validates and stores a new course, returning its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDateFormat`] if either date is not `YYYY-MM-DD`.
    /// Returns [`AppError::InvalidDateRange`] if `start_date >= end_date`.
    /// Returns [`AppError::Validation`] if the title is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_course(
        &self,
        title: String,
        start_date: &str,
        end_date: &str,
        lectures: u32,
    ) -> Result<i64, AppError> {
        let start_date = parse_date("start_date", start_date)?;
        let end_date = parse_date("end_date", end_date)?;
        ensure_ordered(start_date, end_date)?;
        validate_title(&title)?;

        let course = self
            .repository
            .create(NewCourse {
                title,
                start_date,
                end_date,
                lectures,
            })
            .await?;

        tracing::info!(course_id = course.id, title = %course.title, "Course added");

        Ok(course.id)
    }

    /// Returns the titles of all courses in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_titles(&self) -> Result<Vec<String>, AppError> {
        let courses = self.repository.list_all().await?;
        Ok(courses.into_iter().map(|c| c.title).collect())
    }

    /// Returns every stored course in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        self.repository.list_all().await
    }

    /// Retrieves a course by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i64) -> Result<Course, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::course_not_found(id))
    }

    /// Selects courses titled exactly `title` that run entirely inside the
    /// `[start_date, end_date]` window, keyed by id.
    ///
    /// An empty selection is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDateFormat`] if either date is not `YYYY-MM-DD`.
    /// Returns [`AppError::InvalidDateRange`] if `start_date >= end_date`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_filtered(
        &self,
        title: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<BTreeMap<i64, Course>, AppError> {
        let window_start = parse_date("start_date", start_date)?;
        let window_end = parse_date("end_date", end_date)?;
        ensure_ordered(window_start, window_end)?;

        let matching = self
            .repository
            .find_by_title(title)
            .await?
            .into_iter()
            .filter(|c| c.fits_within(window_start, window_end))
            .map(|c| (c.id, c))
            .collect::<BTreeMap<_, _>>();

        tracing::debug!(title, matched = matching.len(), "Filtered courses");

        Ok(matching)
    }

    /// Applies a partial update to an existing course.
    ///
    /// # Date Reconciliation
    ///
    /// Provided dates are checked against each other, or against the stored
    /// value of the date that is not changing:
    ///
    /// - start and end: new start must be before new end
    /// - start only: new start must be before the stored end
    /// - end only: new end must be after the stored start
    ///
    /// Fields absent from `changes` are left untouched in storage. An empty
    /// change set writes nothing; the repository only re-checks that the
    /// course still exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id. This check
    /// runs before any other validation.
    /// Returns [`AppError::InvalidDateFormat`] if a provided date is malformed.
    /// Returns [`AppError::InvalidDateRange`] if the reconciled dates are out of order.
    /// Returns [`AppError::Validation`] if a provided title is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn change_attributes(
        &self,
        id: i64,
        changes: AttributeChanges,
    ) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let existing = self.get_by_id(id).await?;

        let start_date = parse_optional_date("start_date", changes.start_date.as_deref())?;
        let end_date = parse_optional_date("end_date", changes.end_date.as_deref())?;
        reconcile_dates(&existing, start_date, end_date)?;

        if let Some(title) = &changes.title {
            validate_title(title)?;
        }

        let patch = CoursePatch {
            title: changes.title,
            start_date,
            end_date,
            lectures: changes.lectures,
        };

        let unchanged = patch.is_empty();

        if !self.repository.update(id, patch).await? {
            return Err(AppError::course_not_found(id));
        }

        if unchanged {
            tracing::debug!(course_id = id, "No attributes to change");
        } else {
            tracing::info!(course_id = id, "Course attributes changed");
        }

        Ok(())
    }

    /// Permanently removes a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_course(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::course_not_found(id));
        }

        tracing::info!(course_id = id, "Course deleted");

        Ok(())
    }
}

/// Rejects any range where `start_date` is not strictly before `end_date`.
fn ensure_ordered(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), AppError> {
    if start_date >= end_date {
        tracing::debug!(%start_date, %end_date, "Rejected date range");
        return Err(AppError::invalid_date_range(json!({
            "start_date": start_date.to_string(),
            "end_date": end_date.to_string(),
        })));
    }
    Ok(())
}

fn reconcile_dates(
    existing: &Course,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), AppError> {
    match (start_date, end_date) {
        (Some(start), Some(end)) => ensure_ordered(start, end),
        (Some(start), None) => ensure_ordered(start, existing.end_date),
        (None, Some(end)) => ensure_ordered(existing.start_date, end),
        (None, None) => Ok(()),
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::bad_request(
            "Title must not be empty",
            json!({ "field": "title" }),
        ));
    }
    Ok(())
}
