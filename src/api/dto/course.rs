//! DTOs for course endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Course;
use crate::utils::date_parser::DATE_FORMAT;

/// Request body for `POST /add-course`.
///
/// Dates and title are checked by the registry, dates first.
#[derive(Debug, Deserialize)]
pub struct AddCourseRequest {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub lectures: u32,
}

/// Request body for endpoints addressing a single course by id.
#[derive(Debug, Deserialize)]
pub struct CourseIdRequest {
    pub id: i64,
}

/// Request body for `GET /get-filtered-courses`.
#[derive(Debug, Deserialize)]
pub struct FilterCoursesRequest {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

/// Request body for `PUT /change-attributes`.
///
/// Everything except `id` is optional. Absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct ChangeAttributesRequest {
    pub id: i64,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub lectures: Option<u32>,
}

/// Full course record as returned by the API.
#[derive(Debug, Serialize)]
pub struct CourseRecord {
    pub id: i64,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub lectures: u32,
}

impl From<Course> for CourseRecord {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            start_date: course.start_date.format(DATE_FORMAT).to_string(),
            end_date: course.end_date.format(DATE_FORMAT).to_string(),
            lectures: course.lectures,
        }
    }
}

/// Response for `GET /get-titles-courses`.
#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub titles: Vec<String>,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
