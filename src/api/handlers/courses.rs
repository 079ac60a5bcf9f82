//! Handlers for course endpoints.
//!
//! Every endpoint takes a JSON body, including `GET` and `DELETE`.

use std::collections::BTreeMap;

use axum::{Json, extract::State};

use crate::api::dto::course::{
    AddCourseRequest, ChangeAttributesRequest, CourseIdRequest, CourseRecord,
    FilterCoursesRequest, MessageResponse, TitlesResponse,
};
use crate::application::services::AttributeChanges;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new course.
///
/// # Endpoint
///
/// `POST /add-course`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "course1",
///   "start_date": "2018-09-11",
///   "end_date": "2019-07-12",
///   "lectures": 7
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a date is malformed, the range is not
/// increasing, or the title is empty.
pub async fn add_course_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddCourseRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .course_registry
        .add_course(
            payload.title,
            &payload.start_date,
            &payload.end_date,
            payload.lectures,
        )
        .await?;

    Ok(Json(MessageResponse {
        message: "Course added successfully",
    }))
}

/// Lists the titles of all courses.
///
/// # Endpoint
///
/// `GET /get-titles-courses`
///
/// # Response
///
/// ```json
/// { "titles": ["course1", "course2"] }
/// ```
pub async fn list_titles_handler(
    State(state): State<AppState>,
) -> Result<Json<TitlesResponse>, AppError> {
    let titles = state.course_registry.list_titles().await?;
    Ok(Json(TitlesResponse { titles }))
}

/// Returns a single course.
///
/// # Endpoint
///
/// `GET /get-course` with body `{"id": 2}`
///
/// # Errors
///
/// Returns 404 Not Found if no course has this id.
pub async fn get_course_handler(
    State(state): State<AppState>,
    Json(payload): Json<CourseIdRequest>,
) -> Result<Json<CourseRecord>, AppError> {
    let course = state.course_registry.get_by_id(payload.id).await?;
    Ok(Json(course.into()))
}

/// Returns courses with an exact title match that run entirely inside the
/// requested window, keyed by id.
///
/// # Endpoint
///
/// `GET /get-filtered-courses`
///
/// # Request Body
///
/// ```json
/// { "title": "course", "start_date": "2017-01-01", "end_date": "2020-01-01" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "2": { "id": 2, "title": "course", "start_date": "2018-01-17", "end_date": "2018-05-11", "lectures": 14 }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a date is malformed or the window is empty.
pub async fn get_filtered_courses_handler(
    State(state): State<AppState>,
    Json(payload): Json<FilterCoursesRequest>,
) -> Result<Json<BTreeMap<i64, CourseRecord>>, AppError> {
    let courses = state
        .course_registry
        .get_filtered(&payload.title, &payload.start_date, &payload.end_date)
        .await?;

    Ok(Json(
        courses
            .into_iter()
            .map(|(id, course)| (id, course.into()))
            .collect(),
    ))
}

/// Partially updates a course.
///
/// # Endpoint
///
/// `PUT /change-attributes`
///
/// # Request Body
///
/// Only `id` is required. Absent fields are left unchanged.
///
/// ```json
/// { "id": 2, "title": "changed_title", "end_date": "2021-09-15" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no course has this id.
/// Returns 400 Bad Request if a date is malformed or the resulting range is
/// not increasing.
pub async fn change_attributes_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChangeAttributesRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let changes = AttributeChanges {
        title: payload.title,
        start_date: payload.start_date,
        end_date: payload.end_date,
        lectures: payload.lectures,
    };

    state
        .course_registry
        .change_attributes(payload.id, changes)
        .await?;

    Ok(Json(MessageResponse {
        message: "Course attributes changed successfully",
    }))
}

/// Permanently deletes a course.
///
/// # Endpoint
///
/// `DELETE /delete-course` with body `{"id": 2}`
///
/// # Errors
///
/// Returns 404 Not Found if no course has this id.
pub async fn delete_course_handler(
    State(state): State<AppState>,
    Json(payload): Json<CourseIdRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.course_registry.delete_course(payload.id).await?;

    Ok(Json(MessageResponse {
        message: "Course deleted successfully",
    }))
}
