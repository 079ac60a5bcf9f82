//! API route configuration.

use crate::api::handlers::{
    add_course_handler, change_attributes_handler, delete_course_handler, get_course_handler,
    get_filtered_courses_handler, list_titles_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Course management routes.
///
/// # Endpoints
///
/// - `POST   /add-course`           - Create a course
/// - `GET    /get-titles-courses`   - List all course titles
/// - `GET    /get-course`           - Fetch one course by id
/// - `GET    /get-filtered-courses` - Courses by title inside a date window
/// - `PUT    /change-attributes`    - Partially update a course
/// - `DELETE /delete-course`        - Delete a course
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/add-course", post(add_course_handler))
        .route("/get-titles-courses", get(list_titles_handler))
        .route("/get-course", get(get_course_handler))
        .route("/get-filtered-courses", get(get_filtered_courses_handler))
        .route("/change-attributes", put(change_attributes_handler))
        .route("/delete-course", delete(delete_course_handler))
}
