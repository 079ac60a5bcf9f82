//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod courses;
pub mod health;

pub use courses::{
    add_course_handler, change_attributes_handler, delete_course_handler,
    get_course_handler, get_filtered_courses_handler, list_titles_handler,
};
pub use health::health_handler;
