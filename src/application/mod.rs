//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI one entry point per operation.
//!
//! # Available Services
//!
//! - [`services::course_registry::CourseRegistry`] - Course validation, filtering and updates

pub mod services;
