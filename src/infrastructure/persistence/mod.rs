//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries with bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteCourseRepository`] - Course storage and retrieval

pub mod sqlite_course_repository;

pub use sqlite_course_repository::SqliteCourseRepository;
