//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! See integration tests in `tests/repository_course.rs` for usage examples.

pub mod course_repository;

pub use course_repository::CourseRepository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
