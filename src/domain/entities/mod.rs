//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; validation and reconciliation live in
//! [`crate::application::services::CourseRegistry`].
//!
//! # Entity Types
//!
//! - [`Course`] - A stored course record
//! - [`NewCourse`] - Input for creating a course
//! - [`CoursePatch`] - Partial update, `None` fields are left unchanged

pub mod course;

pub use course::{Course, CoursePatch, NewCourse};
