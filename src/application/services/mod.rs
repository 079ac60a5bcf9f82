//! Business logic services for the application layer.

pub mod course_registry;

pub use course_registry::{AttributeChanges, CourseRegistry};
