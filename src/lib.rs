//! # Course Registry
//!
//! A small service for managing course records (title, date range, lecture
//! count) over HTTP, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Course entities and the repository trait
//! - **Application Layer** ([`application`]) - Validation, filtering and partial updates
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://courses.db"
//! cargo run
//! ```
//!
//! Migrations are embedded and applied at startup.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AttributeChanges, CourseRegistry};
    pub use crate::domain::entities::{Course, CoursePatch, NewCourse};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
