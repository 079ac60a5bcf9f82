//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::CourseRegistry;
use crate::infrastructure::persistence::SqliteCourseRepository;

#[derive(Clone)]
pub struct AppState {
    pub course_registry: Arc<CourseRegistry<SqliteCourseRepository>>,
    pub db: Arc<SqlitePool>,
}

impl AppState {
    /// Wires the SQLite repository and registry on top of `pool`.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let repository = Arc::new(SqliteCourseRepository::new(pool.clone()));

        Self {
            course_registry: Arc::new(CourseRegistry::new(repository)),
            db: pool,
        }
    }
}
