//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{DatabaseCheck, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let response = HealthResponse::from_check(check_database(&state).await);

    if response.is_healthy() {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> DatabaseCheck {
    match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
    {
        Ok(_) => DatabaseCheck::connected(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            DatabaseCheck::failed(e)
        }
    }
}
