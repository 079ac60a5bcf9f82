//! Application error type and its HTTP mapping.
//!
//! Every failure a handler can return is an [`AppError`]. The variant decides
//! the status code; the body always has the shape
//!
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

pub const INVALID_DATE_FORMAT_MESSAGE: &str =
    "This is the incorrect date string format. It should be YYYY-MM-DD";
pub const INVALID_DATE_RANGE_MESSAGE: &str = "The start_date is equal or greater than the end_date";
pub const COURSE_NOT_FOUND_MESSAGE: &str = "Course with this id was not found";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A date string is not `YYYY-MM-DD`.
    #[error("{message}")]
    InvalidDateFormat { message: String, details: Value },

    /// A start date is not strictly before its end date.
    #[error("{message}")]
    InvalidDateRange { message: String, details: Value },

    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_date_format(field: &str, value: &str) -> Self {
        Self::InvalidDateFormat {
            message: INVALID_DATE_FORMAT_MESSAGE.to_string(),
            details: json!({ "field": field, "value": value }),
        }
    }

    pub fn invalid_date_range(details: Value) -> Self {
        Self::InvalidDateRange {
            message: INVALID_DATE_RANGE_MESSAGE.to_string(),
            details,
        }
    }

    pub fn course_not_found(id: i64) -> Self {
        Self::NotFound {
            message: COURSE_NOT_FOUND_MESSAGE.to_string(),
            details: json!({ "id": id }),
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status and stable machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidDateFormat { .. } => (StatusCode::BAD_REQUEST, "invalid_date_format"),
            AppError::InvalidDateRange { .. } => (StatusCode::BAD_REQUEST, "invalid_date_range"),
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::InvalidDateFormat { message, details }
            | AppError::InvalidDateRange { message, details }
            | AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::invalid_date_format("start_date", "11-09-2011")
                .status_and_code()
                .0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::invalid_date_range(json!({})).status_and_code().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::course_not_found(4).status_and_code().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status_and_code().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_carries_message_and_details() {
        let info = AppError::course_not_found(7).to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, COURSE_NOT_FOUND_MESSAGE);
        assert_eq!(info.details, json!({ "id": 7 }));
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::invalid_date_format("end_date", "2019/07/12");
        assert_eq!(err.to_string(), INVALID_DATE_FORMAT_MESSAGE);
    }
}
