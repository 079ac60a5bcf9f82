//! Body of `GET /health`.

use serde::Serialize;

/// Overall verdict: `healthy` only when the course database answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

/// Outcome of the `SELECT 1` round trip against the course store.
#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: CheckStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DatabaseCheck {
    pub fn connected() -> Self {
        Self {
            status: CheckStatus::Ok,
            message: Some("Connected".to_string()),
        }
    }

    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self {
            status: CheckStatus::Error,
            message: Some(format!("Database error: {reason}")),
        }
    }
}

impl HealthResponse {
    /// Derives the overall status from the database check.
    pub fn from_check(database: DatabaseCheck) -> Self {
        let status = match database.status {
            CheckStatus::Ok => ServiceStatus::Healthy,
            CheckStatus::Error => ServiceStatus::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}
