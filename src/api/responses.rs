//! API response structures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::{error::PaceError, state::TimerSettings};

/// Reply for timer control endpoints; only the field relevant to the action
/// is filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub ok: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ends: Option<u32>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            timestamp: Utc::now(),
            elapsed_seconds: None,
            remaining_seconds: None,
            total_seconds: None,
            num_ends: None,
        }
    }

    pub fn with_elapsed(mut self, seconds: f64) -> Self {
        self.elapsed_seconds = Some(seconds.max(0.0) as u64);
        self
    }

    pub fn with_remaining(mut self, seconds: f64) -> Self {
        self.remaining_seconds = Some(seconds.max(0.0) as u64);
        self
    }

    pub fn with_total(mut self, seconds: u64) -> Self {
        self.total_seconds = Some(seconds);
        self
    }

    pub fn with_ends(mut self, count: u32) -> Self {
        self.num_ends = Some(count);
        self
    }
}

/// Body of every rejected request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

/// Reply for `GET /debug`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugResponse {
    pub file_config: Option<TimerSettings>,
    pub live_config: TimerSettings,
    pub config_file: String,
    pub config_file_exists: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

impl IntoResponse for PaceError {
    fn into_response(self) -> Response {
        let status = if self.is_validation() {
            warn!(error = %self, "Rejected request");
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %self, "Request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = ErrorResponse {
            ok: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
