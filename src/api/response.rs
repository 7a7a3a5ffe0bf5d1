//! Response types for the shift engine API.
//!
//! This module defines the success bodies for each endpoint along with the
//! error response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AuditStep, DateRange, PeriodStats, ShiftFigures, ShiftOverlap, WorkPattern};
use crate::validation::ValidationError;

/// Derived figures for one shift, with its optional audit trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedShift {
    /// The shift's derived figures.
    #[serde(flatten)]
    pub figures: ShiftFigures,
    /// Earnings audit trace, present when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audit_steps: Vec<AuditStep>,
}

/// Response body for `POST /shifts/derive`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveResponse {
    /// One entry per shift, ordered by start time.
    pub shifts: Vec<DerivedShift>,
    /// Sum of planned working minutes.
    pub total_working_minutes: i64,
    /// Sum of projected earnings.
    pub total_earnings: Decimal,
}

/// Response body for `POST /overlaps`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapResponse {
    /// Conflicting pairs.
    pub overlaps: Vec<ShiftOverlap>,
}

/// Response body for `POST /stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// The resolved range.
    pub range: DateRange,
    /// Aggregated totals.
    pub stats: PeriodStats,
    /// Work pattern over the same range.
    pub pattern: WorkPattern,
}

/// Response body for the validation endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether every rule passed.
    pub valid: bool,
    /// The first failure's message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Result<(), ValidationError>> for ValidationResponse {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                message: None,
            },
            Err(e) => Self {
                valid: false,
                message: Some(e.to_string()),
            },
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::WorkplaceNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("WORKPLACE_NOT_FOUND", message),
            },
            EngineError::ShiftNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SHIFT_NOT_FOUND", message),
            },
            EngineError::DuplicateId { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("DUPLICATE_ID", message),
            },
            EngineError::InvalidShift { message, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_SHIFT",
                    message,
                    "The shift data contains invalid information",
                ),
            ),
            EngineError::InvalidWorkplace { message, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_WORKPLACE",
                    message,
                    "The workplace data contains invalid information",
                ),
            ),
        }
    }
}
