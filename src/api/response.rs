//! Response types for the Booking Availability Engine API.
//!
//! This module defines the success bodies for each endpoint plus the error
//! response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::availability::{SlotAvailability, UnavailableReason};
use crate::error::EngineError;
use crate::models::CalendarDay;

/// Response body for the `/availability` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Whether the requested slot may be booked.
    pub available: bool,
    /// The rejecting rule, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnavailableReason>,
    /// Human-readable rendering of the reason, for direct display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<SlotAvailability> for AvailabilityResponse {
    fn from(verdict: SlotAvailability) -> Self {
        let message = verdict.reason.as_ref().map(ToString::to_string);
        Self {
            available: verdict.available,
            reason: verdict.reason,
            message,
        }
    }
}

/// Response body for the `/slots` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    /// The bookable slot labels, ascending by hour.
    pub time_slots: Vec<String>,
}

/// Response body for the `/calendar` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// The 42 grid-cell descriptors for the displayed month.
    pub days: Vec<CalendarDay>,
}

/// Response body for the `/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the form passed every check.
    pub valid: bool,
    /// All accumulated validation failures, empty when valid.
    pub errors: Vec<String>,
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidMonth { month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month {}", month),
                    "Months must be between 1 and 12",
                ),
            },
        }
    }
}
