//! Response types for the EOSB engine API.
//!
//! This module defines the error response body and the mapping from
//! [`EngineError`] to HTTP status codes, plus the `/rules` listing body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::{RepositoryMetadata, RuleDefinition};
use crate::error::EngineError;

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

    /// Creates a missing field error response.
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new("MISSING_FIELD", message)
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
        let code = error.kind();
        let message = error.to_string();

        let (status, details) = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The rule repository could not be loaded",
            ),
            EngineError::CalculationError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The calculation could not be completed",
            ),
            EngineError::InvalidRange { .. } => (
                StatusCode::BAD_REQUEST,
                "The employment end date must not precede the start date",
            ),
            EngineError::InvalidCompensation { .. } => (
                StatusCode::BAD_REQUEST,
                "The monthly salary must be a positive amount within the supported range",
            ),
            EngineError::InvalidFacts { .. } => (
                StatusCode::BAD_REQUEST,
                "The decision facts are incomplete or contain invalid values",
            ),
            EngineError::UnsupportedDecisionType { .. } => (
                StatusCode::BAD_REQUEST,
                "The rule repository has no rules for this decision type",
            ),
            EngineError::UnsupportedTerminationReason { .. } => (
                StatusCode::BAD_REQUEST,
                "The termination reason is unknown or does not apply to the contract type",
            ),
        };

        ApiErrorResponse {
            status,
            error: ApiError::with_details(code, message, details),
        }
    }
}

/// Response body for the `/rules` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResponse {
    /// The labor code the rules come from.
    pub repository: RepositoryMetadata,
    /// Every rule, in evaluation order.
    pub rules: Vec<RuleDefinition>,
}
