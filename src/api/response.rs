//! Response types for the Leave Entitlement Engine API.
//!
//! This module defines the policy reference response and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::JobCategory;

/// Policy metadata section of the `/entitlement/policy` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyInfo {
    /// The internal policy code.
    pub code: String,
    /// The human-readable policy name.
    pub name: String,
    /// The policy version or effective date.
    pub version: String,
    /// The handbook document the policy was transcribed from.
    pub source_document: String,
}

/// Tenure bonus section of the `/entitlement/policy` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusInfo {
    /// Reference to the handbook clause defining the bonus tiers.
    pub clause: String,
    /// Years of service required for the first bonus tier.
    pub qualifying_years: u32,
    /// Days granted at the qualifying tier.
    pub qualifying_bonus_days: u32,
    /// Years of service required for the long-service tier.
    pub long_service_years: u32,
    /// Extra long-service days for standard categories.
    pub long_service_standard_days: u32,
    /// Extra long-service days for senior categories.
    pub long_service_senior_days: u32,
}

/// One row of the policy reference table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyCategoryRow {
    /// The category code.
    pub code: JobCategory,
    /// The full handbook label.
    pub name: String,
    /// The handbook clause for this row.
    pub clause: String,
    /// Base leave days.
    pub base_days: u32,
    /// Maximum total leave days.
    pub cap_days: u32,
}

/// Response body for the `/entitlement/policy` endpoint.
///
/// Mirrors the policy reference table the front-end renders alongside the
/// calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyResponse {
    /// Policy metadata.
    pub policy: PolicyInfo,
    /// The tenure bonus tiers.
    pub bonus: BonusInfo,
    /// Per-category rows, in policy table order.
    pub categories: Vec<PolicyCategoryRow>,
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
            EngineError::CategoryNotConfigured { code } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATEGORY_NOT_CONFIGURED",
                    format!("Job category not configured: {}", code),
                    "The loaded policy configuration has no entry for this category",
                ),
            },
            EngineError::InvalidYearsOfService { years } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_YEARS_OF_SERVICE",
                    format!("Invalid years of service: {} (must be non-negative)", years),
                    "Years of service must be a non-negative integer",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
