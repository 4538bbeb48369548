//! Request types for the Leave Entitlement Engine API.
//!
//! This module defines the JSON request structure for the
//! `/entitlement/calculate` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the `/entitlement/calculate` endpoint.
///
/// The category arrives as a free-form string because the selection control
/// submits handbook labels; resolution to [`crate::models::JobCategory`]
/// happens in the handler. The front-end clamps years of service to 0-50,
/// but the engine accepts any non-negative value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// The job category, as a snake_case code or full handbook label.
    pub category: String,
    /// Completed years of service.
    pub years_of_service: i64,
}
