//! HTTP request handlers for the Leave Entitlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    apply_leave_cap, calculate_cap_utilisation, calculate_tenure_bonus, lookup_base_entitlement,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, EntitlementResult, JobCategory, LeaveBreakdown,
};

use super::request::EntitlementRequest;
use super::response::{
    ApiError, ApiErrorResponse, BonusInfo, PolicyCategoryRow, PolicyInfo, PolicyResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entitlement/calculate", post(calculate_handler))
        .route("/entitlement/policy", get(policy_handler))
        .with_state(state)
}

/// Handler for the POST /entitlement/calculate endpoint.
///
/// Accepts a calculation request and returns the entitlement breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Negative tenure is rejected before anything else, recognized category or not
    if request.years_of_service < 0 {
        warn!(
            correlation_id = %correlation_id,
            years_of_service = request.years_of_service,
            "Negative years of service rejected"
        );
        let api_error: ApiErrorResponse = EngineError::InvalidYearsOfService {
            years: request.years_of_service,
        }
        .into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let Some(category) = JobCategory::from_label(&request.category) else {
        // Unrecognized labels degrade to a zeroed breakdown instead of failing
        warn!(
            correlation_id = %correlation_id,
            category = %request.category,
            "Unknown job category, degrading to zero entitlement"
        );
        let result = degraded_result(&request.category, request.years_of_service);
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(result),
        )
            .into_response();
    };

    let start_time = Instant::now();
    match perform_calculation(category, request.years_of_service, state.config()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                category = %category,
                years_of_service = request.years_of_service,
                total_leave = result.breakdown.total_leave,
                duration_us = duration.as_micros(),
                "Entitlement calculated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Entitlement calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the GET /entitlement/policy endpoint.
///
/// Returns the policy reference table the front-end renders alongside the
/// calculator.
async fn policy_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config();

    let mut categories = Vec::with_capacity(JobCategory::ALL.len());
    for category in JobCategory::ALL {
        match config.get_category(category) {
            Ok(entry) => categories.push(PolicyCategoryRow {
                code: category,
                name: entry.name.clone(),
                clause: entry.clause.clone(),
                base_days: entry.base_days,
                cap_days: entry.cap_days,
            }),
            Err(err) => {
                warn!(category = %category, error = %err, "Policy table incomplete");
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        }
    }

    let metadata = config.policy();
    let bonus = config.bonus();
    let response = PolicyResponse {
        policy: PolicyInfo {
            code: metadata.code.clone(),
            name: metadata.name.clone(),
            version: metadata.version.clone(),
            source_document: metadata.source_document.clone(),
        },
        bonus: BonusInfo {
            clause: bonus.clause.clone(),
            qualifying_years: bonus.qualifying_years,
            qualifying_bonus_days: bonus.qualifying_bonus_days,
            long_service_years: bonus.long_service_years,
            long_service_standard_days: bonus.long_service_standard_days,
            long_service_senior_days: bonus.long_service_senior_days,
        },
        categories,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Performs the entitlement calculation for a recognized category.
fn perform_calculation(
    category: JobCategory,
    years_of_service: i64,
    config: &ConfigLoader,
) -> EngineResult<EntitlementResult> {
    let start_time = Instant::now();
    let policy = config.config();

    let base = lookup_base_entitlement(category, policy, 1)?;
    let bonus = calculate_tenure_bonus(category, years_of_service, policy, 2)?;
    let cap = apply_leave_cap(category, base.base_days, bonus.bonus_days, policy, 3)?;
    let utilisation = calculate_cap_utilisation(cap.total_days, cap.cap_days, 4);

    let breakdown = LeaveBreakdown {
        base_leave: base.base_days,
        service_bonus: bonus.bonus_days,
        total_leave: cap.total_days,
        leave_cap: cap.cap_days,
    };

    let steps = vec![
        base.audit_step,
        bonus.audit_step,
        cap.audit_step,
        utilisation.audit_step,
    ];

    Ok(EntitlementResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        category: Some(category),
        years_of_service,
        breakdown,
        cap_utilisation: utilisation.percentage,
        audit_trace: AuditTrace {
            steps,
            warnings: vec![],
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

/// Builds the zeroed result returned for an unrecognized category label.
fn degraded_result(label: &str, years_of_service: i64) -> EntitlementResult {
    let start_time = Instant::now();

    let lookup_step = AuditStep {
        step_number: 1,
        rule_id: "category_lookup".to_string(),
        rule_name: "Category Lookup".to_string(),
        clause_ref: "AL-2".to_string(),
        input: serde_json::json!({ "category": label }),
        output: serde_json::json!({ "recognized": false }),
        reasoning: format!(
            "Category '{}' is not covered by the policy; entitlement degrades to zero",
            label
        ),
    };
    let utilisation = calculate_cap_utilisation(0, 0, 2);

    EntitlementResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        category: None,
        years_of_service,
        breakdown: LeaveBreakdown::zeroed(),
        cap_utilisation: utilisation.percentage,
        audit_trace: AuditTrace {
            steps: vec![lookup_step, utilisation.audit_step],
            warnings: vec![AuditWarning {
                code: "UNKNOWN_CATEGORY".to_string(),
                message: format!(
                    "Category '{}' is not covered by the annual leave policy",
                    label
                ),
                severity: "medium".to_string(),
            }],
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}
