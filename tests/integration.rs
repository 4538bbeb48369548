//! Integration tests for the Leave Entitlement Engine.
//!
//! This test suite covers the HTTP surface end to end:
//! - Entitlement calculation across all five job categories
//! - Tenure bonus tiers at 0, 2, and 5 years
//! - Cap behavior and cap utilisation
//! - Unknown-category degrade path
//! - Error cases (negative years, malformed JSON)
//! - The policy reference endpoint

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use leave_engine::api::{AppState, create_router};
use leave_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

const ALL_CATEGORY_CODES: [&str; 5] = [
    "general_staff_supervisor",
    "assistant_manager",
    "manager",
    "senior_flagship_area_manager",
    "associate_director",
];

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/annual_leave").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn calculate_request(category: &str, years: i64) -> Value {
    json!({
        "category": category,
        "years_of_service": years
    })
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/entitlement/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn assert_breakdown(result: &Value, base: u64, bonus: u64, total: u64, cap: u64) {
    let breakdown = &result["breakdown"];
    assert_eq!(breakdown["base_leave"], base, "base_leave in {result}");
    assert_eq!(breakdown["service_bonus"], bonus, "service_bonus in {result}");
    assert_eq!(breakdown["total_leave"], total, "total_leave in {result}");
    assert_eq!(breakdown["leave_cap"], cap, "leave_cap in {result}");
}

fn utilisation(result: &Value) -> Decimal {
    Decimal::from_str(result["cap_utilisation"].as_str().unwrap()).unwrap()
}

// =============================================================================
// Tenure tiers across all categories
// =============================================================================

#[tokio::test]
async fn test_zero_tenure_gets_base_only() {
    let expected_base = [10, 12, 15, 16, 20];

    for (code, base) in ALL_CATEGORY_CODES.iter().zip(expected_base) {
        let (status, body) =
            post_calculate(create_router_for_test(), calculate_request(code, 0)).await;

        assert_eq!(status, StatusCode::OK);
        let cap = body["breakdown"]["leave_cap"].as_u64().unwrap();
        assert_breakdown(&body, base, 0, base, cap);
    }
}

#[tokio::test]
async fn test_one_year_is_still_below_the_qualifying_tier() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        calculate_request("general_staff_supervisor", 1),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&body, 10, 0, 10, 15);
}

#[tokio::test]
async fn test_two_years_unlocks_the_qualifying_bonus() {
    let expected = [
        ("general_staff_supervisor", 10u64, 15u64),
        ("assistant_manager", 12, 17),
        ("manager", 15, 20),
        ("senior_flagship_area_manager", 16, 21),
        ("associate_director", 20, 23),
    ];

    for (code, base, cap) in expected {
        let (status, body) =
            post_calculate(create_router_for_test(), calculate_request(code, 2)).await;

        assert_eq!(status, StatusCode::OK);
        let total = (base + 2).min(cap);
        assert_breakdown(&body, base, 2, total, cap);
    }
}

#[tokio::test]
async fn test_five_years_splits_standard_and_senior_tiers() {
    // Standard categories add three more days at five years, senior add one
    let expected = [
        ("general_staff_supervisor", 5u64),
        ("assistant_manager", 5),
        ("manager", 5),
        ("senior_flagship_area_manager", 3),
        ("associate_director", 3),
    ];

    for (code, bonus) in expected {
        let (status, body) =
            post_calculate(create_router_for_test(), calculate_request(code, 5)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["breakdown"]["service_bonus"], bonus, "bonus for {code}");
    }
}

#[tokio::test]
async fn test_total_never_exceeds_cap_over_a_tenure_sweep() {
    for code in ALL_CATEGORY_CODES {
        for years in [0, 1, 2, 4, 5, 6, 10, 25, 50, 1000] {
            let (status, body) =
                post_calculate(create_router_for_test(), calculate_request(code, years)).await;

            assert_eq!(status, StatusCode::OK);
            let total = body["breakdown"]["total_leave"].as_u64().unwrap();
            let cap = body["breakdown"]["leave_cap"].as_u64().unwrap();
            assert!(total <= cap, "{code} at {years} years: {total} > {cap}");
        }
    }
}

// =============================================================================
// Handbook scenarios
// =============================================================================

#[tokio::test]
async fn test_general_staff_with_one_year() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        calculate_request("Retail and HO General Staffs & Supervisors", 1),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&body, 10, 0, 10, 15);
    assert_eq!(utilisation(&body), Decimal::from_str("66.7").unwrap());
}

#[tokio::test]
async fn test_assistant_manager_with_three_years() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        calculate_request("assistant_manager", 3),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&body, 12, 2, 14, 17);
    assert_eq!(utilisation(&body), Decimal::from_str("82.4").unwrap());
}

#[tokio::test]
async fn test_manager_with_six_years_is_capped() {
    let (status, body) =
        post_calculate(create_router_for_test(), calculate_request("manager", 6)).await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&body, 15, 5, 20, 20);
    assert_eq!(utilisation(&body), Decimal::from(100));

    // The cap step records that the raw sum hit the ceiling
    let cap_step = body["audit_trace"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["rule_id"] == "leave_cap")
        .unwrap();
    assert_eq!(cap_step["output"]["total_days"], 20);
}

#[tokio::test]
async fn test_senior_flagship_manager_with_ten_years() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        calculate_request("Sr. Flagship Boutique Manager/ Area Manager", 10),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&body, 16, 3, 19, 21);
    assert_eq!(utilisation(&body), Decimal::from_str("90.5").unwrap());
}

#[tokio::test]
async fn test_associate_director_with_five_years_is_capped() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        calculate_request("Associate Directors / Directors and above", 5),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&body, 20, 3, 23, 23);
    assert_eq!(utilisation(&body), Decimal::from(100));
}

// =============================================================================
// Degrade and error paths
// =============================================================================

#[tokio::test]
async fn test_unknown_category_returns_zeroed_breakdown() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        calculate_request("Regional Trainer", 6),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&body, 0, 0, 0, 0);
    assert_eq!(body["category"], Value::Null);
    assert_eq!(utilisation(&body), Decimal::ZERO);

    let warnings = body["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "UNKNOWN_CATEGORY");
}

#[tokio::test]
async fn test_negative_years_are_rejected_not_clamped() {
    let (status, body) =
        post_calculate(create_router_for_test(), calculate_request("manager", -1)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_YEARS_OF_SERVICE");
    assert!(body["message"].as_str().unwrap().contains("-1"));
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/entitlement/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_years_field_returns_400() {
    let (status, body) =
        post_calculate(create_router_for_test(), json!({"category": "manager"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("missing field"));
}

// =============================================================================
// Policy reference endpoint
// =============================================================================

#[tokio::test]
async fn test_policy_endpoint_matches_the_handbook_table() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/entitlement/policy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["policy"]["code"], "retail_annual_leave");
    assert_eq!(body["bonus"]["qualifying_years"], 2);
    assert_eq!(body["bonus"]["long_service_standard_days"], 3);
    assert_eq!(body["bonus"]["long_service_senior_days"], 1);

    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 5);

    let expected = [
        ("general_staff_supervisor", 10u64, 15u64),
        ("assistant_manager", 12, 17),
        ("manager", 15, 20),
        ("senior_flagship_area_manager", 16, 21),
        ("associate_director", 20, 23),
    ];
    for (row, (code, base, cap)) in categories.iter().zip(expected) {
        assert_eq!(row["code"], code);
        assert_eq!(row["base_days"], base);
        assert_eq!(row["cap_days"], cap);
    }
}

#[tokio::test]
async fn test_result_envelope_carries_metadata() {
    let (_, body) = post_calculate(
        create_router_for_test(),
        calculate_request("associate_director", 5),
    )
    .await;

    assert!(body["calculation_id"].as_str().is_some());
    assert!(body["timestamp"].as_str().is_some());
    assert_eq!(body["engine_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["years_of_service"], 5);
    assert_eq!(
        body["audit_trace"]["steps"].as_array().unwrap().len(),
        4
    );
}
