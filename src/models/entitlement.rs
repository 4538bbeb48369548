//! Entitlement result models.
//!
//! This module contains the [`LeaveBreakdown`] value object and the
//! [`EntitlementResult`] envelope returned to API clients.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, JobCategory};

/// The four-field breakdown of an annual leave entitlement.
///
/// Invariant: `total_leave == min(base_leave + service_bonus, leave_cap)`,
/// so `total_leave` never exceeds `leave_cap`.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveBreakdown;
///
/// let breakdown = LeaveBreakdown {
///     base_leave: 15,
///     service_bonus: 5,
///     total_leave: 20,
///     leave_cap: 20,
/// };
/// assert_eq!(
///     breakdown.total_leave,
///     (breakdown.base_leave + breakdown.service_bonus).min(breakdown.leave_cap)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBreakdown {
    /// Entitlement days granted with zero tenure, fixed per category.
    pub base_leave: u32,
    /// Additional days unlocked at the tenure thresholds.
    pub service_bonus: u32,
    /// The capped total entitlement.
    pub total_leave: u32,
    /// The maximum total entitlement for the category.
    pub leave_cap: u32,
}

impl LeaveBreakdown {
    /// A fully zeroed breakdown, used when a request degrades because its
    /// category was not recognized.
    pub fn zeroed() -> Self {
        Self {
            base_leave: 0,
            service_bonus: 0,
            total_leave: 0,
            leave_cap: 0,
        }
    }
}

/// The complete result of an entitlement calculation.
///
/// Besides the breakdown itself, the envelope carries the metadata an HR
/// reviewer needs: when the calculation ran, which engine version produced
/// it, and the audit trace of every rule applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitlementResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The resolved job category. `None` when the submitted label was not
    /// recognized and the result degraded to a zeroed breakdown.
    pub category: Option<JobCategory>,
    /// The years of service the calculation was based on.
    pub years_of_service: i64,
    /// The entitlement breakdown.
    pub breakdown: LeaveBreakdown,
    /// How much of the category cap the total entitlement uses, as a
    /// percentage in [0, 100]. Zero when the cap is zero.
    pub cap_utilisation: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_result() -> EntitlementResult {
        EntitlementResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2025-05-09T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            category: Some(JobCategory::Manager),
            years_of_service: 6,
            breakdown: LeaveBreakdown {
                base_leave: 15,
                service_bonus: 5,
                total_leave: 20,
                leave_cap: 20,
            },
            cap_utilisation: Decimal::from_str("100.0").unwrap(),
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 10,
            },
        }
    }

    #[test]
    fn test_breakdown_serialization() {
        let breakdown = LeaveBreakdown {
            base_leave: 12,
            service_bonus: 2,
            total_leave: 14,
            leave_cap: 17,
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.contains("\"base_leave\":12"));
        assert!(json.contains("\"service_bonus\":2"));
        assert!(json.contains("\"total_leave\":14"));
        assert!(json.contains("\"leave_cap\":17"));
    }

    #[test]
    fn test_breakdown_deserialization() {
        let json = r#"{
            "base_leave": 10,
            "service_bonus": 0,
            "total_leave": 10,
            "leave_cap": 15
        }"#;

        let breakdown: LeaveBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown.base_leave, 10);
        assert_eq!(breakdown.total_leave, 10);
    }

    #[test]
    fn test_zeroed_breakdown() {
        let breakdown = LeaveBreakdown::zeroed();
        assert_eq!(breakdown.base_leave, 0);
        assert_eq!(breakdown.service_bonus, 0);
        assert_eq!(breakdown.total_leave, 0);
        assert_eq!(breakdown.leave_cap, 0);
    }

    #[test]
    fn test_result_serialization_includes_envelope_fields() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"0.1.0\""));
        assert!(json.contains("\"category\":\"manager\""));
        assert!(json.contains("\"cap_utilisation\":\"100.0\""));
        assert!(json.contains("\"breakdown\":{"));
        assert!(json.contains("\"audit_trace\":{"));
    }

    #[test]
    fn test_result_with_unrecognized_category_serializes_null() {
        let mut result = sample_result();
        result.category = None;
        result.breakdown = LeaveBreakdown::zeroed();

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"category\":null"));
    }

    #[test]
    fn test_result_round_trip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: EntitlementResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
