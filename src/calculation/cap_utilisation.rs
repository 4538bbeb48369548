//! Cap utilisation calculation functionality.
//!
//! The front-end drives a 0-100 progress indicator from how much of the
//! category cap the computed total uses. This module derives that
//! percentage, guarding the degenerate zero-cap case.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of a cap utilisation calculation.
#[derive(Debug, Clone)]
pub struct CapUtilisationResult {
    /// The utilisation percentage, clamped into [0, 100].
    pub percentage: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the cap utilisation percentage: `total / cap * 100`.
///
/// The percentage is rounded to one decimal place and clamped into
/// [0, 100]. A cap of zero (which a degraded unknown-category result
/// carries) yields 0% rather than a division error.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_cap_utilisation;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_cap_utilisation(19, 21, 1);
/// assert_eq!(result.percentage, Decimal::from_str("90.5").unwrap());
///
/// let zero_cap = calculate_cap_utilisation(0, 0, 1);
/// assert_eq!(zero_cap.percentage, Decimal::ZERO);
/// ```
pub fn calculate_cap_utilisation(
    total_days: u32,
    cap_days: u32,
    step_number: u32,
) -> CapUtilisationResult {
    let (percentage, reasoning) = if cap_days == 0 {
        (
            Decimal::ZERO,
            "Cap is zero, utilisation reported as 0%".to_string(),
        )
    } else {
        let raw = Decimal::from(total_days) * Decimal::ONE_HUNDRED / Decimal::from(cap_days);
        let percentage = raw.round_dp(1).min(Decimal::ONE_HUNDRED);
        (
            percentage,
            format!(
                "{} of {} cap days used, {}% of the category maximum",
                total_days, cap_days, percentage
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "cap_utilisation".to_string(),
        rule_name: "Cap Utilisation".to_string(),
        clause_ref: "AL-5".to_string(),
        input: serde_json::json!({
            "total_days": total_days,
            "cap_days": cap_days
        }),
        output: serde_json::json!({
            "percentage": percentage.to_string()
        }),
        reasoning,
    };

    CapUtilisationResult {
        percentage,
        audit_step,
    }
}
