//! Tenure bonus calculation functionality.
//!
//! This module determines the service bonus days an employee has unlocked
//! at the policy's tenure thresholds.

use crate::config::LeavePolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, JobCategory};

/// The result of a tenure bonus calculation, including the days and audit step.
#[derive(Debug, Clone)]
pub struct TenureBonusResult {
    /// The bonus days unlocked by the employee's tenure.
    pub bonus_days: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the service bonus for a category and years of service.
///
/// The policy defines two tiers:
/// 1. At the qualifying threshold (2 years), every category unlocks the
///    qualifying bonus (2 days).
/// 2. At the long-service threshold (5 years), senior categories unlock one
///    extra day and all other categories unlock three.
///
/// Below the qualifying threshold the bonus is zero. There is no upper bound
/// on years of service; the cap is applied separately.
///
/// # Arguments
///
/// * `category` - The job category (decides the long-service tier size)
/// * `years_of_service` - Completed years of service; must be non-negative
/// * `policy` - The loaded leave policy
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `InvalidYearsOfService` when `years_of_service` is negative.
/// Negative tenure is rejected rather than clamped.
///
/// # Examples
///
/// ```no_run
/// use leave_engine::calculation::calculate_tenure_bonus;
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::JobCategory;
///
/// let loader = ConfigLoader::load("./config/annual_leave").unwrap();
///
/// let result =
///     calculate_tenure_bonus(JobCategory::Manager, 6, loader.config(), 1).unwrap();
/// assert_eq!(result.bonus_days, 5);
///
/// let result =
///     calculate_tenure_bonus(JobCategory::AssociateDirector, 6, loader.config(), 1).unwrap();
/// assert_eq!(result.bonus_days, 3);
/// ```
pub fn calculate_tenure_bonus(
    category: JobCategory,
    years_of_service: i64,
    policy: &LeavePolicyConfig,
    step_number: u32,
) -> EngineResult<TenureBonusResult> {
    if years_of_service < 0 {
        return Err(EngineError::InvalidYearsOfService {
            years: years_of_service,
        });
    }

    let tiers = policy.bonus();

    let mut bonus_days: u32 = 0;
    let mut reached_long_service = false;

    if years_of_service >= i64::from(tiers.qualifying_years) {
        bonus_days += tiers.qualifying_bonus_days;

        if years_of_service >= i64::from(tiers.long_service_years) {
            reached_long_service = true;
            bonus_days += if category.is_senior() {
                tiers.long_service_senior_days
            } else {
                tiers.long_service_standard_days
            };
        }
    }

    let reasoning = if bonus_days == 0 {
        format!(
            "{} years of service is under the {}-year qualifying threshold, no bonus",
            years_of_service, tiers.qualifying_years
        )
    } else if reached_long_service {
        format!(
            "{} years of service reaches the {}-year long-service threshold; {} tier adds {} days on top of the qualifying {}",
            years_of_service,
            tiers.long_service_years,
            if category.is_senior() { "senior" } else { "standard" },
            bonus_days - tiers.qualifying_bonus_days,
            tiers.qualifying_bonus_days
        )
    } else {
        format!(
            "{} years of service reaches the {}-year qualifying threshold, {} bonus days",
            years_of_service, tiers.qualifying_years, bonus_days
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure_bonus".to_string(),
        rule_name: "Tenure Bonus".to_string(),
        clause_ref: tiers.clause.clone(),
        input: serde_json::json!({
            "category": category.as_code(),
            "years_of_service": years_of_service,
            "senior_tier": category.is_senior()
        }),
        output: serde_json::json!({
            "bonus_days": bonus_days,
            "long_service": reached_long_service
        }),
        reasoning,
    };

    Ok(TenureBonusResult {
        bonus_days,
        audit_step,
    })
}
