//! Leave cap application functionality.
//!
//! This module applies the per-category cap to the sum of base entitlement
//! and tenure bonus.

use crate::config::LeavePolicyConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, JobCategory};

/// The result of applying the leave cap, including the total and audit step.
#[derive(Debug, Clone)]
pub struct LeaveCapResult {
    /// The capped total entitlement in days.
    pub total_days: u32,
    /// The cap for the category.
    pub cap_days: u32,
    /// Whether the cap actually bound the total.
    pub capped: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the category cap: `total = min(base + bonus, cap)`.
///
/// The cap is independent of tenure; however many bonus days an employee has
/// unlocked, the total never exceeds the category maximum.
///
/// # Arguments
///
/// * `category` - The job category whose cap applies
/// * `base_days` - The base entitlement
/// * `bonus_days` - The tenure bonus
/// * `policy` - The loaded leave policy
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `LeaveCapResult`, or `CategoryNotConfigured` when the loaded
/// policy has no entry for the category.
pub fn apply_leave_cap(
    category: JobCategory,
    base_days: u32,
    bonus_days: u32,
    policy: &LeavePolicyConfig,
    step_number: u32,
) -> EngineResult<LeaveCapResult> {
    let entry = policy.category(category)?;
    let cap_days = entry.cap_days;

    let uncapped = base_days + bonus_days;
    let total_days = uncapped.min(cap_days);
    let capped = uncapped > cap_days;

    let reasoning = if capped {
        format!(
            "{} base + {} bonus = {} days exceeds the {}-day cap, total held at {}",
            base_days, bonus_days, uncapped, cap_days, total_days
        )
    } else {
        format!(
            "{} base + {} bonus = {} days is within the {}-day cap",
            base_days, bonus_days, uncapped, cap_days
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_cap".to_string(),
        rule_name: "Leave Cap".to_string(),
        clause_ref: entry.clause.clone(),
        input: serde_json::json!({
            "category": category.as_code(),
            "base_days": base_days,
            "bonus_days": bonus_days,
            "cap_days": cap_days
        }),
        output: serde_json::json!({
            "total_days": total_days,
            "capped": capped
        }),
        reasoning,
    };

    Ok(LeaveCapResult {
        total_days,
        cap_days,
        capped,
        audit_step,
    })
}
