//! Base entitlement lookup functionality.
//!
//! This module provides the lookup of the base annual leave days granted to
//! a job category before any tenure bonus applies.

use crate::config::LeavePolicyConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, JobCategory};

/// The result of a base entitlement lookup, including the days and audit step.
#[derive(Debug, Clone)]
pub struct BaseEntitlementResult {
    /// The base leave days for the category.
    pub base_days: u32,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Looks up the base annual leave entitlement for a job category.
///
/// # Arguments
///
/// * `category` - The job category to look up
/// * `policy` - The loaded leave policy
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `BaseEntitlementResult` containing the base days and an audit
/// step, or `CategoryNotConfigured` when the loaded policy has no entry for
/// the category.
///
/// # Examples
///
/// ```no_run
/// use leave_engine::calculation::lookup_base_entitlement;
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::JobCategory;
///
/// let loader = ConfigLoader::load("./config/annual_leave").unwrap();
/// let result =
///     lookup_base_entitlement(JobCategory::Manager, loader.config(), 1).unwrap();
/// assert_eq!(result.base_days, 15);
/// ```
pub fn lookup_base_entitlement(
    category: JobCategory,
    policy: &LeavePolicyConfig,
    step_number: u32,
) -> EngineResult<BaseEntitlementResult> {
    let entry = policy.category(category)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_entitlement_lookup".to_string(),
        rule_name: "Base Entitlement Lookup".to_string(),
        clause_ref: entry.clause.clone(),
        input: serde_json::json!({
            "category": category.as_code()
        }),
        output: serde_json::json!({
            "base_days": entry.base_days
        }),
        reasoning: format!(
            "Category '{}' is granted {} base days under clause {}",
            entry.name, entry.base_days, entry.clause
        ),
    };

    Ok(BaseEntitlementResult {
        base_days: entry.base_days,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CategoryPolicy, LeavePolicyConfig, PolicyMetadata, TenureBonusPolicy};
    use crate::error::EngineError;
    use std::collections::HashMap;

    fn test_policy() -> LeavePolicyConfig {
        let metadata = PolicyMetadata {
            code: "retail_annual_leave".to_string(),
            name: "Retail Annual Leave Policy".to_string(),
            version: "2025-05-01".to_string(),
            source_document: "Employee Handbook, Annual Leave chapter".to_string(),
        };

        let mut categories = HashMap::new();
        categories.insert(
            JobCategory::GeneralStaffSupervisor,
            CategoryPolicy {
                name: "Retail and HO General Staffs & Supervisors".to_string(),
                clause: "AL-3.1".to_string(),
                base_days: 10,
                cap_days: 15,
            },
        );

        let bonus = TenureBonusPolicy {
            clause: "AL-4".to_string(),
            qualifying_years: 2,
            qualifying_bonus_days: 2,
            long_service_years: 5,
            long_service_standard_days: 3,
            long_service_senior_days: 1,
        };

        LeavePolicyConfig::new(metadata, categories, bonus)
    }

    /// BE-001: base days come from the category entry
    #[test]
    fn test_base_days_for_general_staff() {
        let policy = test_policy();

        let result =
            lookup_base_entitlement(JobCategory::GeneralStaffSupervisor, &policy, 1).unwrap();

        assert_eq!(result.base_days, 10);
        assert_eq!(result.audit_step.rule_id, "base_entitlement_lookup");
        assert_eq!(result.audit_step.clause_ref, "AL-3.1");
        assert_eq!(
            result.audit_step.input["category"].as_str().unwrap(),
            "general_staff_supervisor"
        );
        assert_eq!(result.audit_step.output["base_days"].as_u64().unwrap(), 10);
    }

    /// BE-002: missing category entry returns error
    #[test]
    fn test_missing_category_entry_returns_error() {
        let policy = test_policy();

        let result = lookup_base_entitlement(JobCategory::Manager, &policy, 1);

        match result {
            Err(EngineError::CategoryNotConfigured { code }) => {
                assert_eq!(code, "manager");
            }
            other => panic!("Expected CategoryNotConfigured, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_step_has_correct_step_number() {
        let policy = test_policy();

        let result =
            lookup_base_entitlement(JobCategory::GeneralStaffSupervisor, &policy, 4).unwrap();

        assert_eq!(result.audit_step.step_number, 4);
    }

    #[test]
    fn test_audit_reasoning_names_the_category() {
        let policy = test_policy();

        let result =
            lookup_base_entitlement(JobCategory::GeneralStaffSupervisor, &policy, 1).unwrap();

        assert!(result.audit_step.reasoning.contains("General Staffs"));
        assert!(result.audit_step.reasoning.contains("10 base days"));
    }
}
