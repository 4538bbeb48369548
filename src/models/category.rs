//! Job category model.
//!
//! This module defines the closed set of job categories covered by the
//! annual leave policy, along with parsing from the handbook labels used
//! by the front-end selection control.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five job categories covered by the annual leave policy.
///
/// The set is closed: every category the policy knows about is a variant,
/// so the calculation core never has to handle an unrecognized category.
/// Free-form strings only exist at the API boundary, where parsing may fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    /// Retail and head-office general staff and supervisors.
    GeneralStaffSupervisor,
    /// Retail and head-office assistant managers.
    AssistantManager,
    /// Retail and head-office managers, including senior boutique managers.
    Manager,
    /// Senior flagship boutique managers and area managers.
    SeniorFlagshipAreaManager,
    /// Associate directors, directors, and above.
    AssociateDirector,
}

impl JobCategory {
    /// All categories, in policy table order.
    pub const ALL: [JobCategory; 5] = [
        JobCategory::GeneralStaffSupervisor,
        JobCategory::AssistantManager,
        JobCategory::Manager,
        JobCategory::SeniorFlagshipAreaManager,
        JobCategory::AssociateDirector,
    ];

    /// Returns the snake_case code used in configuration files and JSON.
    pub fn as_code(&self) -> &'static str {
        match self {
            JobCategory::GeneralStaffSupervisor => "general_staff_supervisor",
            JobCategory::AssistantManager => "assistant_manager",
            JobCategory::Manager => "manager",
            JobCategory::SeniorFlagshipAreaManager => "senior_flagship_area_manager",
            JobCategory::AssociateDirector => "associate_director",
        }
    }

    /// Returns the full label used in the employee handbook and the
    /// front-end selection control.
    pub fn policy_label(&self) -> &'static str {
        match self {
            JobCategory::GeneralStaffSupervisor => "Retail and HO General Staffs & Supervisors",
            JobCategory::AssistantManager => "Retail and HO Assistant Managers",
            JobCategory::Manager => {
                "Retail and HO Managers (including Senior Boutique Managers)"
            }
            JobCategory::SeniorFlagshipAreaManager => {
                "Sr. Flagship Boutique Manager/ Area Manager"
            }
            JobCategory::AssociateDirector => "Associate Directors / Directors and above",
        }
    }

    /// Parses a category from either its snake_case code or its full
    /// handbook label.
    ///
    /// Returns `None` for anything else; callers at the API boundary decide
    /// how to handle the miss.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::JobCategory;
    ///
    /// assert_eq!(
    ///     JobCategory::from_label("assistant_manager"),
    ///     Some(JobCategory::AssistantManager)
    /// );
    /// assert_eq!(
    ///     JobCategory::from_label("Retail and HO Assistant Managers"),
    ///     Some(JobCategory::AssistantManager)
    /// );
    /// assert_eq!(JobCategory::from_label("intern"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<JobCategory> {
        let label = label.trim();
        JobCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_code() == label || c.policy_label() == label)
    }

    /// Returns true for the categories whose long-service bonus is the
    /// reduced senior tier (one extra day at five years rather than three).
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::JobCategory;
    ///
    /// assert!(JobCategory::AssociateDirector.is_senior());
    /// assert!(!JobCategory::Manager.is_senior());
    /// ```
    pub fn is_senior(&self) -> bool {
        matches!(
            self,
            JobCategory::SeniorFlagshipAreaManager | JobCategory::AssociateDirector
        )
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}
