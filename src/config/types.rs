//! Configuration types for the annual leave policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::JobCategory;

/// Metadata about the leave policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The internal policy code (e.g., "retail_annual_leave").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// The handbook document this policy was transcribed from.
    pub source_document: String,
}

/// Per-category entitlement figures.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPolicy {
    /// The full handbook label for the category.
    pub name: String,
    /// Reference to the handbook clause defining this entry.
    pub clause: String,
    /// Entitlement days granted with zero tenure.
    pub base_days: u32,
    /// Maximum total entitlement for the category.
    pub cap_days: u32,
}

/// Categories configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesConfig {
    /// Map of job category to its entitlement figures.
    pub categories: HashMap<JobCategory, CategoryPolicy>,
}

/// Tenure bonus tiers.
///
/// Two thresholds: a qualifying tier reached by every category, and a
/// long-service tier whose size depends on whether the category is senior.
#[derive(Debug, Clone, Deserialize)]
pub struct TenureBonusPolicy {
    /// Reference to the handbook clause defining the bonus tiers.
    pub clause: String,
    /// Years of service required for the first bonus tier.
    pub qualifying_years: u32,
    /// Days granted at the qualifying tier.
    pub qualifying_bonus_days: u32,
    /// Years of service required for the long-service tier.
    pub long_service_years: u32,
    /// Extra days granted at the long-service tier for standard categories.
    pub long_service_standard_days: u32,
    /// Extra days granted at the long-service tier for senior categories.
    pub long_service_senior_days: u32,
}

/// The complete loaded leave policy.
#[derive(Debug, Clone)]
pub struct LeavePolicyConfig {
    metadata: PolicyMetadata,
    categories: HashMap<JobCategory, CategoryPolicy>,
    bonus: TenureBonusPolicy,
}

impl LeavePolicyConfig {
    /// Assembles a policy from its parts.
    pub fn new(
        metadata: PolicyMetadata,
        categories: HashMap<JobCategory, CategoryPolicy>,
        bonus: TenureBonusPolicy,
    ) -> Self {
        Self {
            metadata,
            categories,
            bonus,
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the per-category entitlement map.
    pub fn categories(&self) -> &HashMap<JobCategory, CategoryPolicy> {
        &self.categories
    }

    /// Returns the tenure bonus tiers.
    pub fn bonus(&self) -> &TenureBonusPolicy {
        &self.bonus
    }

    /// Looks up the entitlement entry for a category.
    ///
    /// A missing entry means the loaded configuration does not cover the
    /// full category set, which is a deployment problem rather than a bad
    /// request.
    pub fn category(&self, category: JobCategory) -> EngineResult<&CategoryPolicy> {
        self.categories
            .get(&category)
            .ok_or_else(|| EngineError::CategoryNotConfigured {
                code: category.as_code().to_string(),
            })
    }
}
