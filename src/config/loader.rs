//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the annual
//! leave policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::JobCategory;

use super::types::{
    CategoriesConfig, CategoryPolicy, LeavePolicyConfig, PolicyMetadata, TenureBonusPolicy,
};

/// Loads and provides access to the leave policy configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query category entitlements and bonus tiers.
///
/// # Directory Structure
///
/// ```text
/// config/annual_leave/
/// ├── policy.yaml      # Policy metadata
/// ├── categories.yaml  # Per-category base and cap days
/// └── bonuses.yaml     # Tenure bonus tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::JobCategory;
///
/// let loader = ConfigLoader::load("./config/annual_leave").unwrap();
///
/// let entry = loader.get_category(JobCategory::Manager).unwrap();
/// println!("{}: {} base days", entry.name, entry.base_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LeavePolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/annual_leave")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let metadata = Self::load_yaml::<PolicyMetadata>(&policy_path)?;

        let categories_path = path.join("categories.yaml");
        let categories_config = Self::load_yaml::<CategoriesConfig>(&categories_path)?;

        let bonuses_path = path.join("bonuses.yaml");
        let bonus = Self::load_yaml::<TenureBonusPolicy>(&bonuses_path)?;

        let config = LeavePolicyConfig::new(metadata, categories_config.categories, bonus);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &LeavePolicyConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.metadata()
    }

    /// Gets the entitlement entry for a job category.
    ///
    /// Returns `CategoryNotConfigured` when the loaded policy has no entry
    /// for the category.
    pub fn get_category(&self, category: JobCategory) -> EngineResult<&CategoryPolicy> {
        self.config.category(category)
    }

    /// Returns the tenure bonus tiers.
    pub fn bonus(&self) -> &TenureBonusPolicy {
        self.config.bonus()
    }
}
