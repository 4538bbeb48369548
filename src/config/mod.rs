//! Configuration loading and management for the Leave Entitlement Engine.
//!
//! This module provides functionality to load the annual leave policy from
//! YAML files, including policy metadata, per-category entitlements, and
//! tenure bonus tiers.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/annual_leave").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CategoriesConfig, CategoryPolicy, LeavePolicyConfig, PolicyMetadata, TenureBonusPolicy,
};
