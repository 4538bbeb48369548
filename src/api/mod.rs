//! HTTP API module for the Leave Entitlement Engine.
//!
//! This module provides the REST API endpoints for calculating annual
//! leave entitlements and reading the policy reference table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EntitlementRequest;
pub use response::{ApiError, PolicyResponse};
pub use state::AppState;
