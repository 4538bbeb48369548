//! Calculation logic for the Leave Entitlement Engine.
//!
//! This module contains the calculation functions for determining an annual
//! leave entitlement: base entitlement lookup, tenure bonus calculation,
//! leave cap application, and cap utilisation for the progress indicator.
//!
//! Every function is pure and synchronous; each returns its contribution to
//! the audit trace alongside its numeric result.

mod base_entitlement;
mod cap_utilisation;
mod leave_cap;
mod tenure_bonus;

pub use base_entitlement::{BaseEntitlementResult, lookup_base_entitlement};
pub use cap_utilisation::{CapUtilisationResult, calculate_cap_utilisation};
pub use leave_cap::{LeaveCapResult, apply_leave_cap};
pub use tenure_bonus::{TenureBonusResult, calculate_tenure_bonus};
