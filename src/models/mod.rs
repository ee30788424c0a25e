//! Core data models for the ROI Projection Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod agent;
mod employee;
mod projection;
mod request;

pub use agent::{AgentType, AutomationAgentSpec};
pub use employee::{DEFAULT_HOURS_PER_MONTH, EmployeeCostRecord};
pub use projection::{
    AuditStep, AuditTrace, AuditWarning, BenefitsBreakdown, CashFlowPoint, CostBreakdown,
    RoiProjection, WarningSeverity,
};
pub use request::ProjectionRequest;

use rust_decimal::Decimal;

/// Largest money amount accepted on any single input field.
pub const MAX_MONEY_AMOUNT: i64 = 1_000_000_000_000;

/// Returns true if `value` lies in the closed range 0..=100.
pub(crate) fn is_percentage(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED
}

/// Returns true if `value` does not exceed [`MAX_MONEY_AMOUNT`].
pub(crate) fn is_supported_amount(value: Decimal) -> bool {
    value <= Decimal::from(MAX_MONEY_AMOUNT)
}
