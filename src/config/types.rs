//! Configuration types for ROI projection.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AutomationAgentSpec, is_percentage};

/// Number of years covered by a projection.
pub const PROJECTION_YEARS: u32 = 5;

/// Number of months in the cash-flow series.
pub const PROJECTION_MONTHS: u32 = PROJECTION_YEARS * 12;

/// Fixed policy factors applied by the financial projector.
///
/// The defaults are the firm's standing policy and are what
/// `policy.yaml` ships with. Other values exist for what-if analysis and
/// tests (e.g. a 0% discount rate).
///
/// # Example
///
/// ```
/// use roi_engine::config::ProjectionPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = ProjectionPolicy::default();
/// assert_eq!(policy.discount_rate, Decimal::new(10, 2));
/// assert_eq!(policy.error_cost_share, Decimal::new(15, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPolicy {
    /// Annual discount rate for NPV as a fraction (0.10 = 10%).
    pub discount_rate: Decimal,
    /// Share of current cost attributable to errors (0.15).
    pub error_cost_share: Decimal,
    /// Share of a productivity gain realised as savings (0.30).
    pub productivity_realization: Decimal,
    /// Percentage points subtracted by the IRR approximation (10).
    pub irr_approx_offset_percentage: Decimal,
}

impl Default for ProjectionPolicy {
    fn default() -> Self {
        Self {
            discount_rate: Decimal::new(10, 2),
            error_cost_share: Decimal::new(15, 2),
            productivity_realization: Decimal::new(30, 2),
            irr_approx_offset_percentage: Decimal::from(10),
        }
    }
}

impl ProjectionPolicy {
    /// Returns a copy of this policy with a different discount rate.
    pub fn with_discount_rate(mut self, discount_rate: Decimal) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    /// Checks that every factor is usable.
    ///
    /// The discount rate and the two shares must lie in 0..=1, and the IRR
    /// offset in 0..=100.
    pub fn validate(&self) -> EngineResult<()> {
        let is_share = |value: Decimal| value >= Decimal::ZERO && value <= Decimal::ONE;

        if self.discount_rate < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!("discount_rate {} must not be negative", self.discount_rate),
            });
        }
        if self.discount_rate > Decimal::ONE {
            return Err(EngineError::InvalidConfig {
                message: format!("discount_rate {} must not exceed 1", self.discount_rate),
            });
        }
        if !is_percentage(self.irr_approx_offset_percentage) {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "irr_approx_offset_percentage {} must be between 0 and 100",
                    self.irr_approx_offset_percentage
                ),
            });
        }
        if !is_share(self.error_cost_share) {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "error_cost_share {} must be between 0 and 1",
                    self.error_cost_share
                ),
            });
        }
        if !is_share(self.productivity_realization) {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "productivity_realization {} must be between 0 and 1",
                    self.productivity_realization
                ),
            });
        }
        Ok(())
    }
}

/// Agent catalog file structure (`agents.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// The agent definitions, in display order.
    pub agents: Vec<AutomationAgentSpec>,
}

/// Policy file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// The projection policy factors.
    pub policy: ProjectionPolicy,
}
