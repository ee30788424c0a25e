//! Monthly savings calculation functionality.
//!
//! This module turns the current cost baseline and a blended agent effect
//! into gross and net monthly savings.

use rust_decimal::Decimal;

use crate::config::ProjectionPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::BlendedEffect;

/// The monthly savings components of a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySavings {
    /// Value of working time saved per month.
    pub time_savings_value: Decimal,
    /// Value of avoided error-driven cost per month.
    pub error_reduction_value: Decimal,
    /// Realised value of the productivity increase per month.
    pub productivity_value: Decimal,
    /// Sum of the three components.
    pub gross_monthly_savings: Decimal,
    /// Gross savings minus agent operating and maintenance costs. May be negative.
    pub net_monthly_savings: Decimal,
}

/// The result of a monthly savings calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct MonthlySavingsResult {
    /// The computed savings.
    pub savings: MonthlySavings,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates gross and net monthly savings.
///
/// - time savings = cost × time% / 100
/// - error reduction = cost × error share × error% / 100
/// - productivity = cost × productivity% / 100 × realisation share
///
/// The net figure subtracts the summed operating and maintenance costs and
/// is allowed to go negative.
///
/// # Errors
///
/// Returns `InvalidInput` if a component does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::{blend_agents, calculate_monthly_savings};
/// use roi_engine::config::{AgentCatalog, ProjectionPolicy};
/// use rust_decimal::Decimal;
///
/// let agents = AgentCatalog::builtin()?.resolve(&["data_processing".to_string()])?;
/// let blended = blend_agents(&agents, 1)?.effect;
///
/// let result = calculate_monthly_savings(
///     Decimal::from(7500),
///     &blended,
///     &ProjectionPolicy::default(),
///     1,
/// )?;
/// assert_eq!(result.savings.net_monthly_savings, Decimal::new(613125, 2));
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn calculate_monthly_savings(
    current_monthly_cost: Decimal,
    blended: &BlendedEffect,
    policy: &ProjectionPolicy,
    step_number: u32,
) -> EngineResult<MonthlySavingsResult> {
    let hundred = Decimal::ONE_HUNDRED;
    let time_savings_value = current_monthly_cost
        .checked_mul(blended.time_saving_pct)
        .map(|value| value / hundred)
        .ok_or_else(|| EngineError::out_of_range("time_savings_value"))?;
    let error_reduction_value = current_monthly_cost
        .checked_mul(policy.error_cost_share)
        .and_then(|value| value.checked_mul(blended.error_reduction_pct))
        .map(|value| value / hundred)
        .ok_or_else(|| EngineError::out_of_range("error_reduction_value"))?;
    let productivity_value = current_monthly_cost
        .checked_mul(blended.productivity_pct)
        .and_then(|value| (value / hundred).checked_mul(policy.productivity_realization))
        .ok_or_else(|| EngineError::out_of_range("productivity_value"))?;

    let gross_monthly_savings = time_savings_value
        .checked_add(error_reduction_value)
        .and_then(|value| value.checked_add(productivity_value))
        .ok_or_else(|| EngineError::out_of_range("gross_monthly_savings"))?;
    let running_cost = blended
        .sum_monthly_operating_cost
        .checked_add(blended.sum_monthly_maintenance_cost)
        .ok_or_else(|| EngineError::out_of_range("monthly_running_cost"))?;
    let net_monthly_savings = gross_monthly_savings
        .checked_sub(running_cost)
        .ok_or_else(|| EngineError::out_of_range("net_monthly_savings"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_savings".to_string(),
        rule_name: "Monthly Savings".to_string(),
        policy_ref: "error_cost_share, productivity_realization".to_string(),
        input: serde_json::json!({
            "current_monthly_cost": current_monthly_cost.normalize().to_string(),
            "time_saving_pct": blended.time_saving_pct.normalize().to_string(),
            "error_reduction_pct": blended.error_reduction_pct.normalize().to_string(),
            "productivity_pct": blended.productivity_pct.normalize().to_string(),
            "error_cost_share": policy.error_cost_share.normalize().to_string(),
            "productivity_realization": policy.productivity_realization.normalize().to_string(),
            "monthly_running_cost": running_cost.normalize().to_string()
        }),
        output: serde_json::json!({
            "time_savings_value": time_savings_value.normalize().to_string(),
            "error_reduction_value": error_reduction_value.normalize().to_string(),
            "productivity_value": productivity_value.normalize().to_string(),
            "gross_monthly_savings": gross_monthly_savings.normalize().to_string(),
            "net_monthly_savings": net_monthly_savings.normalize().to_string()
        }),
        reasoning: format!(
            "${} + ${} + ${} = ${} gross - ${} running cost = ${} net per month",
            time_savings_value.round_dp(2).normalize(),
            error_reduction_value.round_dp(2).normalize(),
            productivity_value.round_dp(2).normalize(),
            gross_monthly_savings.round_dp(2).normalize(),
            running_cost.round_dp(2).normalize(),
            net_monthly_savings.round_dp(2).normalize()
        ),
    };

    Ok(MonthlySavingsResult {
        savings: MonthlySavings {
            time_savings_value,
            error_reduction_value,
            productivity_value,
            gross_monthly_savings,
            net_monthly_savings,
        },
        audit_step,
    })
}
