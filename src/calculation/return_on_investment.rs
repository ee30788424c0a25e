//! Return on investment calculation functionality.
//!
//! This module projects annual and five-year savings and expresses the
//! five-year net benefit as a percentage of the implementation cost.

use rust_decimal::Decimal;

use crate::config::PROJECTION_YEARS;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of an ROI calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ReturnOnInvestmentResult {
    /// Net monthly savings × 12.
    pub projected_annual_savings: Decimal,
    /// Five years of annual savings minus the implementation cost.
    pub five_year_savings: Decimal,
    /// Five-year savings as a percentage of the implementation cost.
    pub roi_percentage: Decimal,
    /// Set when the implementation cost is zero; `roi_percentage` is then 0.
    pub undefined_roi: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates annual savings, five-year savings and ROI.
///
/// ROI divides by the implementation cost, so a zero cost yields
/// `roi_percentage = 0` with `undefined_roi` set instead of a division.
///
/// # Errors
///
/// Returns `InvalidInput` if a figure does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::calculate_return_on_investment;
/// use rust_decimal::Decimal;
///
/// let result = calculate_return_on_investment(Decimal::from(15000), Decimal::new(613125, 2), 1)?;
/// assert_eq!(result.projected_annual_savings, Decimal::from(73575));
/// assert_eq!(result.five_year_savings, Decimal::from(352875));
/// assert_eq!(result.roi_percentage, Decimal::new(23525, 1));
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn calculate_return_on_investment(
    total_implementation_cost: Decimal,
    net_monthly_savings: Decimal,
    step_number: u32,
) -> EngineResult<ReturnOnInvestmentResult> {
    let projected_annual_savings = net_monthly_savings
        .checked_mul(Decimal::from(12))
        .ok_or_else(|| EngineError::out_of_range("projected_annual_savings"))?;
    let five_year_savings = projected_annual_savings
        .checked_mul(Decimal::from(PROJECTION_YEARS))
        .and_then(|total| total.checked_sub(total_implementation_cost))
        .ok_or_else(|| EngineError::out_of_range("five_year_savings"))?;

    let undefined_roi = total_implementation_cost.is_zero();
    let roi_percentage = if undefined_roi {
        Decimal::ZERO
    } else {
        five_year_savings
            .checked_div(total_implementation_cost)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| EngineError::out_of_range("roi_percentage"))?
    };

    let reasoning = if undefined_roi {
        format!(
            "ROI undefined - no implementation cost; five-year savings ${}",
            five_year_savings.round_dp(2).normalize()
        )
    } else {
        format!(
            "(${} x {} - ${}) / ${} = {}%",
            projected_annual_savings.round_dp(2).normalize(),
            PROJECTION_YEARS,
            total_implementation_cost.normalize(),
            total_implementation_cost.normalize(),
            roi_percentage.round_dp(2).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "return_on_investment".to_string(),
        rule_name: "Return on Investment".to_string(),
        policy_ref: "five_year_horizon".to_string(),
        input: serde_json::json!({
            "total_implementation_cost": total_implementation_cost.normalize().to_string(),
            "net_monthly_savings": net_monthly_savings.normalize().to_string(),
            "years": PROJECTION_YEARS
        }),
        output: serde_json::json!({
            "projected_annual_savings": projected_annual_savings.normalize().to_string(),
            "five_year_savings": five_year_savings.normalize().to_string(),
            "roi_percentage": roi_percentage.normalize().to_string(),
            "undefined_roi": undefined_roi
        }),
        reasoning,
    };

    Ok(ReturnOnInvestmentResult {
        projected_annual_savings,
        five_year_savings,
        roi_percentage,
        undefined_roi,
        audit_step,
    })
}
