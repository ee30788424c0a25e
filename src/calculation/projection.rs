//! Financial projection functionality.
//!
//! This module combines a cost baseline and a blended agent effect into the
//! complete [`RoiProjection`]: savings, payback, ROI, NPV, the rate-of-return
//! approximation, the 60-month cash-flow series and the chart breakdowns.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{PROJECTION_MONTHS, ProjectionPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, AuditWarning, BenefitsBreakdown, CostBreakdown, RoiProjection, WarningSeverity,
    is_percentage,
};

use super::{
    BlendedEffect, CostBaseline, approximate_rate_of_return, build_cash_flow_series,
    calculate_monthly_savings, calculate_net_present_value, calculate_payback,
    calculate_return_on_investment,
};

/// Warning code for a scenario whose net monthly savings are not positive.
pub const WARNING_NOT_RECOVERABLE: &str = "NOT_RECOVERABLE";

/// Warning code for a scenario with no implementation cost.
pub const WARNING_UNDEFINED_ROI: &str = "UNDEFINED_ROI";

/// Warning code attached whenever the rate-of-return approximation is reported.
pub const WARNING_IRR_APPROXIMATION: &str = "IRR_APPROXIMATION";

/// Builds the full ROI projection.
///
/// All inputs are validated before any figure is computed. Degenerate but
/// well-defined cases never fail: a scenario that does not pay off sets
/// `recoverable = false` with no payback period, and a zero implementation
/// cost sets `undefined_roi`. Both also add an audit warning.
///
/// The result depends only on the arguments, so identical inputs always
/// produce identical projections.
///
/// # Errors
///
/// - `InvalidInput` if a baseline figure or `total_implementation_cost` is
///   negative, a blended percentage is outside 0..=100, or a blended cost
///   is negative
/// - `InvalidInput` with "exceeds supported range" if a figure derived from
///   the inputs does not fit in a `Decimal`
/// - `InvalidConfig` if the policy is unusable
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::{BlendedEffect, CostBaseline, project};
/// use roi_engine::config::ProjectionPolicy;
/// use rust_decimal::Decimal;
///
/// let baseline = CostBaseline {
///     current_monthly_cost: Decimal::from(7500),
///     current_annual_cost: Decimal::from(90000),
/// };
/// let blended = BlendedEffect {
///     time_saving_pct: Decimal::from(85),
///     error_reduction_pct: Decimal::from(95),
///     productivity_pct: Decimal::from(75),
///     sum_monthly_operating_cost: Decimal::from(2500),
///     sum_monthly_maintenance_cost: Decimal::from(500),
///     sum_implementation_cost: Decimal::from(15000),
/// };
///
/// let projection = project(&baseline, &blended, Decimal::from(15000), &ProjectionPolicy::default())?;
/// assert_eq!(projection.projected_monthly_savings, Decimal::new(613125, 2));
/// assert_eq!(projection.roi_percentage, Decimal::new(23525, 1));
/// assert_eq!(projection.cash_flow_series.len(), 60);
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn project(
    baseline: &CostBaseline,
    blended: &BlendedEffect,
    total_implementation_cost: Decimal,
    policy: &ProjectionPolicy,
) -> EngineResult<RoiProjection> {
    validate_inputs(baseline, blended, total_implementation_cost)?;
    policy.validate()?;

    debug!(
        current_monthly_cost = %baseline.current_monthly_cost,
        time_saving_pct = %blended.time_saving_pct,
        error_reduction_pct = %blended.error_reduction_pct,
        productivity_pct = %blended.productivity_pct,
        total_implementation_cost = %total_implementation_cost,
        "Projecting ROI"
    );

    let mut step_number: u32 = 1;
    let mut trace = AuditTrace::default();

    let savings_result =
        calculate_monthly_savings(baseline.current_monthly_cost, blended, policy, step_number)?;
    let savings = savings_result.savings;
    trace.steps.push(savings_result.audit_step);
    step_number += 1;

    let payback_result = calculate_payback(
        total_implementation_cost,
        savings.net_monthly_savings,
        step_number,
    )?;
    trace.steps.push(payback_result.audit_step);
    step_number += 1;

    let roi_result = calculate_return_on_investment(
        total_implementation_cost,
        savings.net_monthly_savings,
        step_number,
    )?;
    trace.steps.push(roi_result.audit_step);
    step_number += 1;

    let npv_result = calculate_net_present_value(
        total_implementation_cost,
        roi_result.projected_annual_savings,
        policy.discount_rate,
        step_number,
    )?;
    trace.steps.push(npv_result.audit_step);
    step_number += 1;

    let irr_result = approximate_rate_of_return(
        total_implementation_cost,
        roi_result.projected_annual_savings,
        policy.irr_approx_offset_percentage,
        step_number,
    )?;
    trace.steps.push(irr_result.audit_step);
    step_number += 1;

    let cash_flow_result = build_cash_flow_series(
        total_implementation_cost,
        savings.net_monthly_savings,
        PROJECTION_MONTHS,
        step_number,
    )?;
    trace.steps.push(cash_flow_result.audit_step);

    if !payback_result.recoverable {
        warn!(
            net_monthly_savings = %savings.net_monthly_savings,
            "Projection is not recoverable"
        );
        trace.warnings.push(AuditWarning {
            code: WARNING_NOT_RECOVERABLE.to_string(),
            message: format!(
                "Net monthly savings of ${} do not cover agent running costs; \
                 the implementation cost is never repaid",
                savings.net_monthly_savings.round_dp(2).normalize()
            ),
            severity: WarningSeverity::High,
        });
    }

    if roi_result.undefined_roi {
        warn!("Projection has no implementation cost; ROI is undefined");
        trace.warnings.push(AuditWarning {
            code: WARNING_UNDEFINED_ROI.to_string(),
            message: "No implementation cost; ROI percentage is reported as 0".to_string(),
            severity: WarningSeverity::Medium,
        });
    } else {
        trace.warnings.push(AuditWarning {
            code: WARNING_IRR_APPROXIMATION.to_string(),
            message: "internal_rate_of_return_approx is a linear heuristic, not a solved IRR"
                .to_string(),
            severity: WarningSeverity::Low,
        });
    }

    let annual = |monthly: Decimal, field: &str| {
        monthly
            .checked_mul(Decimal::from(12))
            .ok_or_else(|| EngineError::out_of_range(field))
    };
    let cost_breakdown = CostBreakdown {
        implementation: total_implementation_cost,
        maintenance: annual(blended.sum_monthly_maintenance_cost, "cost_breakdown")?,
        current_operational: baseline.current_annual_cost,
        projected_operational: annual(blended.sum_monthly_operating_cost, "cost_breakdown")?,
    };
    let benefits_breakdown = BenefitsBreakdown {
        time_savings: annual(savings.time_savings_value, "benefits_breakdown")?,
        error_reduction: annual(savings.error_reduction_value, "benefits_breakdown")?,
        productivity_increase: annual(savings.productivity_value, "benefits_breakdown")?,
    };

    Ok(RoiProjection {
        current_monthly_cost: baseline.current_monthly_cost,
        current_annual_cost: baseline.current_annual_cost,
        gross_monthly_savings: savings.gross_monthly_savings,
        projected_monthly_savings: savings.net_monthly_savings,
        projected_annual_savings: roi_result.projected_annual_savings,
        total_implementation_cost,
        monthly_maintenance_cost: blended.sum_monthly_maintenance_cost,
        roi_percentage: roi_result.roi_percentage,
        undefined_roi: roi_result.undefined_roi,
        payback_months: payback_result.payback_months,
        recoverable: payback_result.recoverable,
        net_present_value: npv_result.net_present_value,
        internal_rate_of_return_approx: irr_result.internal_rate_of_return_approx,
        five_year_savings: roi_result.five_year_savings,
        cash_flow_series: cash_flow_result.series,
        cost_breakdown,
        benefits_breakdown,
        audit_trace: trace,
    })
}

fn validate_inputs(
    baseline: &CostBaseline,
    blended: &BlendedEffect,
    total_implementation_cost: Decimal,
) -> EngineResult<()> {
    let invalid = |field: &str, message: &str| EngineError::InvalidInput {
        field: field.to_string(),
        message: message.to_string(),
    };

    let money = [
        ("current_monthly_cost", baseline.current_monthly_cost),
        ("current_annual_cost", baseline.current_annual_cost),
        ("total_implementation_cost", total_implementation_cost),
        (
            "sum_monthly_operating_cost",
            blended.sum_monthly_operating_cost,
        ),
        (
            "sum_monthly_maintenance_cost",
            blended.sum_monthly_maintenance_cost,
        ),
        ("sum_implementation_cost", blended.sum_implementation_cost),
    ];
    if let Some((field, _)) = money.iter().find(|(_, value)| *value < Decimal::ZERO) {
        return Err(invalid(field, "must not be negative"));
    }

    let percentages = [
        ("time_saving_pct", blended.time_saving_pct),
        ("error_reduction_pct", blended.error_reduction_pct),
        ("productivity_pct", blended.productivity_pct),
    ];
    if let Some((field, _)) = percentages
        .iter()
        .find(|(_, value)| !is_percentage(*value))
    {
        return Err(invalid(field, "must be between 0 and 100"));
    }

    Ok(())
}
