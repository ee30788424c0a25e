//! Cash-flow series calculation functionality.
//!
//! This module builds the month-by-month cumulative savings trajectory used
//! to draw the break-even chart.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CashFlowPoint};

/// The result of building a cash-flow series, including the audit step.
#[derive(Debug, Clone)]
pub struct CashFlowSeriesResult {
    /// One point per month, months 1 through `months` in order.
    pub series: Vec<CashFlowPoint>,
    /// First month whose cumulative savings are zero or positive, if any.
    pub break_even_month: Option<u32>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Builds the cumulative cash-flow series.
///
/// Cumulative savings start at `-total_implementation_cost` and grow by
/// `net_monthly_savings` every month. `roi_percent` is cumulative savings
/// over the implementation cost, or zero when that cost is zero.
///
/// # Errors
///
/// Returns `InvalidInput` if a cumulative figure or ROI percentage does not
/// fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::build_cash_flow_series;
/// use rust_decimal::Decimal;
///
/// let result = build_cash_flow_series(Decimal::from(3000), Decimal::from(1000), 60, 1)?;
/// assert_eq!(result.series.len(), 60);
/// assert_eq!(result.series[0].cumulative_savings, Decimal::from(-2000));
/// assert_eq!(result.break_even_month, Some(3));
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn build_cash_flow_series(
    total_implementation_cost: Decimal,
    net_monthly_savings: Decimal,
    months: u32,
    step_number: u32,
) -> EngineResult<CashFlowSeriesResult> {
    let mut cumulative_savings = -total_implementation_cost;
    let mut break_even_month = None;
    let mut series = Vec::with_capacity(months as usize);

    for month in 1..=months {
        cumulative_savings = cumulative_savings
            .checked_add(net_monthly_savings)
            .ok_or_else(|| EngineError::out_of_range("cumulative_savings"))?;

        if break_even_month.is_none() && cumulative_savings >= Decimal::ZERO {
            break_even_month = Some(month);
        }

        let roi_percent = if total_implementation_cost.is_zero() {
            Decimal::ZERO
        } else {
            cumulative_savings
                .checked_div(total_implementation_cost)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or_else(|| EngineError::out_of_range("roi_percent"))?
        };

        series.push(CashFlowPoint {
            month,
            cumulative_savings,
            monthly_savings: net_monthly_savings,
            roi_percent,
        });
    }

    let final_cumulative = series
        .last()
        .map(|p| p.cumulative_savings)
        .unwrap_or(-total_implementation_cost);

    let audit_step = AuditStep {
        step_number,
        rule_id: "cash_flow_series".to_string(),
        rule_name: "Cumulative Cash Flow".to_string(),
        policy_ref: "five_year_horizon".to_string(),
        input: serde_json::json!({
            "total_implementation_cost": total_implementation_cost.normalize().to_string(),
            "net_monthly_savings": net_monthly_savings.normalize().to_string(),
            "months": months
        }),
        output: serde_json::json!({
            "final_cumulative_savings": final_cumulative.normalize().to_string(),
            "break_even_month": break_even_month
        }),
        reasoning: match break_even_month {
            Some(month) => format!(
                "Cumulative savings turn non-negative in month {}, reaching ${} by month {}",
                month,
                final_cumulative.round_dp(2).normalize(),
                months
            ),
            None => format!(
                "Cumulative savings stay negative for all {} months, ending at ${}",
                months,
                final_cumulative.round_dp(2).normalize()
            ),
        },
    };

    Ok(CashFlowSeriesResult {
        series,
        break_even_month,
        audit_step,
    })
}
