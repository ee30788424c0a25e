//! Payback period calculation functionality.
//!
//! This module determines how many months of net savings it takes to repay
//! the implementation cost, or flags a scenario that never pays off.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of a payback calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct PaybackResult {
    /// Months to repay the implementation cost. `None` when not recoverable.
    pub payback_months: Option<Decimal>,
    /// False when net monthly savings are zero or negative.
    pub recoverable: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the payback period in months.
///
/// When `net_monthly_savings` is positive the payback period is
/// `total_implementation_cost / net_monthly_savings`. Otherwise the
/// investment is never repaid: `payback_months` is `None` and
/// `recoverable` is false. A negative or undefined month count is never
/// produced.
///
/// # Errors
///
/// Returns `InvalidInput` if the month count does not fit in a `Decimal`,
/// which happens only for vanishingly small positive net savings.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::calculate_payback;
/// use rust_decimal::Decimal;
///
/// let result = calculate_payback(Decimal::from(12000), Decimal::from(4000), 1)?;
/// assert_eq!(result.payback_months, Some(Decimal::from(3)));
/// assert!(result.recoverable);
///
/// let result = calculate_payback(Decimal::from(12000), Decimal::from(-250), 1)?;
/// assert_eq!(result.payback_months, None);
/// assert!(!result.recoverable);
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn calculate_payback(
    total_implementation_cost: Decimal,
    net_monthly_savings: Decimal,
    step_number: u32,
) -> EngineResult<PaybackResult> {
    let input = serde_json::json!({
        "total_implementation_cost": total_implementation_cost.normalize().to_string(),
        "net_monthly_savings": net_monthly_savings.normalize().to_string()
    });

    if net_monthly_savings > Decimal::ZERO {
        let payback_months = total_implementation_cost
            .checked_div(net_monthly_savings)
            .ok_or_else(|| EngineError::out_of_range("payback_months"))?;

        let audit_step = AuditStep {
            step_number,
            rule_id: "payback_period".to_string(),
            rule_name: "Payback Period".to_string(),
            policy_ref: "payback".to_string(),
            input,
            output: serde_json::json!({
                "payback_months": payback_months.normalize().to_string(),
                "recoverable": true
            }),
            reasoning: format!(
                "${} / ${} per month = {} months",
                total_implementation_cost.normalize(),
                net_monthly_savings.round_dp(2).normalize(),
                payback_months.round_dp(2).normalize()
            ),
        };

        Ok(PaybackResult {
            payback_months: Some(payback_months),
            recoverable: true,
            audit_step,
        })
    } else {
        let audit_step = AuditStep {
            step_number,
            rule_id: "payback_period".to_string(),
            rule_name: "Payback Period".to_string(),
            policy_ref: "payback".to_string(),
            input,
            output: serde_json::json!({
                "payback_months": null,
                "recoverable": false
            }),
            reasoning: format!(
                "Not recoverable - net monthly savings of ${} never repay the implementation cost",
                net_monthly_savings.round_dp(2).normalize()
            ),
        };

        Ok(PaybackResult {
            payback_months: None,
            recoverable: false,
            audit_step,
        })
    }
}
