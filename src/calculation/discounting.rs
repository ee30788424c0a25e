//! Discounted cash-flow calculation functionality.
//!
//! This module computes the five-year net present value of a projection and
//! the linear rate-of-return heuristic reported alongside it.

use rust_decimal::Decimal;

use crate::config::PROJECTION_YEARS;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of an NPV calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct NetPresentValueResult {
    /// The net present value.
    pub net_present_value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of the rate-of-return approximation, including the audit step.
#[derive(Debug, Clone)]
pub struct RateOfReturnApproxResult {
    /// The approximated rate, in percent.
    pub internal_rate_of_return_approx: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the discount factors `(1 + rate)^year` for years `1..=years`.
///
/// Factors are built by repeated multiplication, so a zero rate yields
/// exactly one for every year.
///
/// # Errors
///
/// Returns `InvalidInput` if a factor does not fit in a `Decimal`.
pub fn discount_factors(discount_rate: Decimal, years: u32) -> EngineResult<Vec<Decimal>> {
    let growth = Decimal::ONE
        .checked_add(discount_rate)
        .ok_or_else(|| EngineError::out_of_range("discount_rate"))?;
    let mut factor = Decimal::ONE;
    (1..=years)
        .map(|_| {
            factor = factor
                .checked_mul(growth)
                .ok_or_else(|| EngineError::out_of_range("discount_factor"))?;
            Ok(factor)
        })
        .collect()
}

/// Calculates the five-year net present value.
///
/// `NPV = -implementation + Σ annual_savings / (1 + rate)^year` for
/// years 1 through 5. The implementation cost is treated as paid at the
/// start of year 1 and savings as arriving at each year end.
///
/// # Errors
///
/// Returns `InvalidInput` if a discounted figure does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::calculate_net_present_value;
/// use rust_decimal::Decimal;
///
/// // Undiscounted: 5 x 1000 - 2000
/// let result =
///     calculate_net_present_value(Decimal::from(2000), Decimal::from(1000), Decimal::ZERO, 1)?;
/// assert_eq!(result.net_present_value, Decimal::from(3000));
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn calculate_net_present_value(
    total_implementation_cost: Decimal,
    projected_annual_savings: Decimal,
    discount_rate: Decimal,
    step_number: u32,
) -> EngineResult<NetPresentValueResult> {
    let factors = discount_factors(discount_rate, PROJECTION_YEARS)?;
    let discounted = factors
        .iter()
        .map(|factor| projected_annual_savings.checked_div(*factor))
        .collect::<Option<Vec<Decimal>>>()
        .ok_or_else(|| EngineError::out_of_range("discounted_savings"))?;
    let net_present_value = discounted
        .iter()
        .try_fold(-total_implementation_cost, |total, value| {
            total.checked_add(*value)
        })
        .ok_or_else(|| EngineError::out_of_range("net_present_value"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_present_value".to_string(),
        rule_name: "Net Present Value".to_string(),
        policy_ref: "discount_rate".to_string(),
        input: serde_json::json!({
            "total_implementation_cost": total_implementation_cost.normalize().to_string(),
            "projected_annual_savings": projected_annual_savings.normalize().to_string(),
            "discount_rate": discount_rate.normalize().to_string(),
            "years": PROJECTION_YEARS
        }),
        output: serde_json::json!({
            "discounted_savings": discounted
                .iter()
                .map(|d| d.round_dp(2).normalize().to_string())
                .collect::<Vec<_>>(),
            "net_present_value": net_present_value.normalize().to_string()
        }),
        reasoning: format!(
            "-${} + {} years of ${} discounted at {}% = ${}",
            total_implementation_cost.normalize(),
            PROJECTION_YEARS,
            projected_annual_savings.round_dp(2).normalize(),
            (discount_rate * Decimal::ONE_HUNDRED).normalize(),
            net_present_value.round_dp(2).normalize()
        ),
    };

    Ok(NetPresentValueResult {
        net_present_value,
        audit_step,
    })
}

/// Approximates a rate of return with a linear heuristic.
///
/// `annual_savings / implementation × 100 - offset`, or zero when the
/// implementation cost is zero.
///
/// This is NOT an internal rate of return: no discount rate is solved for
/// that brings NPV to zero. The figure is kept for compatibility with
/// existing quotes and must be presented as an approximation.
///
/// # Errors
///
/// Returns `InvalidInput` if the rate does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::approximate_rate_of_return;
/// use rust_decimal::Decimal;
///
/// let result =
///     approximate_rate_of_return(Decimal::from(15000), Decimal::from(73575), Decimal::from(10), 1)?;
/// assert_eq!(result.internal_rate_of_return_approx, Decimal::new(4805, 1));
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn approximate_rate_of_return(
    total_implementation_cost: Decimal,
    projected_annual_savings: Decimal,
    offset_percentage: Decimal,
    step_number: u32,
) -> EngineResult<RateOfReturnApproxResult> {
    let internal_rate_of_return_approx = if total_implementation_cost.is_zero() {
        Decimal::ZERO
    } else {
        projected_annual_savings
            .checked_div(total_implementation_cost)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|rate| rate.checked_sub(offset_percentage))
            .ok_or_else(|| EngineError::out_of_range("internal_rate_of_return_approx"))?
    };

    let reasoning = if total_implementation_cost.is_zero() {
        "No implementation cost - rate of return approximation reported as 0%".to_string()
    } else {
        format!(
            "Approximation, not a true IRR: ${} / ${} x 100 - {} = {}%",
            projected_annual_savings.round_dp(2).normalize(),
            total_implementation_cost.normalize(),
            offset_percentage.normalize(),
            internal_rate_of_return_approx.round_dp(2).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_of_return_approx".to_string(),
        rule_name: "Rate of Return Approximation".to_string(),
        policy_ref: "irr_approx_offset_percentage".to_string(),
        input: serde_json::json!({
            "total_implementation_cost": total_implementation_cost.normalize().to_string(),
            "projected_annual_savings": projected_annual_savings.normalize().to_string(),
            "offset_percentage": offset_percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "internal_rate_of_return_approx": internal_rate_of_return_approx.normalize().to_string()
        }),
        reasoning,
    };

    Ok(RateOfReturnApproxResult {
        internal_rate_of_return_approx,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_close(actual: Decimal, expected: &str) {
        let diff = (actual - dec(expected)).abs();
        assert!(
            diff < dec("0.000001"),
            "Expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_discount_factors_at_ten_percent() {
        let factors = discount_factors(dec("0.10"), 5).unwrap();
        assert_eq!(
            factors,
            vec![
                dec("1.1"),
                dec("1.21"),
                dec("1.331"),
                dec("1.4641"),
                dec("1.61051")
            ]
        );
    }

    #[test]
    fn test_discount_factors_at_zero_are_one() {
        assert!(
            discount_factors(Decimal::ZERO, 5)
                .unwrap()
                .iter()
                .all(|f| *f == Decimal::ONE)
        );
    }

    #[test]
    fn test_discount_factors_overflow_is_an_error() {
        match discount_factors(dec("100000000000000"), 5) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "discount_factor"),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_worked_scenario_npv() {
        let result =
            calculate_net_present_value(dec("15000"), dec("73575"), dec("0.10"), 1).unwrap();
        assert_close(result.net_present_value, "263907.136559226580");
    }

    #[test]
    fn test_zero_discount_npv_is_undiscounted_sum() {
        let result =
            calculate_net_present_value(dec("15000"), dec("73575"), Decimal::ZERO, 1).unwrap();

        // 73575 x 5 - 15000, exactly
        assert_eq!(result.net_present_value, dec("352875"));
    }

    #[test]
    fn test_npv_of_negative_savings() {
        let result =
            calculate_net_present_value(dec("1000"), dec("-1000"), Decimal::ZERO, 1).unwrap();
        assert_eq!(result.net_present_value, dec("-6000"));
    }

    #[test]
    fn test_npv_audit_step_lists_discounted_years() {
        let result = calculate_net_present_value(dec("0"), dec("1210"), dec("0.10"), 6).unwrap();

        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "net_present_value");
        let discounted = result.audit_step.output["discounted_savings"]
            .as_array()
            .unwrap();
        assert_eq!(discounted.len(), 5);
        assert_eq!(discounted[0].as_str().unwrap(), "1100");
        assert_eq!(discounted[1].as_str().unwrap(), "1000");
        assert!(result.audit_step.reasoning.contains("discounted at 10%"));
    }

    #[test]
    fn test_worked_scenario_rate_of_return_approx() {
        let result = approximate_rate_of_return(dec("15000"), dec("73575"), dec("10"), 1).unwrap();

        // 73575 / 15000 x 100 - 10
        assert_eq!(result.internal_rate_of_return_approx, dec("480.5"));
        assert!(result.audit_step.reasoning.contains("not a true IRR"));
    }

    #[test]
    fn test_rate_of_return_approx_zero_cost() {
        let result = approximate_rate_of_return(Decimal::ZERO, dec("73575"), dec("10"), 1).unwrap();
        assert_eq!(result.internal_rate_of_return_approx, Decimal::ZERO);
    }

    #[test]
    fn test_rate_of_return_approx_tiny_cost_is_an_error() {
        let result = approximate_rate_of_return(
            dec("0.0000000000000000000000000001"),
            dec("73575"),
            dec("10"),
            1,
        );

        match result {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "internal_rate_of_return_approx")
            }
            other => panic!(
                "Expected InvalidInput error, got {:?}",
                other.map(|r| r.internal_rate_of_return_approx)
            ),
        }
    }

    #[test]
    fn test_rate_of_return_approx_is_linear_not_solved() {
        // A true IRR for -1000 then 5 x 100 is negative; the heuristic is 100 / 1000 x 100 - 10 = 0
        let result = approximate_rate_of_return(dec("1000"), dec("100"), dec("10"), 1).unwrap();
        assert_eq!(result.internal_rate_of_return_approx, Decimal::ZERO);
    }
}
