//! Projection result models for the ROI Projection Engine.
//!
//! This module contains the [`RoiProjection`] type and its associated
//! structures that capture all outputs of a projection, including the
//! 60-month cash-flow series, the cost and benefit breakdowns for charting,
//! and the audit trace of every calculation stage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of the projected cash-flow trajectory.
///
/// # Example
///
/// ```
/// use roi_engine::models::CashFlowPoint;
/// use rust_decimal::Decimal;
///
/// let point = CashFlowPoint {
///     month: 1,
///     cumulative_savings: Decimal::from(-8868),
///     monthly_savings: Decimal::from(6132),
///     roi_percent: Decimal::from(-59),
/// };
/// assert_eq!(point.month, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPoint {
    /// Month index, starting at 1.
    pub month: u32,
    /// Net savings accumulated so far, starting from minus the implementation cost.
    pub cumulative_savings: Decimal,
    /// Net savings realised in this month.
    pub monthly_savings: Decimal,
    /// Cumulative savings as a percentage of the implementation cost.
    pub roi_percent: Decimal,
}

/// Annualised cost buckets for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// One-time implementation cost.
    pub implementation: Decimal,
    /// Annual maintenance cost of the selected agents.
    pub maintenance: Decimal,
    /// Annual cost of the automatable work today.
    pub current_operational: Decimal,
    /// Annual operating cost of the selected agents.
    pub projected_operational: Decimal,
}

/// Annualised benefit buckets for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsBreakdown {
    /// Annual value of saved working time.
    pub time_savings: Decimal,
    /// Annual value of avoided error-driven cost.
    pub error_reduction: Decimal,
    /// Annual realised value of the productivity increase.
    pub productivity_increase: Decimal,
}

/// A single step in the audit trace recording a calculation stage.
///
/// Each step captures the input, output, and reasoning for one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the projection policy item behind this rule.
    pub policy_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// Severity of an audit warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational only.
    Low,
    /// The figure needs context before it is shown to a client.
    Medium,
    /// The scenario does not pay off.
    High,
}

/// A warning generated during projection.
///
/// Warnings flag figures that are well-defined but need special rendering,
/// such as a scenario that never recovers its investment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

/// The complete audit trace for a projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during projection.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Appends steps, renumbering them to continue this trace's sequence.
    pub fn extend_steps(&mut self, steps: impl IntoIterator<Item = AuditStep>) {
        for mut step in steps {
            step.step_number = self.steps.len() as u32 + 1;
            self.steps.push(step);
        }
    }

    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// The complete ROI projection for one scenario.
///
/// A projection is a pure function of its inputs: it carries no timestamps
/// or generated identifiers, so identical inputs serialize to identical
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    /// Monthly cost of the automatable work today.
    pub current_monthly_cost: Decimal,
    /// Annual cost of the automatable work today.
    pub current_annual_cost: Decimal,
    /// Monthly savings before agent running costs.
    pub gross_monthly_savings: Decimal,
    /// Monthly savings net of agent operating and maintenance costs.
    pub projected_monthly_savings: Decimal,
    /// Net monthly savings times twelve.
    pub projected_annual_savings: Decimal,
    /// One-time implementation cost of the selected agents.
    pub total_implementation_cost: Decimal,
    /// Aggregate monthly maintenance cost of the selected agents.
    pub monthly_maintenance_cost: Decimal,
    /// Five-year net benefit as a percentage of the implementation cost.
    ///
    /// Zero when `undefined_roi` is set.
    pub roi_percentage: Decimal,
    /// Set when the implementation cost is zero and ROI has no meaning.
    pub undefined_roi: bool,
    /// Months until cumulative savings repay the implementation cost.
    ///
    /// `None` when the scenario never recovers its investment.
    pub payback_months: Option<Decimal>,
    /// False when net monthly savings are zero or negative.
    pub recoverable: bool,
    /// Net present value over five years at the policy discount rate.
    pub net_present_value: Decimal,
    /// Linear heuristic: annual savings over implementation cost, in
    /// percent, minus a fixed offset.
    ///
    /// This is NOT an internal rate of return. No root of the NPV function
    /// is searched for; treat it as a rough indicator only.
    pub internal_rate_of_return_approx: Decimal,
    /// Five years of net savings minus the implementation cost.
    pub five_year_savings: Decimal,
    /// Exactly 60 monthly points, months 1 through 60 in order.
    pub cash_flow_series: Vec<CashFlowPoint>,
    /// Annualised cost buckets.
    pub cost_breakdown: CostBreakdown,
    /// Annualised benefit buckets.
    pub benefits_breakdown: BenefitsBreakdown,
    /// Audit trace of every calculation stage.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(rule_id: &str, step_number: u32) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_id.to_string(),
            policy_ref: "test".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: String::new(),
        }
    }

    #[test]
    fn test_extend_steps_renumbers_sequentially() {
        let mut trace = AuditTrace::default();
        trace.extend_steps(vec![step("baseline", 1)]);
        trace.extend_steps(vec![step("savings", 1), step("payback", 2)]);

        let numbers: Vec<u32> = trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(trace.steps[2].rule_id, "payback");
    }

    #[test]
    fn test_has_warning() {
        let trace = AuditTrace {
            steps: vec![],
            warnings: vec![AuditWarning {
                code: "NOT_RECOVERABLE".to_string(),
                message: "never pays off".to_string(),
                severity: WarningSeverity::High,
            }],
        };
        assert!(trace.has_warning("NOT_RECOVERABLE"));
        assert!(!trace.has_warning("UNDEFINED_ROI"));
    }

    #[test]
    fn test_warning_severity_serialization() {
        assert_eq!(
            serde_json::to_string(&WarningSeverity::Medium).unwrap(),
            "\"medium\""
        );
    }

    #[test]
    fn test_cash_flow_point_serializes_decimals_as_strings() {
        let point = CashFlowPoint {
            month: 3,
            cumulative_savings: Decimal::new(339375, 2),
            monthly_savings: Decimal::new(613125, 2),
            roi_percent: Decimal::new(22625, 3),
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["month"], 3);
        assert_eq!(json["cumulativeSavings"], "3393.75");
        assert_eq!(json["roiPercent"], "22.625");
    }
}
