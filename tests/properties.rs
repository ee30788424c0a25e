//! Property tests for the ROI Projection Engine.
//!
//! These tests check invariants that must hold for any valid input rather
//! than for a handful of fixed scenarios.

use proptest::prelude::*;
use rust_decimal::Decimal;

use roi_engine::calculation::{
    BlendedEffect, CostBaseline, calculate_monthly_savings, compute_baseline, project,
};
use roi_engine::config::{PROJECTION_MONTHS, ProjectionPolicy};
use roi_engine::error::EngineError;
use roi_engine::models::{EmployeeCostRecord, MAX_MONEY_AMOUNT};

// =============================================================================
// Strategies
// =============================================================================

/// Salaries between 1.00 and 50,000.00, in cents.
fn salary() -> impl Strategy<Value = Decimal> {
    (100i64..=5_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Percentages between 0.0 and 100.0, in tenths.
fn percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=1000).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Costs between 0 and 50,000, whole units.
fn cost() -> impl Strategy<Value = Decimal> {
    (0i64..=50_000).prop_map(Decimal::from)
}

fn employee() -> impl Strategy<Value = EmployeeCostRecord> {
    (salary(), percentage(), 1i64..=400).prop_map(|(monthly_salary, affected, hours)| {
        EmployeeCostRecord {
            id: "emp_prop".to_string(),
            name: "Property Employee".to_string(),
            position: "Clerk".to_string(),
            monthly_salary,
            hours_per_month: Decimal::from(hours),
            affected_percentage: affected,
        }
    })
}

fn blended_effect() -> impl Strategy<Value = BlendedEffect> {
    (
        percentage(),
        percentage(),
        percentage(),
        cost(),
        cost(),
        cost(),
    )
        .prop_map(
            |(time, error, productivity, operating, maintenance, implementation)| BlendedEffect {
                time_saving_pct: time,
                error_reduction_pct: error,
                productivity_pct: productivity,
                sum_monthly_operating_cost: operating,
                sum_monthly_maintenance_cost: maintenance,
                sum_implementation_cost: implementation,
            },
        )
}

fn baseline() -> impl Strategy<Value = CostBaseline> {
    (0i64..=10_000_000).prop_map(|cents| {
        let current_monthly_cost = Decimal::new(cents, 2);
        CostBaseline {
            current_monthly_cost,
            current_annual_cost: current_monthly_cost * Decimal::from(12),
        }
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn baseline_is_sum_of_affected_shares(employees in prop::collection::vec(employee(), 1..20)) {
        let result = compute_baseline(&employees, 1).unwrap();

        let expected: Decimal = employees
            .iter()
            .map(|e| e.monthly_salary * e.affected_percentage / Decimal::ONE_HUNDRED)
            .sum();
        let total_salary: Decimal = employees.iter().map(|e| e.monthly_salary).sum();

        prop_assert_eq!(result.baseline.current_monthly_cost, expected);
        prop_assert_eq!(
            result.baseline.current_annual_cost,
            result.baseline.current_monthly_cost * Decimal::from(12)
        );
        prop_assert!(result.baseline.current_monthly_cost >= Decimal::ZERO);
        prop_assert!(result.baseline.current_monthly_cost <= total_salary);
    }

    #[test]
    fn projection_is_deterministic(baseline in baseline(), blended in blended_effect()) {
        let policy = ProjectionPolicy::default();
        let first = project(&baseline, &blended, blended.sum_implementation_cost, &policy).unwrap();
        let second = project(&baseline, &blended, blended.sum_implementation_cost, &policy).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn net_savings_never_decrease_with_higher_effects(
        baseline in baseline(),
        blended in blended_effect(),
        bump in 0i64..=100,
    ) {
        let policy = ProjectionPolicy::default();
        let before = calculate_monthly_savings(baseline.current_monthly_cost, &blended, &policy, 1)
            .unwrap()
            .savings
            .net_monthly_savings;

        let bump = Decimal::new(bump, 1);
        let hundred = Decimal::ONE_HUNDRED;
        let variants = [
            BlendedEffect {
                time_saving_pct: (blended.time_saving_pct + bump).min(hundred),
                ..blended.clone()
            },
            BlendedEffect {
                error_reduction_pct: (blended.error_reduction_pct + bump).min(hundred),
                ..blended.clone()
            },
            BlendedEffect {
                productivity_pct: (blended.productivity_pct + bump).min(hundred),
                ..blended.clone()
            },
        ];

        for variant in &variants {
            let after = calculate_monthly_savings(baseline.current_monthly_cost, variant, &policy, 1)
                .unwrap()
                .savings
                .net_monthly_savings;
            prop_assert!(after >= before, "{} < {}", after, before);
        }
    }

    #[test]
    fn cash_flow_series_is_complete_and_ordered(baseline in baseline(), blended in blended_effect()) {
        let projection = project(
            &baseline,
            &blended,
            blended.sum_implementation_cost,
            &ProjectionPolicy::default(),
        )
        .unwrap();
        let series = &projection.cash_flow_series;

        prop_assert_eq!(series.len(), PROJECTION_MONTHS as usize);
        for (index, point) in series.iter().enumerate() {
            prop_assert_eq!(point.month, index as u32 + 1);
            prop_assert_eq!(point.monthly_savings, projection.projected_monthly_savings);
        }
        prop_assert_eq!(
            series[0].cumulative_savings,
            projection.projected_monthly_savings - projection.total_implementation_cost
        );
    }

    #[test]
    fn payback_is_absent_exactly_when_not_recoverable(
        baseline in baseline(),
        blended in blended_effect(),
    ) {
        let projection = project(
            &baseline,
            &blended,
            blended.sum_implementation_cost,
            &ProjectionPolicy::default(),
        )
        .unwrap();

        let recoverable = projection.projected_monthly_savings > Decimal::ZERO;
        prop_assert_eq!(projection.recoverable, recoverable);
        prop_assert_eq!(projection.payback_months.is_some(), recoverable);
        if let Some(months) = projection.payback_months {
            prop_assert!(months >= Decimal::ZERO);
        }
    }

    #[test]
    fn undefined_roi_exactly_when_no_implementation_cost(
        baseline in baseline(),
        blended in blended_effect(),
    ) {
        let projection = project(
            &baseline,
            &blended,
            blended.sum_implementation_cost,
            &ProjectionPolicy::default(),
        )
        .unwrap();

        prop_assert_eq!(projection.undefined_roi, blended.sum_implementation_cost.is_zero());
        if projection.undefined_roi {
            prop_assert_eq!(projection.roi_percentage, Decimal::ZERO);
        }
    }

    #[test]
    fn salaries_beyond_supported_range_are_rejected_not_overflowed(
        excess in 1i64..=1_000_000_000,
        affected in percentage(),
    ) {
        let employee = EmployeeCostRecord {
            id: "emp_large".to_string(),
            name: "Large Salary".to_string(),
            position: "Clerk".to_string(),
            monthly_salary: Decimal::from(MAX_MONEY_AMOUNT) * Decimal::from(excess)
                + Decimal::ONE,
            hours_per_month: Decimal::from(160),
            affected_percentage: affected,
        };

        let result = compute_baseline(&[employee], 1);
        prop_assert!(
            matches!(result, Err(EngineError::InvalidEmployee { .. })),
            "expected InvalidEmployee error, got {:?}",
            result
        );
    }

    #[test]
    fn zero_discount_npv_equals_five_year_savings(
        baseline in baseline(),
        blended in blended_effect(),
    ) {
        let policy = ProjectionPolicy::default().with_discount_rate(Decimal::ZERO);
        let projection = project(&baseline, &blended, blended.sum_implementation_cost, &policy)
            .unwrap();

        prop_assert_eq!(projection.net_present_value, projection.five_year_savings);
    }
}
