//! Cost baseline calculation functionality.
//!
//! This module validates employee cost records and computes the current
//! monthly and annual cost of the work that automation would take over.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, EmployeeCostRecord};

/// The current cost of the automatable work across all employees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBaseline {
    /// Σ monthly_salary × affected_percentage / 100.
    pub current_monthly_cost: Decimal,
    /// `current_monthly_cost` × 12.
    pub current_annual_cost: Decimal,
}

/// The result of a baseline calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct BaselineResult {
    /// The computed baseline.
    pub baseline: CostBaseline,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the current cost of the automatable share of every role.
///
/// Every record is validated before anything is summed, so an invalid
/// record anywhere in the list fails the whole call.
///
/// # Errors
///
/// - `EmptySelection` if `employees` is empty
/// - `InvalidEmployee` for the first record with a non-positive or
///   oversized salary, non-positive hours, or an affected percentage outside
///   0..=100
/// - `InvalidInput` if the summed cost exceeds the supported range
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::compute_baseline;
/// use roi_engine::models::EmployeeCostRecord;
/// use rust_decimal::Decimal;
///
/// let employees = vec![EmployeeCostRecord {
///     id: "emp_001".to_string(),
///     name: "Jonas Weber".to_string(),
///     position: "Data Clerk".to_string(),
///     monthly_salary: Decimal::from(15000),
///     hours_per_month: Decimal::from(160),
///     affected_percentage: Decimal::from(50),
/// }];
///
/// let result = compute_baseline(&employees, 1)?;
/// assert_eq!(result.baseline.current_monthly_cost, Decimal::from(7500));
/// assert_eq!(result.baseline.current_annual_cost, Decimal::from(90000));
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn compute_baseline(
    employees: &[EmployeeCostRecord],
    step_number: u32,
) -> EngineResult<BaselineResult> {
    if employees.is_empty() {
        return Err(EngineError::EmptySelection {
            what: "employee".to_string(),
        });
    }

    for employee in employees {
        employee.validate()?;
    }

    let costs = employees
        .iter()
        .map(|e| {
            e.automatable_monthly_cost()
                .ok_or_else(|| EngineError::InvalidEmployee {
                    employee_id: e.id.clone(),
                    field: "monthly_salary".to_string(),
                    message: "exceeds supported range".to_string(),
                })
        })
        .collect::<EngineResult<Vec<Decimal>>>()?;

    let current_monthly_cost = costs
        .iter()
        .try_fold(Decimal::ZERO, |total, cost| total.checked_add(*cost))
        .ok_or_else(|| EngineError::out_of_range("current_monthly_cost"))?;
    let current_annual_cost = current_monthly_cost
        .checked_mul(Decimal::from(12))
        .ok_or_else(|| EngineError::out_of_range("current_annual_cost"))?;

    let per_employee: Vec<serde_json::Value> = employees
        .iter()
        .zip(&costs)
        .map(|(e, cost)| {
            serde_json::json!({
                "employee_id": e.id,
                "monthly_salary": e.monthly_salary.normalize().to_string(),
                "affected_percentage": e.affected_percentage.normalize().to_string(),
                "automatable_monthly_cost": cost.normalize().to_string()
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "cost_baseline".to_string(),
        rule_name: "Current Cost Baseline".to_string(),
        policy_ref: "baseline".to_string(),
        input: serde_json::json!({
            "employees": per_employee
        }),
        output: serde_json::json!({
            "current_monthly_cost": current_monthly_cost.normalize().to_string(),
            "current_annual_cost": current_annual_cost.normalize().to_string()
        }),
        reasoning: format!(
            "{} employee(s): automatable cost ${}/month, ${}/year",
            employees.len(),
            current_monthly_cost.normalize(),
            current_annual_cost.normalize()
        ),
    };

    Ok(BaselineResult {
        baseline: CostBaseline {
            current_monthly_cost,
            current_annual_cost,
        },
        audit_step,
    })
}
