//! Employee cost record model.
//!
//! This module defines the [`EmployeeCostRecord`] struct describing one
//! employee whose work will be partially automated in a scenario.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The number of working hours per month assumed when none is given.
pub const DEFAULT_HOURS_PER_MONTH: u32 = 160;

fn default_hours_per_month() -> Decimal {
    Decimal::from(DEFAULT_HOURS_PER_MONTH)
}

/// Represents an employee whose role is partially automatable.
///
/// Records are created by the caller per scenario and are never mutated by
/// the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCostRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's name.
    pub name: String,
    /// The employee's position or job title.
    pub position: String,
    /// Gross monthly salary. Must be greater than zero.
    pub monthly_salary: Decimal,
    /// Working hours per month. Must be greater than zero.
    #[serde(default = "default_hours_per_month")]
    pub hours_per_month: Decimal,
    /// Share of the role that is automatable, from 0 to 100.
    pub affected_percentage: Decimal,
}

impl EmployeeCostRecord {
    /// Returns the derived hourly rate (`monthly_salary / hours_per_month`).
    ///
    /// Returns `None` when `hours_per_month` is zero or the rate is out of
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use roi_engine::models::EmployeeCostRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeCostRecord {
    ///     id: "emp_001".to_string(),
    ///     name: "Anna Schmidt".to_string(),
    ///     position: "Accountant".to_string(),
    ///     monthly_salary: Decimal::from(4800),
    ///     hours_per_month: Decimal::from(160),
    ///     affected_percentage: Decimal::from(40),
    /// };
    /// assert_eq!(employee.hourly_rate(), Some(Decimal::from(30)));
    /// ```
    pub fn hourly_rate(&self) -> Option<Decimal> {
        self.monthly_salary.checked_div(self.hours_per_month)
    }

    /// Checks salary, hours and affected percentage.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` if `monthly_salary` or `hours_per_month` is
    /// not greater than zero, `monthly_salary` exceeds
    /// [`MAX_MONEY_AMOUNT`](super::MAX_MONEY_AMOUNT), or `affected_percentage`
    /// is outside 0..=100.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |field: &str, message: &str| EngineError::InvalidEmployee {
            employee_id: self.id.clone(),
            field: field.to_string(),
            message: message.to_string(),
        };

        if self.monthly_salary <= Decimal::ZERO {
            return Err(invalid("monthly_salary", "must be greater than zero"));
        }
        if !super::is_supported_amount(self.monthly_salary) {
            return Err(invalid("monthly_salary", "exceeds supported range"));
        }
        if self.hours_per_month <= Decimal::ZERO {
            return Err(invalid("hours_per_month", "must be greater than zero"));
        }
        if !super::is_percentage(self.affected_percentage) {
            return Err(invalid("affected_percentage", "must be between 0 and 100"));
        }
        Ok(())
    }

    /// Returns the monthly cost of the automatable share of this role.
    ///
    /// Returns `None` if the product does not fit in a `Decimal`.
    pub fn automatable_monthly_cost(&self) -> Option<Decimal> {
        self.monthly_salary
            .checked_mul(self.affected_percentage)
            .map(|cost| cost / Decimal::ONE_HUNDRED)
    }
}
