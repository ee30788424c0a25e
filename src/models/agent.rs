//! Automation agent model and related types.
//!
//! This module defines the [`AutomationAgentSpec`] struct and [`AgentType`]
//! enum describing one entry of the automation agent catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The archetype of process an automation agent handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    /// Data entry, extraction and transformation.
    DataProcessing,
    /// First-line customer enquiries and ticket triage.
    CustomerService,
    /// Stock tracking and reordering.
    Inventory,
    /// Recurring report generation.
    Reporting,
    /// Email and message drafting and routing.
    Communication,
    /// Approval chains and multi-step process orchestration.
    Workflow,
}

/// Represents an automation agent with fixed effect and cost parameters.
///
/// # Example
///
/// ```
/// use roi_engine::models::{AgentType, AutomationAgentSpec};
/// use rust_decimal::Decimal;
///
/// let agent = AutomationAgentSpec {
///     id: "data_processing".to_string(),
///     name: "Data Processing Agent".to_string(),
///     agent_type: AgentType::DataProcessing,
///     time_saving_percentage: Decimal::from(85),
///     error_reduction_percentage: Decimal::from(95),
///     productivity_increase_percentage: Decimal::from(75),
///     monthly_operating_cost: Decimal::from(2500),
///     implementation_cost: Decimal::from(15000),
///     monthly_maintenance_cost: Decimal::from(500),
/// };
/// assert_eq!(agent.monthly_running_cost(), Some(Decimal::from(3000)));
/// ```
///
/// Serialized in camelCase. The snake_case keys used by `agents.yaml` are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationAgentSpec {
    /// Unique identifier for the agent.
    pub id: String,
    /// The human-readable name of the agent.
    pub name: String,
    /// The process archetype this agent automates.
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    /// Share of working time saved, from 0 to 100.
    #[serde(alias = "time_saving_percentage")]
    pub time_saving_percentage: Decimal,
    /// Reduction in error-driven cost, from 0 to 100.
    #[serde(alias = "error_reduction_percentage")]
    pub error_reduction_percentage: Decimal,
    /// Productivity increase, from 0 to 100.
    #[serde(alias = "productivity_increase_percentage")]
    pub productivity_increase_percentage: Decimal,
    /// Recurring monthly operating cost.
    #[serde(alias = "monthly_operating_cost")]
    pub monthly_operating_cost: Decimal,
    /// One-time implementation cost.
    #[serde(alias = "implementation_cost")]
    pub implementation_cost: Decimal,
    /// Recurring monthly maintenance cost.
    #[serde(alias = "monthly_maintenance_cost")]
    pub monthly_maintenance_cost: Decimal,
}

impl AutomationAgentSpec {
    /// Returns the recurring monthly cost (operating plus maintenance), or
    /// `None` if the sum does not fit in a `Decimal`.
    pub fn monthly_running_cost(&self) -> Option<Decimal> {
        self.monthly_operating_cost
            .checked_add(self.monthly_maintenance_cost)
    }

    /// Checks that effect percentages lie in 0..=100 and costs are neither
    /// negative nor above [`MAX_MONEY_AMOUNT`](super::MAX_MONEY_AMOUNT).
    ///
    /// # Errors
    ///
    /// Returns `InvalidAgent` naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        let percentages = [
            ("time_saving_percentage", self.time_saving_percentage),
            ("error_reduction_percentage", self.error_reduction_percentage),
            (
                "productivity_increase_percentage",
                self.productivity_increase_percentage,
            ),
        ];
        let costs = [
            ("monthly_operating_cost", self.monthly_operating_cost),
            ("implementation_cost", self.implementation_cost),
            ("monthly_maintenance_cost", self.monthly_maintenance_cost),
        ];

        if let Some((field, _)) = percentages
            .iter()
            .find(|(_, value)| !super::is_percentage(*value))
        {
            return Err(self.invalid(field, "must be between 0 and 100"));
        }
        if let Some((field, _)) = costs.iter().find(|(_, value)| *value < Decimal::ZERO) {
            return Err(self.invalid(field, "must not be negative"));
        }
        if let Some((field, _)) = costs
            .iter()
            .find(|(_, value)| !super::is_supported_amount(*value))
        {
            return Err(self.invalid(field, "exceeds supported range"));
        }
        Ok(())
    }

    fn invalid(&self, field: &str, message: &str) -> EngineError {
        EngineError::InvalidAgent {
            agent_id: self.id.clone(),
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_agent() -> AutomationAgentSpec {
        AutomationAgentSpec {
            id: "data_processing".to_string(),
            name: "Data Processing Agent".to_string(),
            agent_type: AgentType::DataProcessing,
            time_saving_percentage: Decimal::from(85),
            error_reduction_percentage: Decimal::from(95),
            productivity_increase_percentage: Decimal::from(75),
            monthly_operating_cost: Decimal::from(2500),
            implementation_cost: Decimal::from(15000),
            monthly_maintenance_cost: Decimal::from(500),
        }
    }

    #[test]
    fn test_validate_accepts_valid_agent() {
        assert!(create_test_agent().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_zero_costs() {
        let mut agent = create_test_agent();
        agent.implementation_cost = Decimal::ZERO;
        agent.monthly_operating_cost = Decimal::ZERO;
        agent.monthly_maintenance_cost = Decimal::ZERO;
        assert!(agent.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_percentage_out_of_range() {
        let mut agent = create_test_agent();
        agent.error_reduction_percentage = Decimal::from(101);

        match agent.validate() {
            Err(EngineError::InvalidAgent { agent_id, field, .. }) => {
                assert_eq!(agent_id, "data_processing");
                assert_eq!(field, "error_reduction_percentage");
            }
            other => panic!("Expected InvalidAgent error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_cost() {
        let mut agent = create_test_agent();
        agent.monthly_maintenance_cost = Decimal::from(-1);

        match agent.validate() {
            Err(EngineError::InvalidAgent { field, .. }) => {
                assert_eq!(field, "monthly_maintenance_cost");
            }
            other => panic!("Expected InvalidAgent error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_cost_beyond_supported_range() {
        let mut agent = create_test_agent();
        agent.implementation_cost = Decimal::MAX;

        match agent.validate() {
            Err(EngineError::InvalidAgent { field, message, .. }) => {
                assert_eq!(field, "implementation_cost");
                assert_eq!(message, "exceeds supported range");
            }
            other => panic!("Expected InvalidAgent error, got {:?}", other),
        }
    }

    #[test]
    fn test_agent_type_serialization() {
        assert_eq!(
            serde_json::to_string(&AgentType::DataProcessing).unwrap(),
            "\"data_processing\""
        );
        assert_eq!(
            serde_json::to_string(&AgentType::CustomerService).unwrap(),
            "\"customer_service\""
        );
        assert_eq!(
            serde_json::to_string(&AgentType::Workflow).unwrap(),
            "\"workflow\""
        );
    }

    #[test]
    fn test_deserialize_agent_with_type_field() {
        let json = r#"{
            "id": "reporting",
            "name": "Reporting Agent",
            "type": "reporting",
            "time_saving_percentage": "90",
            "error_reduction_percentage": "85",
            "productivity_increase_percentage": "60",
            "monthly_operating_cost": "1200",
            "implementation_cost": "8000",
            "monthly_maintenance_cost": "200"
        }"#;

        let agent: AutomationAgentSpec = serde_json::from_str(json).unwrap();
        assert_eq!(agent.agent_type, AgentType::Reporting);
        assert_eq!(agent.implementation_cost, Decimal::from(8000));
        assert_eq!(agent.monthly_running_cost(), Some(Decimal::from(1400)));
    }

    #[test]
    fn test_agent_round_trips_in_camel_case() {
        let agent = create_test_agent();
        let json = serde_json::to_value(&agent).unwrap();

        assert_eq!(json["type"], "data_processing");
        assert_eq!(json["timeSavingPercentage"], "85");
        assert_eq!(json["monthlyMaintenanceCost"], "500");
        let parsed: AutomationAgentSpec = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, agent);
    }
}
