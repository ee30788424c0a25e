//! Blended effect calculation functionality.
//!
//! This module combines a selection of automation agents into a single set
//! of effect percentages and cost totals.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AutomationAgentSpec};

/// The combined effect and cost of a selection of agents.
///
/// Effect percentages are the equal-weight arithmetic mean across the
/// selection; cost fields are plain sums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlendedEffect {
    /// Mean time saving percentage.
    pub time_saving_pct: Decimal,
    /// Mean error reduction percentage.
    pub error_reduction_pct: Decimal,
    /// Mean productivity increase percentage.
    pub productivity_pct: Decimal,
    /// Summed monthly operating cost.
    pub sum_monthly_operating_cost: Decimal,
    /// Summed monthly maintenance cost.
    pub sum_monthly_maintenance_cost: Decimal,
    /// Summed one-time implementation cost.
    pub sum_implementation_cost: Decimal,
}

/// The result of blending agents, including the audit step.
#[derive(Debug, Clone)]
pub struct BlendedEffectResult {
    /// The blended effect.
    pub effect: BlendedEffect,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Blends the selected agents into mean effects and summed costs.
///
/// # Errors
///
/// - `EmptySelection` if `selected` is empty
/// - `InvalidAgent` if any agent has an out-of-range percentage or a
///   negative cost
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::blend_agents;
/// use roi_engine::config::AgentCatalog;
/// use rust_decimal::Decimal;
///
/// let catalog = AgentCatalog::builtin()?;
/// let selected = catalog.resolve(&["data_processing".to_string(), "reporting".to_string()])?;
///
/// let result = blend_agents(&selected, 1)?;
/// assert_eq!(result.effect.time_saving_pct, Decimal::new(875, 1));
/// assert_eq!(result.effect.sum_implementation_cost, Decimal::from(23000));
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn blend_agents(
    selected: &[AutomationAgentSpec],
    step_number: u32,
) -> EngineResult<BlendedEffectResult> {
    if selected.is_empty() {
        return Err(EngineError::EmptySelection {
            what: "automation agent".to_string(),
        });
    }

    for agent in selected {
        agent.validate()?;
    }

    let count = Decimal::from(selected.len() as u64);
    let total =
        |field: fn(&AutomationAgentSpec) -> Decimal| selected.iter().map(field).sum::<Decimal>();
    let mean = |field: fn(&AutomationAgentSpec) -> Decimal| total(field) / count;

    let effect = BlendedEffect {
        time_saving_pct: mean(|a| a.time_saving_percentage),
        error_reduction_pct: mean(|a| a.error_reduction_percentage),
        productivity_pct: mean(|a| a.productivity_increase_percentage),
        sum_monthly_operating_cost: total(|a| a.monthly_operating_cost),
        sum_monthly_maintenance_cost: total(|a| a.monthly_maintenance_cost),
        sum_implementation_cost: total(|a| a.implementation_cost),
    };

    let agent_ids: Vec<&str> = selected.iter().map(|a| a.id.as_str()).collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "blended_effect".to_string(),
        rule_name: "Blended Agent Effect".to_string(),
        policy_ref: "equal_weight_mean".to_string(),
        input: serde_json::json!({
            "agent_ids": agent_ids
        }),
        output: serde_json::json!({
            "time_saving_pct": effect.time_saving_pct.normalize().to_string(),
            "error_reduction_pct": effect.error_reduction_pct.normalize().to_string(),
            "productivity_pct": effect.productivity_pct.normalize().to_string(),
            "sum_monthly_operating_cost": effect.sum_monthly_operating_cost.normalize().to_string(),
            "sum_monthly_maintenance_cost": effect.sum_monthly_maintenance_cost.normalize().to_string(),
            "sum_implementation_cost": effect.sum_implementation_cost.normalize().to_string()
        }),
        reasoning: format!(
            "Mean of {} agent(s): time {}%, error {}%, productivity {}%; implementation ${}",
            selected.len(),
            effect.time_saving_pct.round_dp(2).normalize(),
            effect.error_reduction_pct.round_dp(2).normalize(),
            effect.productivity_pct.round_dp(2).normalize(),
            effect.sum_implementation_cost.normalize()
        ),
    };

    Ok(BlendedEffectResult { effect, audit_step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentCatalog;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn select(ids: &[&str]) -> Vec<AutomationAgentSpec> {
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        AgentCatalog::builtin().unwrap().resolve(&ids).unwrap()
    }

    #[test]
    fn test_single_agent_blend_is_identity() {
        let result = blend_agents(&select(&["data_processing"]), 1).unwrap();
        let effect = result.effect;

        assert_eq!(effect.time_saving_pct, dec("85"));
        assert_eq!(effect.error_reduction_pct, dec("95"));
        assert_eq!(effect.productivity_pct, dec("75"));
        assert_eq!(effect.sum_monthly_operating_cost, dec("2500"));
        assert_eq!(effect.sum_monthly_maintenance_cost, dec("500"));
        assert_eq!(effect.sum_implementation_cost, dec("15000"));
    }

    #[test]
    fn test_two_agents_use_mean_effects_and_summed_costs() {
        let result = blend_agents(&select(&["data_processing", "reporting"]), 1).unwrap();
        let effect = result.effect;

        // (85 + 90) / 2, (95 + 85) / 2, (75 + 70) / 2
        assert_eq!(effect.time_saving_pct, dec("87.5"));
        assert_eq!(effect.error_reduction_pct, dec("90"));
        assert_eq!(effect.productivity_pct, dec("72.5"));
        assert_eq!(effect.sum_monthly_operating_cost, dec("3700"));
        assert_eq!(effect.sum_monthly_maintenance_cost, dec("750"));
        assert_eq!(effect.sum_implementation_cost, dec("23000"));
    }

    #[test]
    fn test_mean_is_not_weighted_by_cost() {
        // workflow is the most expensive agent but carries the same weight
        let result = blend_agents(&select(&["communication", "workflow"]), 1).unwrap();

        assert_eq!(result.effect.time_saving_pct, dec("72.5"));
        assert_eq!(result.effect.error_reduction_pct, dec("81.5"));
    }

    #[test]
    fn test_selection_order_does_not_change_blend() {
        let forward = blend_agents(&select(&["inventory", "reporting", "workflow"]), 1).unwrap();
        let reverse = blend_agents(&select(&["workflow", "reporting", "inventory"]), 1).unwrap();

        assert_eq!(forward.effect, reverse.effect);
    }

    #[test]
    fn test_empty_selection_returns_error() {
        match blend_agents(&[], 1) {
            Err(EngineError::EmptySelection { what }) => assert_eq!(what, "automation agent"),
            other => panic!("Expected EmptySelection error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_agent_returns_error() {
        let mut agents = select(&["reporting"]);
        agents[0].productivity_increase_percentage = dec("-5");

        match blend_agents(&agents, 1) {
            Err(EngineError::InvalidAgent { agent_id, field, .. }) => {
                assert_eq!(agent_id, "reporting");
                assert_eq!(field, "productivity_increase_percentage");
            }
            other => panic!("Expected InvalidAgent error, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_step_lists_agents() {
        let result = blend_agents(&select(&["data_processing", "reporting"]), 2).unwrap();

        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "blended_effect");
        assert_eq!(
            result.audit_step.input["agent_ids"],
            serde_json::json!(["data_processing", "reporting"])
        );
        assert_eq!(
            result.audit_step.output["time_saving_pct"].as_str().unwrap(),
            "87.5"
        );
    }
}
