//! The automation agent catalog.
//!
//! This module provides the [`AgentCatalog`] type, a read-only directory of
//! automation agent definitions that scenarios select from.

use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};
use crate::models::AutomationAgentSpec;

use super::types::CatalogConfig;

const BUILTIN_AGENTS_PATH: &str = "config/roi/agents.yaml";
const BUILTIN_AGENTS_YAML: &str = include_str!("../../config/roi/agents.yaml");

/// A static directory of automation agent definitions.
///
/// The catalog never changes after construction. Agents keep the order in
/// which they were supplied.
///
/// # Example
///
/// ```
/// use roi_engine::config::AgentCatalog;
///
/// let catalog = AgentCatalog::builtin()?;
/// assert_eq!(catalog.list_agents().len(), 6);
///
/// let agent = catalog.get_agent("data_processing")?;
/// println!("{} costs {} to implement", agent.name, agent.implementation_cost);
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AgentCatalog {
    agents: Vec<AutomationAgentSpec>,
}

impl AgentCatalog {
    /// Creates a catalog from agent definitions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the list is empty, an ID appears twice, or
    /// an agent has an out-of-range percentage or a negative cost.
    pub fn new(agents: Vec<AutomationAgentSpec>) -> EngineResult<Self> {
        if agents.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "agent catalog must contain at least one agent".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for agent in &agents {
            if !seen.insert(agent.id.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate agent id '{}' in catalog", agent.id),
                });
            }
            agent.validate().map_err(|e| EngineError::InvalidConfig {
                message: e.to_string(),
            })?;
        }

        Ok(Self { agents })
    }

    /// Returns the six standard agent archetypes shipped in
    /// `config/roi/agents.yaml`.
    ///
    /// The file is embedded at compile time, so the built-in catalog and the
    /// shipped configuration cannot drift apart.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the embedded file is not a valid catalog,
    /// or `InvalidConfig` if it violates a catalog constraint.
    pub fn builtin() -> EngineResult<Self> {
        let config: CatalogConfig =
            serde_yaml::from_str(BUILTIN_AGENTS_YAML).map_err(|e| EngineError::ConfigParseError {
                path: BUILTIN_AGENTS_PATH.to_string(),
                message: e.to_string(),
            })?;
        Self::new(config.agents)
    }

    /// Returns every agent in catalog order.
    pub fn list_agents(&self) -> &[AutomationAgentSpec] {
        &self.agents
    }

    /// Gets an agent by its ID.
    ///
    /// # Errors
    ///
    /// Returns `AgentNotFound` if no agent has this ID.
    pub fn get_agent(&self, id: &str) -> EngineResult<&AutomationAgentSpec> {
        self.agents
            .iter()
            .find(|agent| agent.id == id)
            .ok_or_else(|| EngineError::AgentNotFound { id: id.to_string() })
    }

    /// Resolves a scenario's agent selection, preserving selection order.
    ///
    /// # Errors
    ///
    /// - `EmptySelection` if `ids` is empty
    /// - `DuplicateAgent` if an ID is selected twice
    /// - `AgentNotFound` for the first unknown ID
    pub fn resolve(&self, ids: &[String]) -> EngineResult<Vec<AutomationAgentSpec>> {
        if ids.is_empty() {
            return Err(EngineError::EmptySelection {
                what: "automation agent".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id.as_str()) {
                return Err(EngineError::DuplicateAgent { id: id.clone() });
            }
        }

        ids.iter()
            .map(|id| self.get_agent(id).cloned())
            .collect()
    }
}
