//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the agent
//! catalog and projection policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::AutomationAgentSpec;

use super::catalog::AgentCatalog;
use super::types::{CatalogConfig, PolicyConfig, ProjectionPolicy};

/// Loads and provides access to the agent catalog and projection policy.
///
/// # Directory Structure
///
/// ```text
/// config/roi/
/// ├── agents.yaml   # Automation agent catalog
/// └── policy.yaml   # Discount rate and savings policy factors
/// ```
///
/// # Example
///
/// ```no_run
/// use roi_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roi")?;
/// let agent = loader.get_agent("reporting")?;
/// println!("{}: {}% time saving", agent.name, agent.time_saving_percentage);
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: AgentCatalog,
    policy: ProjectionPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - The catalog or policy violates a constraint (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let catalog_config = Self::load_yaml::<CatalogConfig>(&path.join("agents.yaml"))?;
        let catalog = AgentCatalog::new(catalog_config.agents)?;

        let policy_config = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;
        policy_config.policy.validate()?;

        info!(
            path = %path.display(),
            agents = catalog.list_agents().len(),
            discount_rate = %policy_config.policy.discount_rate,
            "Loaded ROI configuration"
        );

        Ok(Self {
            catalog,
            policy: policy_config.policy,
        })
    }

    /// Creates a loader from the built-in catalog and the default policy.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`AgentCatalog::builtin`].
    pub fn builtin() -> EngineResult<Self> {
        Ok(Self {
            catalog: AgentCatalog::builtin()?,
            policy: ProjectionPolicy::default(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the agent catalog.
    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }

    /// Returns the projection policy.
    pub fn policy(&self) -> &ProjectionPolicy {
        &self.policy
    }

    /// Gets an agent by its ID.
    pub fn get_agent(&self, id: &str) -> EngineResult<&AutomationAgentSpec> {
        self.catalog.get_agent(id)
    }
}
