//! Configuration loading and management for the ROI Projection Engine.
//!
//! This module provides the automation agent catalog and the projection
//! policy, either built in or loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use roi_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/roi").unwrap();
//! for agent in config.catalog().list_agents() {
//!     println!("{} ({:?})", agent.name, agent.agent_type);
//! }
//! ```

mod catalog;
mod loader;
mod types;

pub use catalog::AgentCatalog;
pub use loader::ConfigLoader;
pub use types::{
    CatalogConfig, PROJECTION_MONTHS, PROJECTION_YEARS, PolicyConfig, ProjectionPolicy,
};
