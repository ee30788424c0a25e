//! Projection request model.
//!
//! This module defines the JSON-serializable scenario input: the employees
//! affected by automation and the IDs of the selected catalog agents.

use serde::{Deserialize, Serialize};

use super::EmployeeCostRecord;

/// Input for one ROI scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    /// Employees whose work will be partially automated.
    pub employees: Vec<EmployeeCostRecord>,
    /// IDs of the catalog agents selected for this scenario.
    pub selected_agent_ids: Vec<String>,
}
