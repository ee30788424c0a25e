//! End-to-end scenario projection.
//!
//! This module runs a [`ProjectionRequest`] through every stage: baseline,
//! agent resolution, blending and projection.

use tracing::{info, warn};

use crate::config::{AgentCatalog, ProjectionPolicy};
use crate::error::EngineResult;
use crate::models::{AuditTrace, ProjectionRequest, RoiProjection};

use super::{blend_agents, compute_baseline, project};

/// Projects ROI for a scenario request against an agent catalog.
///
/// The implementation cost is the summed implementation cost of the
/// selected agents. The returned audit trace starts with the baseline and
/// blending steps, followed by the projection steps.
///
/// # Errors
///
/// Fails before any figure is produced with:
/// - `EmptySelection` if there are no employees or no selected agents
/// - `InvalidEmployee` for an invalid employee record
/// - `DuplicateAgent` if an agent is selected twice
/// - `AgentNotFound` if a selected ID is not in the catalog
/// - `InvalidInput` if a derived figure exceeds the supported range
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::project_scenario;
/// use roi_engine::config::ConfigLoader;
/// use roi_engine::models::ProjectionRequest;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin()?;
/// let request: ProjectionRequest = serde_json::from_str(r#"{
///     "employees": [{
///         "id": "emp_001",
///         "name": "Jonas Weber",
///         "position": "Data Clerk",
///         "monthlySalary": "15000",
///         "affectedPercentage": "50"
///     }],
///     "selectedAgentIds": ["data_processing"]
/// }"#).unwrap();
///
/// let projection = project_scenario(&request, config.catalog(), config.policy())?;
/// assert!(projection.recoverable);
/// assert_eq!(projection.roi_percentage, Decimal::new(23525, 1));
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn project_scenario(
    request: &ProjectionRequest,
    catalog: &AgentCatalog,
    policy: &ProjectionPolicy,
) -> EngineResult<RoiProjection> {
    let outcome = run_scenario(request, catalog, policy);

    match &outcome {
        Ok(projection) => info!(
            employees = request.employees.len(),
            agents = request.selected_agent_ids.len(),
            net_monthly_savings = %projection.projected_monthly_savings,
            roi_percentage = %projection.roi_percentage,
            recoverable = projection.recoverable,
            "ROI projection computed"
        ),
        Err(err) => warn!(
            employees = request.employees.len(),
            agents = request.selected_agent_ids.len(),
            error = %err,
            "ROI projection rejected"
        ),
    }

    outcome
}

fn run_scenario(
    request: &ProjectionRequest,
    catalog: &AgentCatalog,
    policy: &ProjectionPolicy,
) -> EngineResult<RoiProjection> {
    let baseline_result = compute_baseline(&request.employees, 1)?;
    let selected = catalog.resolve(&request.selected_agent_ids)?;
    let blended_result = blend_agents(&selected, 2)?;

    let mut projection = project(
        &baseline_result.baseline,
        &blended_result.effect,
        blended_result.effect.sum_implementation_cost,
        policy,
    )?;

    let projection_trace = std::mem::take(&mut projection.audit_trace);
    let mut trace = AuditTrace::default();
    trace.extend_steps([baseline_result.audit_step, blended_result.audit_step]);
    trace.extend_steps(projection_trace.steps);
    trace.warnings = projection_trace.warnings;
    projection.audit_trace = trace;

    Ok(projection)
}
