//! Error types for the ROI Projection Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a projection.
//! Numeric degeneracies (zero implementation cost, non-positive net savings)
//! are never errors; they are reported as flags on the projection itself.

use thiserror::Error;

/// The main error type for the ROI Projection Engine.
///
/// # Example
///
/// ```
/// use roi_engine::error::EngineError;
///
/// let error = EngineError::AgentNotFound {
///     id: "quantum_agent".to_string(),
/// };
/// assert_eq!(error.to_string(), "Automation agent not found: quantum_agent");
/// assert!(!error.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violates a catalog or policy constraint.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated constraint.
        message: String,
    },

    /// A required collection (employees or selected agents) was empty.
    #[error("At least one {what} is required")]
    EmptySelection {
        /// What was missing (e.g. "employee", "automation agent").
        what: String,
    },

    /// An employee cost record was invalid.
    #[error("Invalid employee '{employee_id}' field '{field}': {message}")]
    InvalidEmployee {
        /// The ID of the invalid employee.
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An automation agent definition was invalid.
    #[error("Invalid agent '{agent_id}' field '{field}': {message}")]
    InvalidAgent {
        /// The ID of the invalid agent.
        agent_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The same agent was selected more than once in a scenario.
    #[error("Automation agent selected more than once: {id}")]
    DuplicateAgent {
        /// The duplicated agent ID.
        id: String,
    },

    /// A direct input to a calculation stage was out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// A selected agent ID is not present in the catalog.
    #[error("Automation agent not found: {id}")]
    AgentNotFound {
        /// The agent ID that was not found.
        id: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by malformed or empty caller input.
    ///
    /// These are raised before any computation proceeds; catalog lookups
    /// and configuration failures are not part of this class.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::EmptySelection { .. }
                | EngineError::InvalidEmployee { .. }
                | EngineError::InvalidAgent { .. }
                | EngineError::DuplicateAgent { .. }
                | EngineError::InvalidInput { .. }
        )
    }

    /// Builds the `InvalidInput` error for a figure too large to represent.
    pub(crate) fn out_of_range(field: &str) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: "exceeds supported range".to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
