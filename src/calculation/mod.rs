//! Calculation logic for the ROI Projection Engine.
//!
//! This module contains every stage of an ROI projection: the current cost
//! baseline of the affected employees, blending of the selected automation
//! agents, monthly savings, payback period, return on investment, net present
//! value, the rate-of-return approximation, the 60-month cash-flow series,
//! and the end-to-end scenario entry point that chains them together.

mod baseline;
mod blended_effect;
mod cash_flow;
mod discounting;
mod payback;
mod projection;
mod return_on_investment;
mod savings;
mod scenario;

pub use baseline::{BaselineResult, CostBaseline, compute_baseline};
pub use blended_effect::{BlendedEffect, BlendedEffectResult, blend_agents};
pub use cash_flow::{CashFlowSeriesResult, build_cash_flow_series};
pub use discounting::{
    NetPresentValueResult, RateOfReturnApproxResult, approximate_rate_of_return,
    calculate_net_present_value, discount_factors,
};
pub use payback::{PaybackResult, calculate_payback};
pub use projection::{
    WARNING_IRR_APPROXIMATION, WARNING_NOT_RECOVERABLE, WARNING_UNDEFINED_ROI, project,
};
pub use return_on_investment::{ReturnOnInvestmentResult, calculate_return_on_investment};
pub use savings::{MonthlySavings, MonthlySavingsResult, calculate_monthly_savings};
pub use scenario::project_scenario;
