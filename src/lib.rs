//! ROI Projection Engine for Automation Consulting
//!
//! This crate turns a set of employees whose work will be partially automated
//! and a selection of automation agents into a full return-on-investment
//! projection: monthly savings, payback period, discounted NPV, an IRR
//! approximation and a 60-month cash-flow series for charting.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
