//! Simulation of a reference trace against a replacement policy.
//!
//! # Components
//! - [`Simulator`] / [`run`] - The driver: one run, one policy
//! - [`StepEvent`] - Per-reference record handed to the caller
//! - [`RunSummary`] - Final fault/hit tally
//! - [`analysis`] - Policy comparison and fault curves

pub mod analysis;
mod driver;
mod event;
mod stats;

pub use analysis::{compare, fault_curve, find_belady_anomaly, Anomaly};
pub use driver::{run, run_with_config, Simulator};
pub use event::{Outcome, StepEvent};
pub use stats::RunSummary;
