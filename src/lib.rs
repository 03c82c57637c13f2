//! pagesim - A page-replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Presentation (report/, bin pagesim)               │   │
//! │  │      status lines  |  summary table  |  JSON lines       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                     ↑ StepEvent / RunSummary                    │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Simulation Driver (simulation/)                │   │
//! │  │     Simulator + run + compare / fault_curve              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Physical Memory (memory/)                   │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Eviction Policies: LRU | Optimal | FIFO     │   │   │
//! │  │   │          (chosen per run via PolicyKind)         │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │                      FrameSet                            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`memory`] - Frame set and eviction policies
//! - [`simulation`] - The driver, step events and run statistics
//! - [`trace`] - Reference trace parsing
//! - [`report`] - Text and JSON rendering
//!
//! # Quick Start
//! ```
//! use pagesim::{run, PolicyKind, Trace};
//!
//! let trace = Trace::sample();
//! let (events, summary) = run(&trace, 4, PolicyKind::Fifo).unwrap();
//!
//! assert_eq!(events.len(), 12);
//! assert_eq!(summary.faults, 10);
//! ```

// Core modules
pub mod common;
pub mod memory;
pub mod simulation;

// Input and output around the core
pub mod report;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_NUM_FRAMES;
pub use common::{Error, PageId, Result, SimulationConfig};

pub use memory::{FrameSet, Policy, PolicyKind, Replacer};
pub use simulation::{run, run_with_config, Outcome, RunSummary, Simulator, StepEvent};
pub use trace::Trace;
