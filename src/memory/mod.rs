//! Simulated physical memory.
//!
//! # Components
//! - [`FrameSet`] - The fixed-capacity set of resident pages
//! - [`replacer`] - Eviction policy implementations

mod frame_set;
pub mod replacer;

pub use frame_set::FrameSet;
pub use replacer::{Policy, PolicyKind, Replacer};
