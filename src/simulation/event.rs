//! Per-step records emitted by the simulation driver.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::common::PageId;

/// How a reference was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The page was already resident.
    Hit,
    /// The page was not resident and had to be admitted (if any frame exists).
    Fault,
}

impl Outcome {
    #[inline]
    pub fn is_hit(self) -> bool {
        self == Outcome::Hit
    }

    #[inline]
    pub fn is_fault(self) -> bool {
        self == Outcome::Fault
    }
}

/// The state of a run immediately after one reference.
///
/// Events are handed out by value; the simulator keeps no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepEvent {
    /// 1-based position of the reference in the trace.
    pub step: usize,

    /// The page referenced.
    pub page: PageId,

    /// Hit or fault.
    pub outcome: Outcome,

    /// Page removed to make room, if this fault evicted one.
    pub evicted: Option<PageId>,

    /// Resident pages, unordered.
    pub resident: BTreeSet<PageId>,

    /// Resident pages in frame order, oldest first.
    pub frames: Vec<PageId>,

    /// Faults so far, including this step.
    pub faults: usize,
}
