//! Optimal (Belady's MIN) replacement policy.
//!
//! Needs the whole reference trace up front. Instead of rescanning the
//! remaining trace on every fault, the positions of every page are indexed
//! once per run and the next use after a step is a binary search.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::common::PageId;
use crate::memory::replacer::{PolicyKind, Replacer};
use crate::memory::FrameSet;

/// Evicts the resident page whose next reference is furthest in the future.
///
/// A page that is never referenced again counts as infinitely far away.
/// Among several such pages the one earliest in frame order is chosen.
#[derive(Debug, Clone, Default)]
pub struct OptimalReplacer {
    /// Page -> ascending trace positions where it is referenced.
    occurrences: HashMap<PageId, Vec<usize>>,
}

impl OptimalReplacer {
    /// Index `trace` for lookahead.
    pub fn new(trace: &[PageId]) -> Self {
        let mut occurrences: HashMap<PageId, Vec<usize>> = HashMap::new();
        for (pos, &page) in trace.iter().enumerate() {
            occurrences.entry(page).or_default().push(pos);
        }
        Self { occurrences }
    }

    /// First position after `step` where `page` is referenced.
    pub fn next_use(&self, page: PageId, step: usize) -> Option<usize> {
        let positions = self.occurrences.get(&page)?;
        let idx = positions.partition_point(|&pos| pos <= step);
        positions.get(idx).copied()
    }
}

impl Replacer for OptimalReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    // The trace index is the only state; nothing to update per reference.
    fn on_hit(&mut self, _page: PageId, _step: usize) {}

    fn on_fault_admit(&mut self, _page: PageId, _step: usize) {}

    fn on_evict(&mut self, _page: PageId) {}

    fn choose_eviction(&self, frames: &FrameSet, step: usize) -> Option<PageId> {
        frames
            .iter()
            .min_by_key(|&p| Reverse(self.next_use(p, step).unwrap_or(usize::MAX)))
    }

    fn promotes_on_hit(&self) -> bool {
        true
    }
}
