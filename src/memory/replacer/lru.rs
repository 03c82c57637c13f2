//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageId;
use crate::memory::replacer::{PolicyKind, Replacer};
use crate::memory::FrameSet;

/// Evicts the resident page whose last reference is oldest.
///
/// Keeps the step of the last reference for every resident page. Victim
/// selection is a linear scan over the frame set; ties go to the page
/// earliest in frame order, so the choice never depends on hash order.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer {
    /// Resident page -> step of its last reference.
    last_used: HashMap<PageId, usize>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            last_used: HashMap::new(),
        }
    }

    /// Step of the last reference to `page`, if it is tracked.
    pub fn last_used(&self, page: PageId) -> Option<usize> {
        self.last_used.get(&page).copied()
    }
}

impl Replacer for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn on_hit(&mut self, page: PageId, step: usize) {
        self.last_used.insert(page, step);
    }

    fn on_fault_admit(&mut self, page: PageId, step: usize) {
        self.last_used.insert(page, step);
    }

    fn on_evict(&mut self, page: PageId) {
        self.last_used.remove(&page);
    }

    fn choose_eviction(&self, frames: &FrameSet, _step: usize) -> Option<PageId> {
        // An untracked resident page means no trustworthy victim at all.
        let candidates = frames
            .iter()
            .map(|p| self.last_used.get(&p).map(|&step| (step, p)))
            .collect::<Option<Vec<_>>>()?;

        // min_by_key keeps the first of equal keys
        candidates
            .into_iter()
            .min_by_key(|&(step, _)| step)
            .map(|(_, p)| p)
    }

    fn promotes_on_hit(&self) -> bool {
        true
    }
}
