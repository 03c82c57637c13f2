//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;
use crate::memory::replacer::{PolicyKind, Replacer};
use crate::memory::FrameSet;

/// Evicts pages in the order they were admitted.
///
/// Hits never change the order, which is what makes FIFO subject to
/// Belady's anomaly.
#[derive(Debug, Clone, Default)]
pub struct FifoReplacer {
    /// Resident pages in admission order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Number of pages being tracked.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if no page is tracked.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Replacer for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn on_hit(&mut self, _page: PageId, _step: usize) {}

    fn on_fault_admit(&mut self, page: PageId, _step: usize) {
        self.queue.push_back(page);
    }

    fn on_evict(&mut self, page: PageId) {
        // The victim is almost always the front; fall back to a scan.
        if self.queue.front() == Some(&page) {
            self.queue.pop_front();
        } else if let Some(pos) = self.queue.iter().position(|&p| p == page) {
            self.queue.remove(pos);
        }
    }

    fn choose_eviction(&self, frames: &FrameSet, _step: usize) -> Option<PageId> {
        self.queue.iter().copied().find(|&p| frames.contains(p))
    }

    fn promotes_on_hit(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admit(replacer: &mut FifoReplacer, frames: &mut FrameSet, ids: &[u32]) {
        for (step, &id) in ids.iter().enumerate() {
            frames.insert(PageId::new(id)).unwrap();
            replacer.on_fault_admit(PageId::new(id), step);
        }
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new();
        let mut frames = FrameSet::new(3);
        admit(&mut replacer, &mut frames, &[0, 1, 2]);

        assert_eq!(replacer.len(), 3);

        // Should evict in FIFO order
        for expected in [0, 1, 2] {
            let victim = replacer.choose_eviction(&frames, 3).unwrap();
            assert_eq!(victim, PageId::new(expected));
            frames.evict(victim).unwrap();
            replacer.on_evict(victim);
        }
        assert!(replacer.is_empty());
        assert_eq!(replacer.choose_eviction(&frames, 3), None);
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = FifoReplacer::new();
        let mut frames = FrameSet::new(2);
        admit(&mut replacer, &mut frames, &[0, 1]);

        replacer.on_hit(PageId::new(0), 2); // Access again - should NOT reorder

        // FIFO: page 0 was first, should be evicted first
        assert_eq!(replacer.choose_eviction(&frames, 3), Some(PageId::new(0)));
    }

    #[test]
    fn test_fifo_evict_out_of_order() {
        let mut replacer = FifoReplacer::new();
        let mut frames = FrameSet::new(3);
        admit(&mut replacer, &mut frames, &[0, 1, 2]);

        frames.evict(PageId::new(1)).unwrap();
        replacer.on_evict(PageId::new(1));

        assert_eq!(replacer.len(), 2);
        frames.evict(PageId::new(0)).unwrap();
        replacer.on_evict(PageId::new(0));
        assert_eq!(replacer.choose_eviction(&frames, 3), Some(PageId::new(2)));
    }

    #[test]
    fn test_fifo_skips_non_resident() {
        let mut replacer = FifoReplacer::new();
        let mut frames = FrameSet::new(2);
        admit(&mut replacer, &mut frames, &[0, 1]);

        // Frame set changed behind the replacer's back
        frames.evict(PageId::new(0)).unwrap();

        assert_eq!(replacer.choose_eviction(&frames, 2), Some(PageId::new(1)));
    }
}
