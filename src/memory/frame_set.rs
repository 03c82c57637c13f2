//! FrameSet - the pages currently resident in physical memory.
//!
//! A [`FrameSet`] is a fixed-capacity, ordered collection of distinct pages:
//! - Which pages are resident (O(1) membership)
//! - The order they were admitted, or last promoted on a hit

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::common::{Error, PageId, Result};

/// The resident set of a simulation run.
///
/// Front of the order is the oldest page, back is the newest (or most
/// recently promoted). Policies never mutate the set directly: they only
/// read it to pick a victim, and the driver applies the change.
///
/// # Invariants
/// - `len() <= capacity()`
/// - no page appears twice
///
/// # Example
/// ```
/// use pagesim::{FrameSet, PageId};
///
/// let mut frames = FrameSet::new(2);
/// frames.insert(PageId::new(1)).unwrap();
/// frames.insert(PageId::new(2)).unwrap();
/// assert!(frames.is_full());
/// assert!(frames.insert(PageId::new(3)).is_err());
///
/// frames.evict(PageId::new(1)).unwrap();
/// frames.insert(PageId::new(3)).unwrap();
/// assert_eq!(frames.ordered_snapshot(), vec![PageId::new(2), PageId::new(3)]);
/// ```
#[derive(Debug, Clone)]
pub struct FrameSet {
    /// Resident pages, oldest first.
    order: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    /// Number of physical frames (immutable after construction).
    capacity: usize,
}

impl FrameSet {
    /// Create an empty frame set with `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check whether `page` is resident. No side effects.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if every frame holds a page.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.order.len() >= self.capacity
    }

    /// The oldest resident page, if any.
    pub fn oldest(&self) -> Option<PageId> {
        self.order.front().copied()
    }

    /// Iterate resident pages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.order.iter().copied()
    }

    /// Order-insensitive view of the resident pages.
    pub fn snapshot(&self) -> BTreeSet<PageId> {
        self.resident.iter().copied().collect()
    }

    /// Resident pages in admission/recency order, oldest first.
    pub fn ordered_snapshot(&self) -> Vec<PageId> {
        self.order.iter().copied().collect()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Admit `page` at the newest end.
    ///
    /// # Errors
    /// - `Error::Capacity` if every frame is occupied
    /// - `Error::AlreadyResident` if `page` is already resident
    pub fn insert(&mut self, page: PageId) -> Result<()> {
        if self.is_full() {
            return Err(Error::Capacity {
                page,
                capacity: self.capacity,
            });
        }
        if !self.resident.insert(page) {
            return Err(Error::AlreadyResident(page));
        }
        self.order.push_back(page);
        Ok(())
    }

    /// Remove a specific resident page.
    ///
    /// # Errors
    /// - `Error::NotResident` if `page` is not resident
    pub fn evict(&mut self, page: PageId) -> Result<()> {
        let pos = self.position(page)?;
        self.order.remove(pos);
        self.resident.remove(&page);
        Ok(())
    }

    /// Move a resident page to the newest end of the order.
    ///
    /// # Errors
    /// - `Error::NotResident` if `page` is not resident
    pub fn touch(&mut self, page: PageId) -> Result<()> {
        if !self.contains(page) {
            return Err(Error::NotResident(page));
        }
        let pos = self.position(page)?;
        if let Some(p) = self.order.remove(pos) {
            self.order.push_back(p);
        }
        Ok(())
    }

    fn position(&self, page: PageId) -> Result<usize> {
        self.order
            .iter()
            .position(|&p| p == page)
            .ok_or(Error::NotResident(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_frame_set_new() {
        let frames = FrameSet::new(3);
        assert!(frames.is_empty());
        assert!(!frames.is_full());
        assert_eq!(frames.len(), 0);
        assert_eq!(frames.capacity(), 3);
        assert_eq!(frames.oldest(), None);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut frames = FrameSet::new(3);
        frames.insert(PageId::new(7)).unwrap();

        assert!(frames.contains(PageId::new(7)));
        assert!(!frames.contains(PageId::new(8)));
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_insert_when_full_fails() {
        let mut frames = FrameSet::new(2);
        frames.insert(PageId::new(1)).unwrap();
        frames.insert(PageId::new(2)).unwrap();

        match frames.insert(PageId::new(3)) {
            Err(Error::Capacity { page, capacity }) => {
                assert_eq!(page, PageId::new(3));
                assert_eq!(capacity, 2);
            }
            other => panic!("Expected Capacity error, got {:?}", other),
        }
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut frames = FrameSet::new(0);
        assert!(frames.is_full());
        assert!(frames.insert(PageId::new(1)).is_err());
        assert!(frames.is_empty());
    }

    #[test]
    fn test_duplicate_insert_fails() {
        let mut frames = FrameSet::new(3);
        frames.insert(PageId::new(1)).unwrap();

        let result = frames.insert(PageId::new(1));
        assert!(matches!(result, Err(Error::AlreadyResident(_))));
        assert_eq!(frames.ordered_snapshot(), pages(&[1]));
    }

    #[test]
    fn test_evict() {
        let mut frames = FrameSet::new(3);
        for id in [1, 2, 3] {
            frames.insert(PageId::new(id)).unwrap();
        }

        frames.evict(PageId::new(2)).unwrap();

        assert!(!frames.contains(PageId::new(2)));
        assert_eq!(frames.ordered_snapshot(), pages(&[1, 3]));
    }

    #[test]
    fn test_evict_not_resident_fails() {
        let mut frames = FrameSet::new(3);
        frames.insert(PageId::new(1)).unwrap();

        let result = frames.evict(PageId::new(9));
        assert!(matches!(result, Err(Error::NotResident(p)) if p == PageId::new(9)));
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_failed_evict_leaves_set_unchanged() {
        let mut frames = FrameSet::new(2);
        frames.insert(PageId::new(1)).unwrap();
        frames.insert(PageId::new(2)).unwrap();

        assert!(frames.evict(PageId::new(3)).is_err());

        assert_eq!(frames.snapshot().len(), frames.len());
        assert_eq!(frames.ordered_snapshot(), pages(&[1, 2]));
        assert!(frames.contains(PageId::new(1)) && frames.contains(PageId::new(2)));
    }

    #[test]
    fn test_touch_moves_to_newest() {
        let mut frames = FrameSet::new(3);
        for id in [1, 2, 3] {
            frames.insert(PageId::new(id)).unwrap();
        }

        frames.touch(PageId::new(1)).unwrap();

        assert_eq!(frames.ordered_snapshot(), pages(&[2, 3, 1]));
        assert_eq!(frames.oldest(), Some(PageId::new(2)));
        assert!(frames.touch(PageId::new(4)).is_err());
    }

    #[test]
    fn test_snapshot_is_order_insensitive() {
        let mut frames = FrameSet::new(3);
        for id in [3, 1, 2] {
            frames.insert(PageId::new(id)).unwrap();
        }

        let snapshot: Vec<PageId> = frames.snapshot().into_iter().collect();
        assert_eq!(snapshot, pages(&[1, 2, 3]));
        assert_eq!(frames.ordered_snapshot(), pages(&[3, 1, 2]));
    }
}
