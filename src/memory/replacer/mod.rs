//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`LruReplacer`] - Least Recently Used
//! - [`OptimalReplacer`] - Belady's furthest-next-use policy
//! - [`FifoReplacer`] - First-In-First-Out
//!
//! The set of policies is closed: [`Policy`] wraps exactly one of them and
//! forwards the [`Replacer`] contract, so the driver never branches on the
//! policy kind.

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::{Error, PageId, Result};
use crate::memory::FrameSet;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// The eviction contract shared by every policy.
///
/// Steps are 0-based positions in the reference trace. The driver calls
/// exactly one of `on_hit` / `on_fault_admit` per resident reference, and
/// `on_evict` for every victim before the new page is admitted.
pub trait Replacer {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// A resident page was referenced again.
    fn on_hit(&mut self, page: PageId, step: usize);

    /// A faulting page was just inserted into the frame set.
    fn on_fault_admit(&mut self, page: PageId, step: usize);

    /// A page left the frame set; drop its bookkeeping.
    fn on_evict(&mut self, page: PageId);

    /// Pick the resident page to evict.
    ///
    /// Only called when a fault occurs at `step` and `frames` is full.
    /// Returns `None` only if the policy has no candidate, which the driver
    /// reports as [`Error::NoVictim`].
    fn choose_eviction(&self, frames: &FrameSet, step: usize) -> Option<PageId>;

    /// Whether a hit moves the page to the newest end of the frame order.
    fn promotes_on_hit(&self) -> bool;
}

/// Identifies a replacement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Lru,
    Optimal,
    Fifo,
}

impl PolicyKind {
    /// Every policy, in the order comparisons report them.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Lru, PolicyKind::Optimal, PolicyKind::Fifo];
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
            PolicyKind::Fifo => "FIFO",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" | "belady" => Ok(PolicyKind::Optimal),
            "fifo" => Ok(PolicyKind::Fifo),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown policy '{}' (expected lru, optimal or fifo)",
                other
            ))),
        }
    }
}

/// A replacement policy instance, owned by a single run.
///
/// # Example
/// ```
/// use pagesim::{FrameSet, PageId, Policy, PolicyKind, Replacer};
///
/// let trace = [PageId::new(1), PageId::new(2), PageId::new(3)];
/// let mut policy = Policy::new(PolicyKind::Fifo, &trace);
///
/// let mut frames = FrameSet::new(2);
/// for (step, &page) in trace[..2].iter().enumerate() {
///     frames.insert(page).unwrap();
///     policy.on_fault_admit(page, step);
/// }
///
/// assert_eq!(policy.choose_eviction(&frames, 2), Some(PageId::new(1)));
/// ```
#[derive(Debug, Clone)]
pub enum Policy {
    Lru(LruReplacer),
    Optimal(OptimalReplacer),
    Fifo(FifoReplacer),
}

impl Policy {
    /// Build fresh policy state for one run over `trace`.
    pub fn new(kind: PolicyKind, trace: &[PageId]) -> Self {
        match kind {
            PolicyKind::Lru => Policy::Lru(LruReplacer::new()),
            PolicyKind::Optimal => Policy::Optimal(OptimalReplacer::new(trace)),
            PolicyKind::Fifo => Policy::Fifo(FifoReplacer::new()),
        }
    }

    fn inner(&self) -> &dyn Replacer {
        match self {
            Policy::Lru(r) => r,
            Policy::Optimal(r) => r,
            Policy::Fifo(r) => r,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Replacer {
        match self {
            Policy::Lru(r) => r,
            Policy::Optimal(r) => r,
            Policy::Fifo(r) => r,
        }
    }
}

impl Replacer for Policy {
    fn kind(&self) -> PolicyKind {
        self.inner().kind()
    }

    fn on_hit(&mut self, page: PageId, step: usize) {
        self.inner_mut().on_hit(page, step)
    }

    fn on_fault_admit(&mut self, page: PageId, step: usize) {
        self.inner_mut().on_fault_admit(page, step)
    }

    fn on_evict(&mut self, page: PageId) {
        self.inner_mut().on_evict(page)
    }

    fn choose_eviction(&self, frames: &FrameSet, step: usize) -> Option<PageId> {
        self.inner().choose_eviction(frames, step)
    }

    fn promotes_on_hit(&self) -> bool {
        self.inner().promotes_on_hit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_display() {
        assert_eq!(PolicyKind::Lru.to_string(), "LRU");
        assert_eq!(PolicyKind::Optimal.to_string(), "Optimal");
        assert_eq!(PolicyKind::Fifo.to_string(), "FIFO");
    }

    #[test]
    fn test_policy_kind_parse() {
        assert_eq!("LRU".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert_eq!("belady".parse::<PolicyKind>().unwrap(), PolicyKind::Optimal);
        assert_eq!("Fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert!(matches!(
            "clock".parse::<PolicyKind>(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_policy_new_matches_kind() {
        let trace = [PageId::new(1)];
        for kind in PolicyKind::ALL {
            assert_eq!(Policy::new(kind, &trace).kind(), kind);
        }
    }

    #[test]
    fn test_promotion_per_policy() {
        let trace: [PageId; 0] = [];
        assert!(Policy::new(PolicyKind::Lru, &trace).promotes_on_hit());
        assert!(Policy::new(PolicyKind::Optimal, &trace).promotes_on_hit());
        assert!(!Policy::new(PolicyKind::Fifo, &trace).promotes_on_hit());
    }
}
