//! Run statistics.

use std::fmt;

use serde::Serialize;

use crate::memory::PolicyKind;

/// Final tally of one simulation run.
///
/// # Example
/// ```
/// use pagesim::{run, PageId, PolicyKind};
///
/// let trace: Vec<PageId> = [1, 2, 1].into_iter().map(PageId::new).collect();
/// let (_, summary) = run(&trace, 2, PolicyKind::Lru).unwrap();
///
/// assert_eq!(summary.faults, 2);
/// assert_eq!(summary.hits, 1);
/// println!("{}", summary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub policy: PolicyKind,
    pub num_frames: usize,
    pub references: usize,
    pub hits: usize,
    pub faults: usize,
    pub evictions: usize,
}

impl RunSummary {
    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ frames: {}, faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.policy,
            self.num_frames,
            self.faults,
            self.hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(hits: usize, faults: usize) -> RunSummary {
        RunSummary {
            policy: PolicyKind::Fifo,
            num_frames: 3,
            references: hits + faults,
            hits,
            faults,
            evictions: 0,
        }
    }

    #[test]
    fn test_rates() {
        let s = summary(7, 3);
        assert_eq!(s.hit_rate(), 0.7);
        assert_eq!(s.fault_rate(), 0.3);
    }

    #[test]
    fn test_rates_empty_run() {
        let s = summary(0, 0);
        assert_eq!(s.hit_rate(), 0.0);
        assert_eq!(s.fault_rate(), 0.0);
    }

    #[test]
    fn test_summary_display() {
        let display = format!("{}", summary(80, 20));

        assert!(display.starts_with("FIFO"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("hits: 80"));
        assert!(display.contains("80.00%"));
    }
}
