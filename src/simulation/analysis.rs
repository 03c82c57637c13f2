//! Cross-run analysis: policy comparison and fault curves.
//!
//! Every run here gets its own [`Simulator`], so runs share no state.

use tracing::debug;

use crate::common::{PageId, Result, SimulationConfig};
use crate::memory::PolicyKind;
use crate::simulation::{RunSummary, Simulator};

/// A frame count where adding one more frame increased the fault count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anomaly {
    pub policy: PolicyKind,
    /// The smaller frame count.
    pub num_frames: usize,
    /// Faults with `num_frames` frames.
    pub faults: usize,
    /// Faults with `num_frames + 1` frames.
    pub faults_with_more_frames: usize,
}

/// Run every policy on the same trace and frame count.
///
/// Summaries come back in [`PolicyKind::ALL`] order.
///
/// # Errors
/// Internal consistency errors from any run.
pub fn compare(trace: &[PageId], num_frames: usize) -> Result<Vec<RunSummary>> {
    PolicyKind::ALL
        .iter()
        .map(|&policy| {
            let config = SimulationConfig { num_frames, policy };
            Simulator::new(trace, config).finish()
        })
        .collect()
}

/// Total faults of `policy` for every frame count in `0..=max_frames`.
///
/// # Errors
/// Internal consistency errors from any run.
pub fn fault_curve(
    trace: &[PageId],
    policy: PolicyKind,
    max_frames: usize,
) -> Result<Vec<(usize, usize)>> {
    (0..=max_frames)
        .map(|num_frames| {
            let config = SimulationConfig { num_frames, policy };
            let summary = Simulator::new(trace, config).finish()?;
            Ok((num_frames, summary.faults))
        })
        .collect()
}

/// First frame count up to `max_frames` exhibiting Belady's anomaly.
///
/// LRU and Optimal are stack algorithms and never return one; FIFO can.
///
/// # Errors
/// Internal consistency errors from any run.
pub fn find_belady_anomaly(
    trace: &[PageId],
    policy: PolicyKind,
    max_frames: usize,
) -> Result<Option<Anomaly>> {
    let curve = fault_curve(trace, policy, max_frames)?;

    let anomaly = curve
        .windows(2)
        .find(|w| w[1].1 > w[0].1)
        .map(|w| Anomaly {
            policy,
            num_frames: w[0].0,
            faults: w[0].1,
            faults_with_more_frames: w[1].1,
        });

    if let Some(a) = &anomaly {
        debug!(
            policy = %policy,
            num_frames = a.num_frames,
            faults = a.faults,
            faults_with_more_frames = a.faults_with_more_frames,
            "Belady's anomaly found"
        );
    }

    Ok(anomaly)
}
