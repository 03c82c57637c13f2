//! Configuration for simulation runs.

use crate::common::{Error, PageId, Result};
use crate::memory::replacer::PolicyKind;

/// Frame count used when the caller does not supply one.
pub const DEFAULT_NUM_FRAMES: usize = 4;

/// Largest frame count swept by a fault curve when none is given.
pub const DEFAULT_CURVE_MAX_FRAMES: usize = 8;

/// The classic reference string used to demonstrate Belady's anomaly.
///
/// With FIFO it faults 9 times on 3 frames but 10 times on 4.
pub const SAMPLE_TRACE: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

/// Returns [`SAMPLE_TRACE`] as pages.
pub fn sample_pages() -> Vec<PageId> {
    SAMPLE_TRACE.iter().copied().map(PageId::new).collect()
}

/// Parameters of one simulation run.
///
/// # Example
/// ```
/// use pagesim::{PolicyKind, SimulationConfig};
///
/// let config = SimulationConfig::new(3, PolicyKind::Fifo).unwrap();
/// assert_eq!(config.num_frames, 3);
///
/// assert!(SimulationConfig::new(-1, PolicyKind::Fifo).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of physical frames.
    pub num_frames: usize,

    /// Replacement policy to run.
    pub policy: PolicyKind,
}

impl SimulationConfig {
    /// Validate a caller-supplied frame count.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `num_frames` is negative or does not
    /// fit in `usize`.
    pub fn new(num_frames: i64, policy: PolicyKind) -> Result<Self> {
        if num_frames < 0 {
            return Err(Error::InvalidConfiguration(format!(
                "num_frames must be >= 0, got {}",
                num_frames
            )));
        }
        let num_frames = usize::try_from(num_frames).map_err(|_| {
            Error::InvalidConfiguration(format!("num_frames {} is too large", num_frames))
        })?;
        Ok(Self { num_frames, policy })
    }

    /// Same frame count, different policy.
    pub fn with_policy(self, policy: PolicyKind) -> Self {
        Self { policy, ..self }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_frames: DEFAULT_NUM_FRAMES,
            policy: PolicyKind::Lru,
        }
    }
}
