//! Simulation driver - replays a reference trace against one policy.
//!
//! The [`Simulator`] provides:
//! - Hit/fault classification against the [`FrameSet`]
//! - Victim selection through the [`Policy`] when the frames are full
//! - One [`StepEvent`] per reference, streamed without retained history

use tracing::{debug, error, trace};

use crate::common::{Error, PageId, Result, SimulationConfig};
use crate::memory::{FrameSet, Policy, PolicyKind, Replacer};
use crate::simulation::{Outcome, RunSummary, StepEvent};

/// Replays a reference trace, one reference per [`Simulator::step`].
///
/// # Ownership
/// A simulator exclusively owns its frame set and policy state. Separate
/// runs never share anything mutable, so they can be driven independently.
///
/// # Failure
/// Frame-set or policy inconsistencies are returned as internal errors
/// (see [`Error::is_internal`]). After the first error the run is over:
/// further calls to `step` return `Ok(None)`, and the aborted reference
/// is not counted in [`Simulator::summary`].
///
/// # Usage
/// ```
/// use pagesim::{PageId, PolicyKind, SimulationConfig, Simulator};
///
/// let trace: Vec<PageId> = [1, 2, 1, 3].into_iter().map(PageId::new).collect();
/// let config = SimulationConfig::new(2, PolicyKind::Lru).unwrap();
///
/// let mut sim = Simulator::new(&trace, config);
/// while let Some(event) = sim.step().unwrap() {
///     println!("step {}: {:?}", event.step, event.outcome);
/// }
/// assert_eq!(sim.summary().faults, 3);
/// ```
#[derive(Debug)]
pub struct Simulator<'a> {
    /// The full reference trace (read-only).
    trace: &'a [PageId],

    /// Index of the next reference to process.
    position: usize,

    /// Resident pages.
    frames: FrameSet,

    /// Eviction policy and its bookkeeping.
    policy: Policy,

    hits: usize,
    faults: usize,
    evictions: usize,
}

impl<'a> Simulator<'a> {
    /// Start a fresh run over `trace`.
    pub fn new(trace: &'a [PageId], config: SimulationConfig) -> Self {
        debug!(
            policy = %config.policy,
            num_frames = config.num_frames,
            references = trace.len(),
            "starting simulation"
        );

        Self {
            trace,
            position: 0,
            frames: FrameSet::new(config.num_frames),
            policy: Policy::new(config.policy, trace),
            hits: 0,
            faults: 0,
            evictions: 0,
        }
    }

    // ========================================================================
    // Public API
    // ========================================================================

    /// Process the next reference.
    ///
    /// Returns `Ok(None)` once the trace is exhausted.
    ///
    /// # Errors
    /// Internal consistency errors from the frame set or policy.
    pub fn step(&mut self) -> Result<Option<StepEvent>> {
        let Some(&page) = self.trace.get(self.position) else {
            return Ok(None);
        };
        let step = self.position;
        self.position += 1;

        let (outcome, evicted) = match self.reference(page, step) {
            Ok(resolved) => resolved,
            Err(e) => {
                error!(
                    step = step + 1,
                    %page,
                    policy = %self.policy.kind(),
                    "simulation aborted: {}",
                    e
                );
                self.position = self.trace.len();
                return Err(e);
            }
        };

        // Counters only move once the reference has been fully applied.
        match outcome {
            Outcome::Hit => self.hits += 1,
            Outcome::Fault => self.faults += 1,
        }
        if evicted.is_some() {
            self.evictions += 1;
        }

        Ok(Some(StepEvent {
            step: step + 1,
            page,
            outcome,
            evicted,
            resident: self.frames.snapshot(),
            frames: self.frames.ordered_snapshot(),
            faults: self.faults,
        }))
    }

    /// Tally of the references processed so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            policy: self.policy.kind(),
            num_frames: self.frames.capacity(),
            references: self.hits + self.faults,
            hits: self.hits,
            faults: self.faults,
            evictions: self.evictions,
        }
    }

    /// Run the remaining references, discarding events.
    ///
    /// # Errors
    /// Internal consistency errors from the frame set or policy.
    pub fn finish(mut self) -> Result<RunSummary> {
        while self.step()?.is_some() {}
        let summary = self.summary();
        debug!(%summary, "simulation finished");
        Ok(summary)
    }

    /// The policy being simulated.
    pub fn policy(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Current resident set.
    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// Check if every reference has been processed.
    pub fn is_finished(&self) -> bool {
        self.position >= self.trace.len()
    }

    // ========================================================================
    // Internal: per-reference logic
    // ========================================================================

    /// Classify one reference and apply it to the frame set and policy.
    fn reference(&mut self, page: PageId, step: usize) -> Result<(Outcome, Option<PageId>)> {
        if self.frames.contains(page) {
            self.policy.on_hit(page, step);
            if self.policy.promotes_on_hit() {
                self.frames.touch(page)?;
            }
            trace!(step = step + 1, %page, "page hit");
            return Ok((Outcome::Hit, None));
        }

        // With no frames nothing can ever be admitted or evicted.
        if self.frames.capacity() == 0 {
            debug!(step = step + 1, %page, "page fault, no frames to admit into");
            return Ok((Outcome::Fault, None));
        }

        let evicted = if self.frames.is_full() {
            let victim = self.evict_for(step)?;
            Some(victim)
        } else {
            None
        };

        self.frames.insert(page)?;
        self.policy.on_fault_admit(page, step);

        debug!(
            step = step + 1,
            %page,
            victim = ?evicted.map(|p| p.0),
            "page fault"
        );

        Ok((Outcome::Fault, evicted))
    }

    /// Ask the policy for a victim and remove it.
    fn evict_for(&mut self, step: usize) -> Result<PageId> {
        let victim = self
            .policy
            .choose_eviction(&self.frames, step)
            .ok_or(Error::NoVictim(self.policy.kind()))?;

        self.frames.evict(victim)?;
        self.policy.on_evict(victim);

        Ok(victim)
    }
}

impl Iterator for Simulator<'_> {
    type Item = Result<StepEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

/// Replay `trace` on `num_frames` frames with a fresh `policy`.
///
/// Returns every step event, in order, and the final summary.
///
/// # Errors
/// Internal consistency errors only; an empty trace or zero frames are
/// valid inputs.
pub fn run(
    trace: &[PageId],
    num_frames: usize,
    policy: PolicyKind,
) -> Result<(Vec<StepEvent>, RunSummary)> {
    run_with_config(trace, SimulationConfig { num_frames, policy })
}

/// [`run`] with a validated [`SimulationConfig`].
///
/// # Errors
/// Internal consistency errors only.
pub fn run_with_config(
    trace: &[PageId],
    config: SimulationConfig,
) -> Result<(Vec<StepEvent>, RunSummary)> {
    let mut sim = Simulator::new(trace, config);
    let mut events = Vec::with_capacity(trace.len());
    while let Some(event) = sim.step()? {
        events.push(event);
    }
    let summary = sim.summary();
    debug!(%summary, "simulation finished");
    Ok((events, summary))
}
