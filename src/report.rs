//! Text and JSON rendering of simulation results.
//!
//! Nothing in the engine depends on this module; it only consumes
//! [`StepEvent`]s and [`RunSummary`]s.

use std::collections::BTreeSet;
use std::io::{self, Write};

use serde::Serialize;

use crate::common::PageId;
use crate::memory::PolicyKind;
use crate::simulation::{Anomaly, Outcome, RunSummary, StepEvent};

/// Render the resident set the way a Python `set` prints.
fn format_set(pages: &BTreeSet<PageId>) -> String {
    if pages.is_empty() {
        return "set()".to_string();
    }
    format!("{{{}}}", join(pages.iter()))
}

fn format_list(pages: &[PageId]) -> String {
    format!("[{}]", join(pages.iter()))
}

fn join<'a>(pages: impl Iterator<Item = &'a PageId>) -> String {
    pages
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One status line, e.g.
/// `Step 1: Page fault (1) - Page Table: {1}, Frames: [1], Faults: 1`.
pub fn format_step(event: &StepEvent) -> String {
    let kind = match event.outcome {
        Outcome::Hit => "hit",
        Outcome::Fault => "fault",
    };
    format!(
        "Step {}: Page {} ({}) - Page Table: {}, Frames: {}, Faults: {}",
        event.step,
        kind,
        event.page,
        format_set(&event.resident),
        format_list(&event.frames),
        event.faults
    )
}

/// Full per-step report of one run, headed by the policy name.
pub fn write_run<W: Write>(
    out: &mut W,
    policy: PolicyKind,
    events: &[StepEvent],
    summary: &RunSummary,
) -> io::Result<()> {
    writeln!(out, "For {} Algorithm:", policy)?;
    for event in events {
        writeln!(out, "{}", format_step(event))?;
    }
    writeln!(out, "Total Page Faults: {}", summary.faults)
}

/// One row per policy.
pub fn write_summary_table<W: Write>(out: &mut W, summaries: &[RunSummary]) -> io::Result<()> {
    writeln!(
        out,
        "{:<8} {:>6} {:>6} {:>6} {:>9} {:>8}",
        "Policy", "Frames", "Faults", "Hits", "Evictions", "Hit rate"
    )?;
    for s in summaries {
        writeln!(
            out,
            "{:<8} {:>6} {:>6} {:>6} {:>9} {:>7.2}%",
            s.policy.to_string(),
            s.num_frames,
            s.faults,
            s.hits,
            s.evictions,
            s.hit_rate() * 100.0
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonStep<'a> {
    policy: PolicyKind,
    #[serde(flatten)]
    event: &'a StepEvent,
}

/// One JSON object per event, tagged with the policy, then the summary.
pub fn write_json_lines<W: Write>(
    out: &mut W,
    policy: PolicyKind,
    events: &[StepEvent],
    summary: &RunSummary,
) -> io::Result<()> {
    for event in events {
        serde_json::to_writer(&mut *out, &JsonStep { policy, event })?;
        writeln!(out)?;
    }
    serde_json::to_writer(&mut *out, summary)?;
    writeln!(out)
}

/// Faults per frame count, flagging Belady's anomaly if present.
pub fn write_curve<W: Write>(
    out: &mut W,
    policy: PolicyKind,
    curve: &[(usize, usize)],
    anomaly: Option<&Anomaly>,
) -> io::Result<()> {
    writeln!(out, "{} faults by frame count:", policy)?;
    for (frames, faults) in curve {
        writeln!(out, "  {:>3} frames: {}", frames, faults)?;
    }
    if let Some(a) = anomaly {
        writeln!(
            out,
            "Belady's anomaly: {} frames -> {} faults, {} frames -> {} faults",
            a.num_frames,
            a.faults,
            a.num_frames + 1,
            a.faults_with_more_frames
        )?;
    }
    Ok(())
}
