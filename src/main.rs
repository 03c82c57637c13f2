//! pagesim CLI: replay a page reference trace under LRU, Optimal and FIFO.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pagesim::common::config::DEFAULT_CURVE_MAX_FRAMES;
use pagesim::simulation::{compare, fault_curve, find_belady_anomaly};
use pagesim::{
    report, run_with_config, PageId, PolicyKind, Result, SimulationConfig, Trace,
    DEFAULT_NUM_FRAMES,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Simulate page-replacement policies over a reference trace")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every step of each run
    Run {
        #[command(flatten)]
        trace: TraceArgs,

        /// Number of physical frames
        #[arg(short, long, default_value_t = DEFAULT_NUM_FRAMES as i64, allow_negative_numbers = true)]
        frames: i64,

        /// Policy to run
        #[arg(short, long, value_enum, default_value = "all")]
        policy: PolicySelection,

        /// Emit JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compare total faults of every policy
    Compare {
        #[command(flatten)]
        trace: TraceArgs,

        /// Number of physical frames
        #[arg(short, long, default_value_t = DEFAULT_NUM_FRAMES as i64, allow_negative_numbers = true)]
        frames: i64,
    },

    /// Faults for every frame count, flagging Belady's anomaly
    Curve {
        #[command(flatten)]
        trace: TraceArgs,

        /// Largest frame count to simulate
        #[arg(short, long, default_value_t = DEFAULT_CURVE_MAX_FRAMES)]
        max_frames: usize,

        /// Policy to sweep: lru, optimal or fifo
        #[arg(short, long, default_value = "fifo")]
        policy: PolicyKind,
    },
}

#[derive(Args)]
struct TraceArgs {
    /// Page references (the sample trace if omitted)
    pages: Vec<u32>,

    /// Read page references from a file
    #[arg(long, conflicts_with = "pages")]
    trace_file: Option<PathBuf>,
}

impl TraceArgs {
    fn load(&self) -> Result<Trace> {
        if let Some(path) = &self.trace_file {
            return Trace::from_file(path);
        }
        if self.pages.is_empty() {
            return Ok(Trace::sample());
        }
        Ok(self.pages.iter().copied().map(PageId::new).collect())
    }
}

/// `--policy` for `run`: one policy, or every policy in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicySelection {
    All,
    Lru,
    #[value(alias = "opt", alias = "belady")]
    Optimal,
    Fifo,
}

impl PolicySelection {
    fn policies(self) -> Vec<PolicyKind> {
        match self {
            PolicySelection::All => PolicyKind::ALL.to_vec(),
            PolicySelection::Lru => vec![PolicyKind::Lru],
            PolicySelection::Optimal => vec![PolicyKind::Optimal],
            PolicySelection::Fifo => vec![PolicyKind::Fifo],
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Run {
            trace,
            frames,
            policy,
            json,
        } => {
            let policies = policy.policies();
            let config = SimulationConfig::new(frames, policies[0])?;
            let trace = trace.load()?;

            for (i, &kind) in policies.iter().enumerate() {
                let (events, summary) = run_with_config(&trace, config.with_policy(kind))?;
                if json {
                    report::write_json_lines(&mut out, kind, &events, &summary)?;
                } else {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    report::write_run(&mut out, kind, &events, &summary)?;
                }
            }
        }
        Commands::Compare { trace, frames } => {
            let config = SimulationConfig::new(frames, PolicyKind::Lru)?;
            let trace = trace.load()?;
            let summaries = compare(&trace, config.num_frames)?;
            report::write_summary_table(&mut out, &summaries)?;
        }
        Commands::Curve {
            trace,
            max_frames,
            policy,
        } => {
            let trace = trace.load()?;
            let curve = fault_curve(&trace, policy, max_frames)?;
            let anomaly = find_belady_anomaly(&trace, policy, max_frames)?;
            report::write_curve(&mut out, policy, &curve, anomaly.as_ref())?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_policy(args: &[&str]) -> std::result::Result<PolicySelection, clap::Error> {
        let cli = Cli::try_parse_from(args.iter().copied())?;
        match cli.command {
            Commands::Run { policy, .. } => Ok(policy),
            _ => panic!("Expected run command"),
        }
    }

    #[test]
    fn test_run_policy_defaults_to_all() {
        let policy = run_policy(&["pagesim", "run"]).unwrap();
        assert_eq!(policy, PolicySelection::All);
        assert_eq!(policy.policies(), PolicyKind::ALL.to_vec());
    }

    #[test]
    fn test_run_policy_values() {
        let policy = run_policy(&["pagesim", "run", "-p", "belady"]).unwrap();
        assert_eq!(policy.policies(), vec![PolicyKind::Optimal]);

        let policy = run_policy(&["pagesim", "run", "--policy", "fifo", "1", "2"]).unwrap();
        assert_eq!(policy.policies(), vec![PolicyKind::Fifo]);
    }

    #[test]
    fn test_unknown_policy_rejected_by_parser() {
        let err = run_policy(&["pagesim", "run", "-p", "clock"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);

        assert!(Cli::try_parse_from(["pagesim", "curve", "-p", "clock"]).is_err());
    }

    #[test]
    fn test_negative_frames_parse_then_fail_validation() {
        let cli = Cli::try_parse_from(["pagesim", "run", "-f", "-2"]).unwrap();
        match cli.command {
            Commands::Run { frames, .. } => {
                assert_eq!(frames, -2);
                assert!(SimulationConfig::new(frames, PolicyKind::Lru).is_err());
            }
            _ => panic!("Expected run command"),
        }
    }
}
