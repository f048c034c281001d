//! CLI command handlers.
//!
//! Each handler loads a configuration, drives an [`AnimationSession`]
//! headlessly and prints through [`super::output`].

use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use crate::config::RayleighConfig;
use crate::demos::{DemoEngine, DeterministicReplay, FrameOutcome};
use crate::engine::{AnimationSession, SimRng};
use crate::error::RayleighResult;
use crate::renderers::RecordingSink;

use super::output::{print_help, print_run_report, print_verify_report, print_version};
use super::{Args, Command};

/// Result of one headless run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Demo identification from the config's `meta` block.
    pub demo: String,
    /// Demo description.
    pub description: String,
    /// Seed the scatter RNG was created with.
    pub seed: u64,
    /// Palette name.
    pub palette: String,
    /// Frames per run.
    pub total_frames: u32,
    /// Frames on which the cloud was regenerated.
    pub regenerations: Vec<u32>,
    /// Checksum of the final engine state.
    pub checksum: u64,
    /// Caption on the last frame.
    pub final_caption: String,
    /// Per-frame trace.
    pub frames: Vec<FrameOutcome>,
}

/// Result of a reproducibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// Seed shared by every run.
    pub seed: u64,
    /// Number of runs compared.
    pub runs: usize,
    /// Final-state checksum of each run.
    pub checksums: Vec<u64>,
    /// Whether every run produced the same trace and checksum.
    pub identical: bool,
}

/// Main CLI entry point.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            config_path,
            seed_override,
            json,
        } => run_animation(config_path.as_deref(), seed_override, json),
        Command::Verify { config_path, runs } => verify_reproducibility(config_path.as_deref(), runs),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Load `path`, or the embedded default when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: Option<&Path>) -> RayleighResult<RayleighConfig> {
    path.map_or_else(|| Ok(RayleighConfig::embedded()), RayleighConfig::load)
}

/// Run one animation to completion without a display.
#[must_use]
pub fn simulate(mut config: RayleighConfig, seed_override: Option<u64>) -> RunReport {
    if seed_override.is_some() {
        config.seed = seed_override;
    }
    let palette = config.palette.name().to_string();
    let demo = config.meta.label();
    let description = config.meta.description.clone();
    let mut session = AnimationSession::new(config);
    let frames = session.run_to_completion();

    let mut sink = RecordingSink::default();
    session.present(&mut sink);

    let engine = session.engine();
    RunReport {
        demo,
        description,
        seed: engine.seed(),
        palette,
        total_frames: engine.total_frames(),
        regenerations: session.regenerations().to_vec(),
        checksum: engine.state_checksum(),
        final_caption: sink.last_text().unwrap_or_default().to_string(),
        frames,
    }
}

/// Run the same configuration `runs` times with one seed and compare.
///
/// A config without a seed gets one drawn from entropy, shared by all runs.
#[must_use]
pub fn verify(config: &RayleighConfig, runs: usize) -> VerifyReport {
    let seed = config
        .seed
        .unwrap_or_else(|| SimRng::from_entropy().master_seed());
    let reports: Vec<RunReport> = (0..runs)
        .map(|_| simulate(config.clone(), Some(seed)))
        .collect();

    let identical = reports.windows(2).all(|w| w[0] == w[1]);
    VerifyReport {
        seed,
        runs,
        checksums: reports.iter().map(|r| r.checksum).collect(),
        identical,
    }
}

/// Handler for `rayleigh run`.
#[must_use]
pub fn run_animation(path: Option<&Path>, seed_override: Option<u64>, json: bool) -> ExitCode {
    let config = match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };
    log::info!(
        "running {} ({})",
        config.meta.id,
        path.map_or_else(|| "embedded".to_string(), |p| p.display().to_string())
    );

    let report = simulate(config, seed_override);
    match print_run_report(&report, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Handler for `rayleigh verify`.
#[must_use]
pub fn verify_reproducibility(path: Option<&Path>, runs: usize) -> ExitCode {
    let config = match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let report = verify(&config, runs);
    print_verify_report(&report);
    if report.identical {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
