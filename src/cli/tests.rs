//! CLI module tests.

use super::args::{Args, Command};
use super::commands::{load_config, run_cli, simulate, verify};
use super::output::{format_frame_line, format_run_summary};
use crate::config::RayleighConfig;
use crate::demos::{FrameOutcome, Phase};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn seeded(seed: u64) -> RayleighConfig {
    RayleighConfig::builder().seed(seed).build().expect("config")
}

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["rayleigh"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_variants() {
    for flag in ["-h", "--help", "help"] {
        assert_eq!(Args::parse_from(["rayleigh", flag]).command, Command::Help);
    }
}

#[test]
fn test_parse_version_variants() {
    for flag in ["-V", "--version", "version"] {
        assert_eq!(Args::parse_from(["rayleigh", flag]).command, Command::Version);
    }
}

#[test]
fn test_parse_unknown_command_shows_help() {
    let args = Args::parse_from(["rayleigh", "frobnicate"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_bare() {
    let args = Args::parse_from(["rayleigh", "run"]);
    assert_eq!(
        args.command,
        Command::Run {
            config_path: None,
            seed_override: None,
            json: false,
        }
    );
}

#[test]
fn test_parse_run_full() {
    let args = Args::parse_from(["rayleigh", "run", "scene.yaml", "--seed", "7", "--json"]);
    assert_eq!(
        args.command,
        Command::Run {
            config_path: Some(PathBuf::from("scene.yaml")),
            seed_override: Some(7),
            json: true,
        }
    );
}

#[test]
fn test_parse_run_options_before_path() {
    let args = Args::parse_from(["rayleigh", "run", "--seed", "9", "scene.yaml"]);
    assert_eq!(
        args.command,
        Command::Run {
            config_path: Some(PathBuf::from("scene.yaml")),
            seed_override: Some(9),
            json: false,
        }
    );
}

#[test]
fn test_parse_run_invalid_seed_ignored() {
    let args = Args::parse_from(["rayleigh", "run", "--seed", "abc"]);
    assert_eq!(
        args.command,
        Command::Run {
            config_path: None,
            seed_override: None,
            json: false,
        }
    );
}

#[test]
fn test_parse_run_missing_seed_value() {
    let args = Args::parse_from(["rayleigh", "run", "--seed"]);
    assert!(matches!(
        args.command,
        Command::Run {
            seed_override: None,
            ..
        }
    ));
}

#[test]
fn test_parse_verify_default_runs() {
    let args = Args::parse_from(["rayleigh", "verify"]);
    assert_eq!(
        args.command,
        Command::Verify {
            config_path: None,
            runs: 3,
        }
    );
}

#[test]
fn test_parse_verify_with_runs() {
    let args = Args::parse_from(["rayleigh", "verify", "scene.yaml", "--runs", "5"]);
    assert_eq!(
        args.command,
        Command::Verify {
            config_path: Some(PathBuf::from("scene.yaml")),
            runs: 5,
        }
    );
}

#[test]
fn test_parse_verify_runs_floor() {
    let args = Args::parse_from(["rayleigh", "verify", "--runs", "1"]);
    assert!(matches!(args.command, Command::Verify { runs: 2, .. }));
}

// ============================================================================
// Command tests
// ============================================================================

#[test]
fn test_load_config_embedded() {
    let config = load_config(None).expect("embedded config");
    assert_eq!(config.animation.total_frames, 100);
}

#[test]
fn test_load_config_missing_file() {
    assert!(load_config(Some(Path::new("/nonexistent/rayleigh.yaml"))).is_err());
}

#[test]
fn test_simulate_report() {
    let report = simulate(seeded(42), None);
    assert_eq!(report.seed, 42);
    assert_eq!(report.palette, "rainbow");
    assert_eq!(report.frames.len(), 100);
    assert_eq!(report.regenerations.len(), 24);
    assert_eq!(report.final_caption, "Rayleigh Scattering\nWavelength: 695.7 nm");
}

#[test]
fn test_simulate_seed_override() {
    let report = simulate(seeded(42), Some(7));
    assert_eq!(report.seed, 7);
    assert_ne!(report.checksum, simulate(seeded(42), None).checksum);
}

#[test]
fn test_verify_identical() {
    let report = verify(&seeded(5), 3);
    assert!(report.identical);
    assert_eq!(report.runs, 3);
    assert_eq!(report.checksums.len(), 3);
    assert!(report.checksums.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_verify_without_seed_shares_one() {
    let mut config = seeded(1);
    config.seed = None;
    let report = verify(&config, 2);
    assert!(report.identical);
}

#[test]
fn test_run_cli_help_and_version() {
    assert_eq!(run_cli(Args { command: Command::Help }), ExitCode::SUCCESS);
    assert_eq!(run_cli(Args { command: Command::Version }), ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_missing_config_fails() {
    let code = run_cli(Args {
        command: Command::Run {
            config_path: Some(PathBuf::from("/nonexistent/rayleigh.yaml")),
            seed_override: None,
            json: false,
        },
    });
    assert_eq!(code, ExitCode::from(1));
}

#[test]
fn test_run_cli_verify_embedded() {
    let code = run_cli(Args {
        command: Command::Verify {
            config_path: None,
            runs: 2,
        },
    });
    assert_eq!(code, ExitCode::SUCCESS);
}

// ============================================================================
// Output tests
// ============================================================================

#[test]
fn test_format_approach_line() {
    let outcome = FrameOutcome {
        frame: 0,
        phase: Phase::Approach,
        regenerated: false,
        wavelength_nm: None,
        fill_width: 0.0,
        beam_head_x: Some(-2.0),
    };
    assert_eq!(format_frame_line(&outcome), "frame   0  approach  head x = -2.000");
}

#[test]
fn test_format_scatter_line_marks_regeneration() {
    let outcome = FrameOutcome {
        frame: 30,
        phase: Phase::Scatter,
        regenerated: true,
        wavelength_nm: Some(400.0),
        fill_width: 0.0,
        beam_head_x: Some(0.0),
    };
    assert_eq!(
        format_frame_line(&outcome),
        "frame  30  scatter   400.0 nm  fill 0.000  cloud"
    );
}

#[test]
fn test_format_run_summary() {
    let report = simulate(seeded(42), None);
    let summary = format_run_summary(&report);
    assert!(summary.contains("Seed:          42"));
    assert!(summary.contains("Regenerations: 24"));
    assert!(summary.contains("Rayleigh Scattering | Wavelength: 695.7 nm"));
    assert!(summary.starts_with("Demo:          RAYLEIGH-001 v1.0.0\n"));
    assert!(summary.contains("About:         Laser beam scattering off a small particle"));
}

#[test]
fn test_format_run_summary_embedded_meta() {
    let config = load_config(None).expect("embedded config");
    let report = simulate(config, Some(42));
    assert_eq!(report.demo, "RAYLEIGH-001 v1.0.0 by PAIML (2026-10-17)");
    let summary = format_run_summary(&report);
    assert!(summary.contains("Demo:          RAYLEIGH-001 v1.0.0 by PAIML (2026-10-17)"));
    assert!(summary.contains("Seed:          42"));
}

#[test]
fn test_run_report_serializes() {
    let report = simulate(seeded(42), None);
    let json = serde_json::to_string(&report).expect("serialize");
    assert!(json.contains("\"regenerations\""));
    assert!(json.contains("\"scatter\""));
}
