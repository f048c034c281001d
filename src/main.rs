//! rayleigh CLI - headless runs and reproducibility checks
//!
//! The interactive animation is the `rayleigh-tui` binary.

use std::process::ExitCode;

use rayleigh::cli::{run_cli, Args};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run_cli(Args::parse())
}
