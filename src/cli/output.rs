//! CLI output formatting.

use crate::demos::{FrameOutcome, Phase};
use crate::error::RayleighResult;

use super::commands::{RunReport, VerifyReport};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Print version information.
pub fn print_version() {
    println!(
        "rayleigh {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("RAYLEIGH_GIT_HASH")
    );
}

/// Print help message.
pub fn print_help() {
    println!(
        r"rayleigh - Rayleigh scattering animation

USAGE:
    rayleigh <COMMAND> [OPTIONS]

COMMANDS:
    run [config.yaml]           Run one animation headlessly, print the frame trace
        --seed <N>              Override the scatter seed
        --json                  Emit the trace as JSON

    verify [config.yaml]        Check that same-seed runs are identical
        --runs <N>              Number of runs to compare (default: 3)

    help                        Show this help message
    version                     Show version information

Without a config file the embedded experiments/rayleigh_default.yaml is used.
The interactive animation is the rayleigh-tui binary.

ENVIRONMENT:
    RUST_LOG                    Log filter (default: warn)

EXAMPLES:
    rayleigh run --seed 7
    rayleigh run experiments/rayleigh_default.yaml --json
    rayleigh verify --runs 5
"
    );
}

/// One text line of the frame trace.
#[must_use]
pub fn format_frame_line(outcome: &FrameOutcome) -> String {
    match outcome.phase {
        Phase::Approach => format!(
            "frame {:3}  approach  head x = {:+.3}",
            outcome.frame,
            outcome.beam_head_x.unwrap_or_default()
        ),
        Phase::Scatter => format!(
            "frame {:3}  scatter   {:.1} nm  fill {:.3}{}",
            outcome.frame,
            outcome.wavelength_nm.unwrap_or_default(),
            outcome.fill_width,
            if outcome.regenerated { "  cloud" } else { "" }
        ),
    }
}

/// Summary block printed after the trace.
#[must_use]
pub fn format_run_summary(report: &RunReport) -> String {
    let mut summary = format!("Demo:          {}\n", report.demo);
    if !report.description.is_empty() {
        summary.push_str(&format!("About:         {}\n", report.description));
    }
    summary.push_str(&format!(
        "Seed:          {}\nPalette:       {}\nFrames:        {}\nRegenerations: {}\nChecksum:      {:016x}\nCaption:       {}",
        report.seed,
        report.palette,
        report.frames.len(),
        report.regenerations.len(),
        report.checksum,
        report.final_caption.replace('\n', " | "),
    ));
    summary
}

/// Print a run report as a text trace or as JSON.
///
/// # Errors
///
/// Returns `RayleighError::Serialization` if JSON encoding fails.
pub fn print_run_report(report: &RunReport, json: bool) -> RayleighResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for outcome in &report.frames {
        println!("{}", format_frame_line(outcome));
    }
    println!("{RULE}");
    println!("{}", format_run_summary(report));
    println!("{RULE}");
    Ok(())
}

/// Print a reproducibility report.
pub fn print_verify_report(report: &VerifyReport) {
    let sym = if report.identical { "✓" } else { "✗" };
    let status = if report.identical { "PASSED" } else { "FAILED" };

    println!("{RULE}");
    println!("Reproducibility Check");
    println!("{RULE}\n");
    println!("  Seed:      {}", report.seed);
    println!("  Runs:      {}", report.runs);
    println!("  Identical: {}", report.identical);
    println!("\n  Run Checksums:");
    for (i, checksum) in report.checksums.iter().enumerate() {
        println!("    {}: {checksum:016x}", i + 1);
    }
    println!("\n{RULE}");
    println!("{sym} Result: {status}");
    println!("{RULE}");
}
