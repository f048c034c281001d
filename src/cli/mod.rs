//! CLI module for rayleigh.
//!
//! All CLI logic lives here so it can be tested; `main.rs` only parses
//! arguments and calls [`run_cli`].

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::{load_config, run_cli, simulate, verify, RunReport, VerifyReport};
pub use output::{format_frame_line, format_run_summary, print_help, print_version};

#[cfg(test)]
mod tests;
