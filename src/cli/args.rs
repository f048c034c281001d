//! CLI argument parsing.
//!
//! Hand-rolled so the parser can be driven from any iterator of strings.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run one animation headlessly and print its frame trace
    Run {
        /// Optional YAML config; the embedded default is used when absent.
        config_path: Option<PathBuf>,
        /// Optional seed override.
        seed_override: Option<u64>,
        /// Emit JSON instead of a text trace.
        json: bool,
    },
    /// Check that same-seed runs produce identical traces
    Verify {
        /// Optional YAML config.
        config_path: Option<PathBuf>,
        /// Number of runs to compare.
        runs: usize,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(&args[2..]),
            "verify" => Self::parse_verify_command(&args[2..]),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    fn parse_run_command(rest: &[String]) -> Command {
        let mut config_path = None;
        let mut seed_override = None;
        let mut json = false;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--seed" => {
                    match rest.get(i + 1).map(|s| s.parse::<u64>()) {
                        Some(Ok(seed)) => seed_override = Some(seed),
                        Some(Err(_)) => eprintln!("Warning: ignoring invalid seed '{}'", rest[i + 1]),
                        None => eprintln!("Warning: '--seed' requires a value"),
                    }
                    i += 2;
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                flag if flag.starts_with('-') => {
                    eprintln!("Warning: ignoring unknown option '{flag}'");
                    i += 1;
                }
                path => {
                    if config_path.is_none() {
                        config_path = Some(PathBuf::from(path));
                    }
                    i += 1;
                }
            }
        }

        Command::Run {
            config_path,
            seed_override,
            json,
        }
    }

    fn parse_verify_command(rest: &[String]) -> Command {
        let mut config_path = None;
        let mut runs = 3;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--runs" => {
                    if let Some(Ok(n)) = rest.get(i + 1).map(|s| s.parse::<usize>()) {
                        runs = n.max(2);
                    }
                    i += 2;
                }
                flag if flag.starts_with('-') => i += 1,
                path => {
                    if config_path.is_none() {
                        config_path = Some(PathBuf::from(path));
                    }
                    i += 1;
                }
            }
        }

        Command::Verify { config_path, runs }
    }
}
