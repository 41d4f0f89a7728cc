//! Ferrite CLI — the command-line interface for the Ferrite EDB
//! configuration tool.
//!
//! Provides `ferrite check` for validating a configuration file in isolation
//! and `ferrite apply` for running a configuration against a design
//! inventory snapshot, recording the mutations the live engine would see.

#![warn(missing_docs)]

mod apply;
mod check;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Ferrite — a configuration layer for electrical design databases.
#[derive(Parser, Debug)]
#[command(name = "ferrite", version, about = "Ferrite EDB configuration tool")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a configuration file without touching a design.
    Check(CheckArgs),
    /// Apply a configuration to a design inventory snapshot.
    Apply(ApplyArgs),
}

/// Arguments for the `ferrite check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Configuration file to validate (`.json` or `.toml`).
    pub config: String,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `ferrite apply` subcommand.
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Configuration file to apply (`.json` or `.toml`).
    pub config: String,

    /// Design inventory snapshot (JSON).
    #[arg(short, long)]
    pub design: String,

    /// Write the recorded mutation log to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Run the pass but write nothing, even if `--output` is given.
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for diagnostics and the report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to use colored output.
    pub color: bool,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => atty_is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
    };

    let result = match cli.command {
        Command::Check(ref args) => check::run(args, &global),
        Command::Apply(ref args) => apply::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Rough terminal detection — checks if stdout is a terminal.
fn atty_is_terminal() -> bool {
    // Use a simple heuristic: check the TERM env var.
    // In a real build we'd use the `is-terminal` crate, but this is
    // sufficient for now.
    std::env::var("TERM").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_check_default() {
        let cli = Cli::parse_from(["ferrite", "check", "board.json"]);
        match cli.command {
            Command::Check(ref args) => {
                assert_eq!(args.config, "board.json");
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_check_json_format() {
        let cli = Cli::parse_from(["ferrite", "check", "board.toml", "--format", "json"]);
        match cli.command {
            Command::Check(ref args) => {
                assert_eq!(args.config, "board.toml");
                assert_eq!(args.format, ReportFormat::Json);
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_apply_basic() {
        let cli = Cli::parse_from(["ferrite", "apply", "board.json", "--design", "snapshot.json"]);
        match cli.command {
            Command::Apply(ref args) => {
                assert_eq!(args.config, "board.json");
                assert_eq!(args.design, "snapshot.json");
                assert!(args.output.is_none());
                assert!(!args.dry_run);
            }
            _ => panic!("expected Apply command"),
        }
    }

    #[test]
    fn parse_apply_with_output() {
        let cli = Cli::parse_from([
            "ferrite",
            "apply",
            "board.json",
            "--design",
            "snapshot.json",
            "--output",
            "mutations.json",
        ]);
        match cli.command {
            Command::Apply(ref args) => {
                assert_eq!(args.output.as_deref(), Some("mutations.json"));
            }
            _ => panic!("expected Apply command"),
        }
    }

    #[test]
    fn parse_apply_dry_run() {
        let cli = Cli::parse_from([
            "ferrite",
            "apply",
            "board.json",
            "-d",
            "snapshot.json",
            "--dry-run",
        ]);
        match cli.command {
            Command::Apply(ref args) => {
                assert!(args.dry_run);
            }
            _ => panic!("expected Apply command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["ferrite", "--quiet", "--color", "never", "check", "c.json"]);
        assert!(cli.quiet);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_color_always() {
        let cli = Cli::parse_from(["ferrite", "--color", "always", "check", "c.json"]);
        assert_eq!(cli.color, ColorChoice::Always);
    }
}
