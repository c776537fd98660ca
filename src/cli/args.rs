//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use super::output::OutputFormat;

/// Review Sublime Text packages for common packaging and keybinding problems.
#[derive(Debug, Parser)]
#[command(name = "st-package-reviewer")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXIT_CODES_HELP)]
pub struct Cli {
    /// Package directories to review
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Return a non-zero exit code for warnings as well
    #[arg(
        short = 'w',
        long,
        env = "ST_REVIEWER_FAIL_ON_WARNINGS",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub fail_on_warnings: bool,

    /// Also check each path as a git repository (tags, README)
    #[arg(long, conflicts_with = "repo_only")]
    pub repo: bool,

    /// Only run the repository checks
    #[arg(long)]
    pub repo_only: bool,

    /// Checkers to skip (comma-separated names)
    #[arg(long, value_delimiter = ',', env = "ST_REVIEWER_SKIP")]
    pub skip: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

const EXIT_CODES_HELP: &str = "\
Exit codes (combined as bit flags):
  1  Package checks finished with failures
  2  Repository checks finished with failures
  4  A path could not be opened";
