//! Command-line interface for the package reviewer.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`settings`] - Settings resolved from arguments and environment
//! - [`review`] - The review command
//! - [`output`] - Human and JSON formatters

pub mod args;
pub mod command;
pub mod output;
pub mod review;
pub mod settings;

pub use args::Cli;
pub use command::{Command, CommandResult};
pub use output::{OutputFormat, SubjectReview};
pub use review::ReviewCommand;
pub use settings::{ReviewMode, ReviewSettings};
