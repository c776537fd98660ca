//! Package reviewer CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use st_package_reviewer::cli::{Cli, Command, ReviewCommand, ReviewSettings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. `--verbose` sets level to INFO
/// 4. Default is WARN
///
/// Logs go to stderr so that stdout only carries the report.
fn init_tracing(debug: bool, verbose: bool) {
    let filter = if debug {
        EnvFilter::new("st_package_reviewer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if verbose {
                "st_package_reviewer=info"
            } else {
                "st_package_reviewer=warn"
            })
        })
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.verbose);

    tracing::debug!("Reviewer starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let command = ReviewCommand::new(ReviewSettings::from_cli(&cli));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = command.execute(&mut out);
    let _ = out.flush();

    match result {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
