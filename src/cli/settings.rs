//! Review settings.
//!
//! [`ReviewSettings`] is the resolved configuration of one reviewer run.
//! It is built from the parsed [`Cli`], which already folds in the
//! `ST_REVIEWER_*` environment variables.

use std::path::PathBuf;

use super::args::Cli;
use super::output::{should_use_colors, OutputFormat};
use crate::checks::all_checker_names;

/// Which checker groups run for each path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewMode {
    /// Package checks only.
    #[default]
    Package,
    /// Repository checks, then package checks.
    PackageAndRepository,
    /// Repository checks only.
    RepositoryOnly,
}

impl ReviewMode {
    /// Whether the package (file) checkers run.
    pub fn checks_package(self) -> bool {
        self != ReviewMode::RepositoryOnly
    }

    /// Whether the repository checkers run.
    pub fn checks_repository(self) -> bool {
        self != ReviewMode::Package
    }
}

/// Resolved settings for a review run.
#[derive(Debug, Clone)]
pub struct ReviewSettings {
    pub paths: Vec<PathBuf>,
    pub mode: ReviewMode,
    pub fail_on_warnings: bool,
    /// Names of checkers to leave out.
    pub skip: Vec<String>,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            mode: ReviewMode::default(),
            fail_on_warnings: false,
            skip: Vec::new(),
            format: OutputFormat::Human,
            color: false,
        }
    }
}

impl ReviewSettings {
    /// Resolve settings from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let mode = if cli.repo_only {
            ReviewMode::RepositoryOnly
        } else if cli.repo {
            ReviewMode::PackageAndRepository
        } else {
            ReviewMode::Package
        };

        Self {
            paths: cli.paths.clone(),
            mode,
            fail_on_warnings: cli.fail_on_warnings,
            skip: cli
                .skip
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            format: cli.format,
            color: !cli.no_color && should_use_colors(),
        }
    }

    /// Skip entries that name no known checker.
    pub fn unknown_skips(&self) -> Vec<&str> {
        let known = all_checker_names();
        self.skip
            .iter()
            .map(String::as_str)
            .filter(|name| !known.contains(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn settings(args: &[&str]) -> ReviewSettings {
        let mut argv = vec!["st-package-reviewer"];
        argv.extend_from_slice(args);
        ReviewSettings::from_cli(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn default_mode_checks_package_only() {
        let settings = settings(&["Pkg"]);
        assert_eq!(settings.mode, ReviewMode::Package);
        assert!(settings.mode.checks_package());
        assert!(!settings.mode.checks_repository());
    }

    #[test]
    fn repo_flags_select_mode() {
        assert_eq!(
            settings(&["--repo", "Pkg"]).mode,
            ReviewMode::PackageAndRepository
        );
        let only = settings(&["--repo-only", "Pkg"]).mode;
        assert_eq!(only, ReviewMode::RepositoryOnly);
        assert!(!only.checks_package());
    }

    #[test]
    fn no_color_wins() {
        assert!(!settings(&["--no-color", "Pkg"]).color);
    }

    #[test]
    fn unknown_skips_are_listed() {
        let settings = settings(&["--skip", "readme, bogus,,", "Pkg"]);
        assert_eq!(settings.skip, ["readme", "bogus"]);
        assert_eq!(settings.unknown_skips(), ["bogus"]);
    }
}
