//! Review command implementation.
//!
//! Runs the repository and/or package checkers against every path, renders
//! the results and folds them into an exit code:
//!
//! - `1` package checks finished with failures
//! - `2` repository checks finished with failures
//! - `4` a path could not be opened

use std::io::Write;
use std::path::Path;

use crate::check::{CheckRunner, CheckerRegistry};
use crate::error::Result;
use crate::package::PackageRoot;
use crate::repo::{GitCheckout, Repository};

use super::command::{Command, CommandResult};
use super::output::{
    HumanFormatter, JsonFormatter, OutputFormat, ReviewFormatter, SectionKind, SectionOutcome,
    SubjectReview,
};
use super::settings::ReviewSettings;

/// Package checks finished with failures.
pub const EXIT_PACKAGE_FAILED: u8 = 1;
/// Repository checks finished with failures.
pub const EXIT_REPOSITORY_FAILED: u8 = 2;
/// A path could not be opened.
pub const EXIT_UNREADABLE: u8 = 4;

/// The review command implementation.
pub struct ReviewCommand {
    settings: ReviewSettings,
}

impl ReviewCommand {
    /// Create a new review command.
    pub fn new(settings: ReviewSettings) -> Self {
        Self { settings }
    }

    /// Get the resolved settings.
    pub fn settings(&self) -> &ReviewSettings {
        &self.settings
    }

    /// Review one path, returning its results and exit code flags.
    pub fn review_path(&self, path: &Path) -> (SubjectReview, u8) {
        let mut review = SubjectReview::new(path);
        let mut flags = 0;
        tracing::info!("Reviewing {}", path.display());

        if self.settings.mode.checks_repository() {
            match GitCheckout::open(path) {
                Ok(checkout) => {
                    let mut registry = CheckerRegistry::<dyn Repository>::repo_checkers();
                    registry.without(&self.settings.skip);
                    let subject: &(dyn Repository + 'static) = &checkout;
                    let outcome = self.run_section(SectionKind::Repository, registry, subject);
                    if !outcome.passed {
                        flags |= EXIT_REPOSITORY_FAILED;
                    }
                    review.sections.push(outcome);
                }
                Err(e) => {
                    tracing::error!("Unable to open repository {}: {}", path.display(), e);
                    review.error = Some(e.to_string());
                    flags |= EXIT_UNREADABLE;
                }
            }
        }

        if self.settings.mode.checks_package() {
            match PackageRoot::open(path) {
                Ok(package) => {
                    let mut registry = CheckerRegistry::<PackageRoot>::file_checkers();
                    registry.without(&self.settings.skip);
                    let outcome = self.run_section(SectionKind::Package, registry, &package);
                    if !outcome.passed {
                        flags |= EXIT_PACKAGE_FAILED;
                    }
                    review.sections.push(outcome);
                }
                Err(e) => {
                    tracing::error!("Unable to open package {}: {}", path.display(), e);
                    review.error = Some(e.to_string());
                    flags |= EXIT_UNREADABLE;
                }
            }
        }

        (review, flags)
    }

    fn run_section<S: ?Sized>(
        &self,
        kind: SectionKind,
        registry: CheckerRegistry<S>,
        subject: &S,
    ) -> SectionOutcome {
        let mut runner = CheckRunner::new(registry, self.settings.fail_on_warnings);
        runner.run(subject);
        let outcome = SectionOutcome {
            kind,
            passed: runner.result(),
            failures: runner.failures().to_vec(),
            warnings: runner.warnings().to_vec(),
        };
        tracing::debug!(
            "{}: {} failures, {} warnings",
            kind.title(),
            outcome.failures.len(),
            outcome.warnings.len()
        );
        outcome
    }
}

impl Command for ReviewCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        for name in self.settings.unknown_skips() {
            tracing::warn!("Unknown checker '{}' in skip list", name);
        }

        let mut flags = 0;
        let mut reviews = Vec::with_capacity(self.settings.paths.len());
        for path in &self.settings.paths {
            let (review, path_flags) = self.review_path(path);
            flags |= path_flags;
            reviews.push(review);
        }

        let mut out = out;
        match self.settings.format {
            OutputFormat::Human => {
                HumanFormatter::new(self.settings.color).format(&reviews, &mut out)?
            }
            OutputFormat::Json => JsonFormatter::new().format(&reviews, &mut out)?,
        }

        Ok(CommandResult::from_flags(flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::package;
    use crate::cli::settings::ReviewMode;
    use tempfile::TempDir;

    fn command(paths: Vec<std::path::PathBuf>) -> ReviewCommand {
        ReviewCommand::new(ReviewSettings {
            paths,
            ..ReviewSettings::default()
        })
    }

    fn run(command: &ReviewCommand) -> (CommandResult, String) {
        let mut output = Vec::new();
        let result = command.execute(&mut output).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn clean_package_exits_zero() {
        let (temp, _root) = package(&[("plugin.py", "")]);
        let (result, output) = run(&command(vec![temp.path().to_path_buf()]));

        assert_eq!(result, CommandResult::success());
        assert!(output.contains("No failures"));
    }

    #[test]
    fn failing_package_sets_package_flag() {
        let (temp, _root) = package(&[(
            "Default.sublime-keymap",
            r#"[{"keys": ["ctrl+shift+p"], "command": "x"}]"#,
        )]);
        let (result, output) = run(&command(vec![temp.path().to_path_buf()]));

        assert_eq!(result.exit_code, EXIT_PACKAGE_FAILED);
        assert!(output.contains("unconditionally overrides a default binding"));
    }

    #[test]
    fn warnings_fail_only_when_asked() {
        let (temp, _root) = package(&[("plugin.py", ""), ("Syntax.sublime-syntax", "")]);
        let mut cmd = command(vec![temp.path().to_path_buf()]);
        assert!(run(&cmd).0.success);

        cmd.settings.fail_on_warnings = true;
        assert_eq!(run(&cmd).0.exit_code, EXIT_PACKAGE_FAILED);
    }

    #[test]
    fn missing_path_sets_unreadable_flag_and_continues() {
        let temp = TempDir::new().unwrap();
        let (good, _root) = package(&[("plugin.py", "")]);
        let (result, output) = run(&command(vec![
            temp.path().join("missing"),
            good.path().to_path_buf(),
        ]));

        assert_eq!(result.exit_code, EXIT_UNREADABLE);
        assert!(output.contains("Unable to review"));
        assert_eq!(output.matches("## Report for").count(), 2);
    }

    #[test]
    fn skipped_checkers_do_not_run() {
        let (temp, _root) = package(&[("package-metadata.json", "{}"), ("plugin.py", "")]);
        let mut cmd = command(vec![temp.path().to_path_buf()]);
        assert_eq!(run(&cmd).0.exit_code, EXIT_PACKAGE_FAILED);

        cmd.settings.skip = vec!["package-metadata".to_string()];
        assert!(run(&cmd).0.success);
    }

    #[test]
    fn repository_mode_on_non_repository_is_unreadable() {
        let temp = TempDir::new().unwrap();
        let mut cmd = command(vec![temp.path().to_path_buf()]);
        cmd.settings.mode = ReviewMode::RepositoryOnly;

        let (result, _) = run(&cmd);
        assert_eq!(result.exit_code & EXIT_UNREADABLE, EXIT_UNREADABLE);
    }

    #[test]
    fn package_checks_still_run_when_repository_cannot_be_opened() {
        let (temp, _root) = package(&[(
            "Default.sublime-keymap",
            r#"[{"keys": ["ctrl+shift+p"], "command": "x"}]"#,
        )]);
        let mut cmd = command(vec![temp.path().to_path_buf()]);
        cmd.settings.mode = ReviewMode::PackageAndRepository;

        let (review, flags) = cmd.review_path(temp.path());
        assert!(review.error.is_some());
        assert_eq!(flags, EXIT_UNREADABLE | EXIT_PACKAGE_FAILED);
        assert_eq!(review.sections.len(), 1);
        assert_eq!(review.sections[0].kind, SectionKind::Package);
    }
}
