//! Check runner.
//!
//! [`CheckRunner`] runs every checker of a [`CheckerRegistry`] against one
//! subject, strictly in registration order, and collects their reports.

use std::io::Write;

use super::checker::Checker;
use super::registry::CheckerRegistry;
use super::report::Report;

/// Runs a set of checkers against one subject and aggregates the results.
pub struct CheckRunner<S: ?Sized> {
    registry: CheckerRegistry<S>,
    fail_on_warnings: bool,
    failures: Vec<Report>,
    warnings: Vec<Report>,
    checked: bool,
}

impl<S: ?Sized> CheckRunner<S> {
    /// Create a runner for the given checkers.
    pub fn new(registry: CheckerRegistry<S>, fail_on_warnings: bool) -> Self {
        Self {
            registry,
            fail_on_warnings,
            failures: Vec::new(),
            warnings: Vec::new(),
            checked: false,
        }
    }

    /// Whether warnings count as failures for [`result`](Self::result).
    pub fn fail_on_warnings(&self) -> bool {
        self.fail_on_warnings
    }

    /// Run all checkers against `subject`.
    ///
    /// Each checker is built fresh for the subject. A checker that errors
    /// or panics while checking contributes one failure; a factory that
    /// panics aborts the run.
    pub fn run(&mut self, subject: &S) {
        tracing::debug!("Running {} checkers...", self.registry.len());

        for entry in self.registry.iter() {
            let mut checker = Checker::new(entry.build(subject));
            checker.perform_check();
            tracing::debug!(
                "Checker '{}' result: {}",
                entry.name(),
                checker.result()
            );

            let (failures, warnings) = checker.into_reports();
            self.failures.extend(failures);
            self.warnings.extend(warnings);
        }

        self.checked = true;
    }

    /// `true` if there are no failures and, when `fail_on_warnings` is set,
    /// no warnings either.
    ///
    /// # Panics
    ///
    /// Panics if [`run`](Self::run) has not been called.
    pub fn result(&self) -> bool {
        self.assert_checked();
        let mut success = self.failures.is_empty();
        if self.fail_on_warnings {
            success &= self.warnings.is_empty();
        }
        success
    }

    /// All failures, in checker order then report order.
    ///
    /// # Panics
    ///
    /// Panics if [`run`](Self::run) has not been called.
    pub fn failures(&self) -> &[Report] {
        self.assert_checked();
        &self.failures
    }

    /// All warnings, in checker order then report order.
    ///
    /// # Panics
    ///
    /// Panics if [`run`](Self::run) has not been called.
    pub fn warnings(&self) -> &[Report] {
        self.assert_checked();
        &self.warnings
    }

    /// Write all failures, then all warnings.
    ///
    /// # Panics
    ///
    /// Panics if [`run`](Self::run) has not been called.
    pub fn report<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.assert_checked();
        render_reports(writer, &self.failures, &self.warnings)
    }

    fn assert_checked(&self) {
        assert!(self.checked, "Check has not been performed yet");
    }
}

/// Write failure and warning lists in the layout of [`CheckRunner::report`].
pub fn render_reports<W: Write>(
    writer: &mut W,
    failures: &[Report],
    warnings: &[Report],
) -> std::io::Result<()> {
    write_section(writer, "failures", failures)?;
    write_section(writer, "warnings", warnings)
}

/// The line introducing a list of `count` reports of the given kind.
pub fn summary_line(kind: &str, count: usize) -> String {
    if count == 0 {
        format!("No {}", kind)
    } else {
        format!("Reporting {} {}:", count, kind)
    }
}

fn write_section<W: Write>(writer: &mut W, kind: &str, reports: &[Report]) -> std::io::Result<()> {
    writeln!(writer, "{}", summary_line(kind, reports.len()))?;
    for report in reports {
        report.render(writer)?;
    }
    writeln!(writer)
}
