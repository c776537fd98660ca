//! Checker definitions.
//!
//! This module provides the core trait and harness for validation units:
//!
//! - [`Check`] - The trait every checker implements
//! - [`Checker`] - Runs one [`Check`] exactly once and owns its results
//! - [`CheckResult`] - Pass/fail outcome of a checker

use std::panic::{self, AssertUnwindSafe};

use super::report::{CapturedError, Report};
use super::reports::Reports;

/// Message of the synthetic failure recorded when a check itself breaks.
pub const UNHANDLED_ERROR_MESSAGE: &str = "Unhandled exception in 'check' routine";

/// A single, independent validation unit.
///
/// Checkers are built for one subject (see
/// [`CheckerRegistry`](super::CheckerRegistry)) and report problems they
/// find through the [`Reports`] sink. Returning an error means the checker
/// itself is broken, not the subject.
pub trait Check {
    /// Stable name of this checker, used in logs and skip lists.
    fn name(&self) -> &'static str;

    /// Inspect the subject and record failures and warnings.
    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()>;
}

/// Outcome of a checker or runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    /// No failures were recorded.
    Passed,
    /// At least one failure was recorded.
    Failed,
}

impl CheckResult {
    /// Whether the result is [`CheckResult::Passed`].
    pub fn passed(self) -> bool {
        self == CheckResult::Passed
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckResult::Passed => write!(f, "passed"),
            CheckResult::Failed => write!(f, "failed"),
        }
    }
}

/// Lifecycle harness around a boxed [`Check`].
pub struct Checker<'a> {
    check: Box<dyn Check + 'a>,
    reports: Reports,
    checked: bool,
}

impl<'a> Checker<'a> {
    /// Wrap a check that has not run yet.
    pub fn new(check: Box<dyn Check + 'a>) -> Self {
        Self {
            check,
            reports: Reports::new(),
            checked: false,
        }
    }

    /// Name of the wrapped check.
    pub fn name(&self) -> &'static str {
        self.check.name()
    }

    /// Whether [`perform_check`](Self::perform_check) has run.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Run the check.
    ///
    /// Errors returned from the check and panics raised by it are recorded
    /// as a single failure instead of being propagated. The process panic
    /// hook is left alone, so a panicking check still has its message
    /// printed to stderr by the default hook before the failure is recorded.
    ///
    /// # Panics
    ///
    /// Panics when called a second time.
    pub fn perform_check(&mut self) {
        assert!(
            !self.checked,
            "checker '{}' has already been performed",
            self.name()
        );
        let name = self.check.name();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.check.check(&mut self.reports)
        }));

        let captured = match outcome {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(CapturedError::from_anyhow(&err)),
            Err(payload) => Some(CapturedError::new(panic_message(payload.as_ref()))),
        };

        self.reports.clear_context();
        if let Some(error) = captured {
            tracing::error!("Checker '{}' raised an error: {}", name, error);
            self.reports.fail_with(UNHANDLED_ERROR_MESSAGE, error);
        }
        self.checked = true;
    }

    /// `Passed` iff no failures were recorded. Warnings are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the check has not been performed yet.
    pub fn result(&self) -> CheckResult {
        self.assert_checked();
        if self.reports.failures().is_empty() {
            CheckResult::Passed
        } else {
            CheckResult::Failed
        }
    }

    /// Failures in the order they were recorded.
    ///
    /// # Panics
    ///
    /// Panics if the check has not been performed yet.
    pub fn failures(&self) -> &[Report] {
        self.assert_checked();
        self.reports.failures()
    }

    /// Warnings in the order they were recorded.
    ///
    /// # Panics
    ///
    /// Panics if the check has not been performed yet.
    pub fn warnings(&self) -> &[Report] {
        self.assert_checked();
        self.reports.warnings()
    }

    /// Consume the checker, returning `(failures, warnings)`.
    ///
    /// # Panics
    ///
    /// Panics if the check has not been performed yet.
    pub fn into_reports(self) -> (Vec<Report>, Vec<Report>) {
        self.assert_checked();
        self.reports.into_parts()
    }

    fn assert_checked(&self) {
        assert!(
            self.checked,
            "Check '{}' has not been performed yet",
            self.check.name()
        );
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
