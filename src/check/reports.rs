//! Report sink with a context stack.
//!
//! Checks write their findings into a [`Reports`] sink. Labels pushed with
//! [`Reports::context`] are attached to every report created while the
//! returned [`ContextGuard`] is alive:
//!
//! ```
//! use st_package_reviewer::check::Reports;
//!
//! let mut reports = Reports::new();
//! {
//!     let mut file = reports.context("File: Default.sublime-keymap");
//!     let mut binding = file.context("Binding: {}");
//!     binding.fail("Binding is missing the keys [\"command\", \"keys\"]");
//! }
//! reports.warn("outside of any context");
//!
//! assert_eq!(reports.failures()[0].context().len(), 2);
//! assert!(reports.warnings()[0].context().is_empty());
//! ```

use std::ops::{Deref, DerefMut};

use super::report::{CapturedError, Report};

/// Collected failures and warnings of one check, plus the active context.
#[derive(Debug, Default)]
pub struct Reports {
    failures: Vec<Report>,
    warnings: Vec<Report>,
    context_stack: Vec<String>,
}

impl Reports {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure.
    pub fn fail(&mut self, message: impl Into<String>) {
        let report = self.make_report(message, None);
        self.failures.push(report);
    }

    /// Record a failure caused by an error.
    pub fn fail_with(&mut self, message: impl Into<String>, error: CapturedError) {
        let report = self.make_report(message, Some(error));
        self.failures.push(report);
    }

    /// Record a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        let report = self.make_report(message, None);
        self.warnings.push(report);
    }

    /// Record a warning caused by an error.
    pub fn warn_with(&mut self, message: impl Into<String>, error: CapturedError) {
        let report = self.make_report(message, Some(error));
        self.warnings.push(report);
    }

    /// Push a context label until the returned guard is dropped.
    pub fn context(&mut self, label: impl Into<String>) -> ContextGuard<'_> {
        let depth = self.context_stack.len();
        self.context_stack.push(label.into());
        ContextGuard {
            reports: self,
            depth,
        }
    }

    /// Failures recorded so far, in insertion order.
    pub fn failures(&self) -> &[Report] {
        &self.failures
    }

    /// Warnings recorded so far, in insertion order.
    pub fn warnings(&self) -> &[Report] {
        &self.warnings
    }

    /// Labels currently on the context stack, outermost first.
    pub fn context_stack(&self) -> &[String] {
        &self.context_stack
    }

    pub(crate) fn clear_context(&mut self) {
        self.context_stack.clear();
    }

    /// Split into `(failures, warnings)`.
    pub fn into_parts(self) -> (Vec<Report>, Vec<Report>) {
        (self.failures, self.warnings)
    }

    fn make_report(&self, message: impl Into<String>, error: Option<CapturedError>) -> Report {
        Report::new(message, self.context_stack.clone(), error)
    }
}

/// Scope guard returned by [`Reports::context`].
///
/// Dereferences to the underlying [`Reports`], so reports and nested
/// contexts go through the guard. Dropping it restores the stack to the
/// depth it had before the label was pushed.
#[derive(Debug)]
pub struct ContextGuard<'a> {
    reports: &'a mut Reports,
    depth: usize,
}

impl Deref for ContextGuard<'_> {
    type Target = Reports;

    fn deref(&self) -> &Reports {
        self.reports
    }
}

impl DerefMut for ContextGuard<'_> {
    fn deref_mut(&mut self) -> &mut Reports {
        self.reports
    }
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        self.reports.context_stack.truncate(self.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_outside_context_have_no_labels() {
        let mut reports = Reports::new();
        reports.fail("plain");
        assert!(reports.failures()[0].context().is_empty());
    }

    #[test]
    fn context_is_popped_after_scope() {
        let mut reports = Reports::new();
        {
            let mut ctx = reports.context("File: a.py");
            ctx.warn("inside");
            assert_eq!(ctx.context_stack(), ["File: a.py".to_string()]);
        }
        reports.warn("outside");

        assert_eq!(reports.warnings()[0].context(), ["File: a.py".to_string()]);
        assert!(reports.warnings()[1].context().is_empty());
        assert!(reports.context_stack().is_empty());
    }

    #[test]
    fn nested_contexts_are_snapshotted() {
        let mut reports = Reports::new();
        {
            let mut outer = reports.context("outer");
            {
                let mut inner = outer.context("inner");
                inner.fail("deep");
            }
            outer.fail("shallow");
        }

        assert_eq!(
            reports.failures()[0].context(),
            ["outer".to_string(), "inner".to_string()]
        );
        assert_eq!(reports.failures()[1].context(), ["outer".to_string()]);
    }

    #[test]
    fn context_is_popped_on_early_return() {
        fn failing(reports: &mut Reports) -> anyhow::Result<()> {
            let mut ctx = reports.context("File: broken.json");
            ctx.fail("first");
            anyhow::bail!("bail out");
        }

        let mut reports = Reports::new();
        assert!(failing(&mut reports).is_err());
        assert!(reports.context_stack().is_empty());
        assert_eq!(
            reports.failures()[0].context(),
            ["File: broken.json".to_string()]
        );
    }

    #[test]
    fn context_is_popped_on_panic() {
        let mut reports = Reports::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ctx = reports.context("doomed");
            panic!("boom");
        }));

        assert!(result.is_err());
        assert!(reports.context_stack().is_empty());
    }

    #[test]
    fn fail_with_attaches_error() {
        let mut reports = Reports::new();
        reports.fail_with("bad", CapturedError::new("cause"));
        assert_eq!(reports.failures()[0].error().unwrap().summary, "cause");
    }

    #[test]
    fn into_parts_preserves_order() {
        let mut reports = Reports::new();
        reports.fail("one");
        reports.warn("w");
        reports.fail("two");

        let (failures, warnings) = reports.into_parts();
        let messages: Vec<_> = failures.iter().map(|r| r.message()).collect();
        assert_eq!(messages, ["one", "two"]);
        assert_eq!(warnings.len(), 1);
    }
}
