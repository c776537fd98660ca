//! Checker execution framework.
//!
//! This module provides the machinery every package and repository check
//! runs on.
//!
//! # Overview
//!
//! The framework consists of:
//!
//! - **Checks** - Independent validation units ([`Check`] trait)
//! - **Checker** - Lifecycle harness isolating a check's failures ([`Checker`])
//! - **Registry** - Ordered checker factories per subject kind ([`CheckerRegistry`])
//! - **Runner** - Runs a registry against one subject ([`CheckRunner`])
//! - **Reports** - Failures and warnings with context ([`Report`], [`Reports`])
//!
//! # Example
//!
//! ```
//! use st_package_reviewer::check::{Check, CheckRunner, CheckerRegistry, Reports};
//!
//! struct NotEmpty<'a>(&'a str);
//!
//! impl Check for NotEmpty<'_> {
//!     fn name(&self) -> &'static str {
//!         "not-empty"
//!     }
//!
//!     fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
//!         if self.0.is_empty() {
//!             reports.fail("subject is empty");
//!         }
//!         Ok(())
//!     }
//! }
//!
//! fn not_empty(subject: &str) -> Box<dyn Check + '_> {
//!     Box::new(NotEmpty(subject))
//! }
//!
//! let mut registry = CheckerRegistry::<str>::new();
//! registry.register("not-empty", not_empty);
//!
//! let mut runner = CheckRunner::new(registry, false);
//! runner.run("");
//! assert!(!runner.result());
//! assert_eq!(runner.failures()[0].message(), "subject is empty");
//! ```

pub mod checker;
pub mod registry;
pub mod report;
pub mod reports;
pub mod runner;

pub use checker::{Check, CheckResult, Checker, UNHANDLED_ERROR_MESSAGE};
pub use registry::{CheckerEntry, CheckerFactory, CheckerRegistry};
pub use report::{CapturedError, Report};
pub use reports::{ContextGuard, Reports};
pub use runner::{render_reports, summary_line, CheckRunner};
