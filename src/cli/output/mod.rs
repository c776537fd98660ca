//! Review output formatters.
//!
//! This module provides formatters for writing review results in different
//! formats (human-readable, JSON).

pub mod human;
pub mod json;
pub mod theme;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::check::Report;

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use theme::{should_use_colors, ReviewTheme};

/// Link printed after every human-readable report.
pub const WIKI_URL: &str = "https://github.com/packagecontrol/st_package_reviewer/wiki";

/// Output format for review results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Which group of checkers produced a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Repository,
    Package,
}

impl SectionKind {
    /// Heading used in human-readable output.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Repository => "Repository checks",
            SectionKind::Package => "Package checks",
        }
    }
}

/// Results of one checker registry run against one subject.
#[derive(Debug, Clone, Serialize)]
pub struct SectionOutcome {
    pub kind: SectionKind,
    pub passed: bool,
    pub failures: Vec<Report>,
    pub warnings: Vec<Report>,
}

/// Everything reported for one path given on the command line.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectReview {
    pub name: String,
    pub path: PathBuf,
    /// Why the path could not be reviewed, if it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub sections: Vec<SectionOutcome>,
}

impl SubjectReview {
    /// Start a review of `path`.
    pub fn new(path: &Path) -> Self {
        Self {
            name: subject_name(path),
            path: path.to_path_buf(),
            error: None,
            sections: Vec::new(),
        }
    }

    /// Total failures across all sections.
    pub fn failure_count(&self) -> usize {
        self.sections.iter().map(|s| s.failures.len()).sum()
    }

    /// Total warnings across all sections.
    pub fn warning_count(&self) -> usize {
        self.sections.iter().map(|s| s.warnings.len()).sum()
    }
}

fn subject_name(path: &Path) -> String {
    // `.` and `..` only get a name once resolved
    let resolved = std::fs::canonicalize(path).ok();
    resolved
        .as_deref()
        .unwrap_or(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Trait for formatting review output.
pub trait ReviewFormatter {
    /// Format reviews to the given writer.
    fn format<W: Write>(&self, reviews: &[SubjectReview], writer: &mut W) -> std::io::Result<()>;
}
