//! JSON output formatter.
//!
//! Formats review results as machine-readable JSON for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::{ReviewFormatter, SubjectReview};

/// Formats review output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    reviews: &'a [SubjectReview],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    subjects: usize,
    failures: usize,
    warnings: usize,
    errors: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewFormatter for JsonFormatter {
    fn format<W: Write>(&self, reviews: &[SubjectReview], writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            reviews,
            summary: JsonSummary {
                subjects: reviews.len(),
                failures: reviews.iter().map(SubjectReview::failure_count).sum(),
                warnings: reviews.iter().map(SubjectReview::warning_count).sum(),
                errors: reviews.iter().filter(|r| r.error.is_some()).count(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
