//! Human-readable output formatter.
//!
//! Each reviewed path gets a `## Report for <name>` heading followed by the
//! failures and warnings of every checker group:
//!
//! ```text
//! ## Report for MyPackage ###############################
//!
//! Reporting 1 failures:
//! - The binding ["ctrl+shift+p"] unconditionally overrides a default binding
//!     File: Default (Linux).sublime-keymap
//!     Default command: show_overlay (Linux)
//!
//! No warnings
//! ```

use std::io::Write;

use console::Style;

use super::{ReviewFormatter, ReviewTheme, SectionOutcome, SubjectReview, WIKI_URL};
use crate::check::{summary_line, Report};

/// Formats review output for human consumption.
pub struct HumanFormatter {
    theme: ReviewTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: if use_color {
                ReviewTheme::new()
            } else {
                ReviewTheme::plain()
            },
        }
    }

    fn write_heading<W: Write>(&self, writer: &mut W, name: &str) -> std::io::Result<()> {
        let fill = "#".repeat(40usize.saturating_sub(name.chars().count()));
        writeln!(writer)?;
        writeln!(
            writer,
            "{}",
            self.theme
                .header
                .apply_to(format!("## Report for {} {}", name, fill))
        )?;
        writeln!(writer)
    }

    fn write_section<W: Write>(
        &self,
        writer: &mut W,
        section: &SectionOutcome,
        with_title: bool,
    ) -> std::io::Result<()> {
        if with_title {
            writeln!(
                writer,
                "{}",
                self.theme
                    .section
                    .apply_to(format!("### {} ###", section.kind.title()))
            )?;
            writeln!(writer)?;
        }
        self.write_reports(writer, "failures", &section.failures, &self.theme.failure)?;
        self.write_reports(writer, "warnings", &section.warnings, &self.theme.warning)
    }

    fn write_reports<W: Write>(
        &self,
        writer: &mut W,
        kind: &str,
        reports: &[Report],
        style: &Style,
    ) -> std::io::Result<()> {
        let style = if reports.is_empty() {
            &self.theme.success
        } else {
            style
        };
        writeln!(writer, "{}", style.apply_to(summary_line(kind, reports.len())))?;
        for report in reports {
            report.render(writer)?;
        }
        writeln!(writer)
    }
}

impl ReviewFormatter for HumanFormatter {
    fn format<W: Write>(&self, reviews: &[SubjectReview], writer: &mut W) -> std::io::Result<()> {
        for review in reviews {
            self.write_heading(writer, &review.name)?;

            if let Some(ref error) = review.error {
                writeln!(
                    writer,
                    "{}",
                    self.theme
                        .failure
                        .apply_to(format!("Unable to review '{}': {}", review.path.display(), error))
                )?;
                writeln!(writer)?;
            }

            let with_titles = review.sections.len() > 1;
            for section in &review.sections {
                self.write_section(writer, section, with_titles)?;
            }
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "{}",
            self.theme.dim.apply_to(format!(
                "For more details on the report messages (for example how to resolve them), go to:\n{}",
                WIKI_URL
            ))
        )?;
        writeln!(writer)
    }
}
