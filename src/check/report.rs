//! Check reports.
//!
//! A [`Report`] is one failure or warning produced by a checker. Reports are
//! plain values: the context trail is a snapshot taken when the report was
//! created, and any error is captured as text so two reports can be compared
//! (and deduplicated) by value.

use std::fmt;
use std::io::Write;

use serde::Serialize;

const INDENT: &str = "    ";

/// A value-comparable capture of an error and its cause chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CapturedError {
    /// The error's own display message.
    pub summary: String,
    /// Display messages of the errors that caused it, outermost first.
    pub trace: Vec<String>,
}

impl CapturedError {
    /// Capture an error without a cause chain.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            trace: Vec::new(),
        }
    }

    /// Capture an `anyhow` error together with its sources.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        Self {
            summary: err.to_string(),
            trace: err.chain().skip(1).map(|cause| cause.to_string()).collect(),
        }
    }

    /// Capture any standard error together with its sources.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut trace = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push(cause.to_string());
            source = cause.source();
        }
        Self {
            summary: err.to_string(),
            trace,
        }
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)
    }
}

/// One failure or warning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Report {
    message: String,
    context: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<CapturedError>,
}

impl Report {
    /// Create a report.
    pub fn new(
        message: impl Into<String>,
        context: Vec<String>,
        error: Option<CapturedError>,
    ) -> Self {
        Self {
            message: message.into(),
            context,
            error,
        }
    }

    /// The report message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The context trail, outermost label first.
    pub fn context(&self) -> &[String] {
        &self.context
    }

    /// The captured error, if any.
    pub fn error(&self) -> Option<&CapturedError> {
        self.error.as_ref()
    }

    /// Render the report as indented text.
    pub fn render<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}", self.message)?;
        for label in &self.context {
            writeln!(f, "{}{}", INDENT, label)?;
        }
        if let Some(ref error) = self.error {
            writeln!(f, "{}Exception: {}", INDENT, error.summary)?;
            for cause in &error.trace {
                writeln!(f, "{}{}Caused by: {}", INDENT, INDENT, cause)?;
            }
        }
        Ok(())
    }
}
