//! Error types for reviewer operations.
//!
//! This module defines [`ReviewError`], the error type used for everything
//! that happens *around* a review (opening a package, reading resources,
//! talking to git), and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Problems found *in* a package are never errors: checkers turn them into
//!   [`Report`](crate::check::Report)s.
//! - Use `ReviewError` for failures that prevent a subject from being checked
//! - Use `anyhow::Error` (via `ReviewError::Other`) inside checker bodies

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for reviewer operations.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The package path does not exist.
    #[error("Package not found: {path}")]
    PackageNotFound { path: PathBuf },

    /// The package path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A resource file could not be parsed as JSON with comments.
    #[error("Failed to parse {path}: {source}")]
    ResourceParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A keymap file parsed but is not a list of bindings.
    #[error("Keymap {path} is not a list of bindings")]
    InvalidKeymap { path: PathBuf },

    /// A git invocation failed.
    #[error("git {args} failed in {path}: {message}")]
    Git {
        path: PathBuf,
        args: String,
        message: String,
    },

    /// A glob pattern could not be compiled.
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for reviewer operations.
pub type Result<T> = std::result::Result<T, ReviewError>;
