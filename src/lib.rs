//! Reviewer for Sublime Text packages.
//!
//! Inspects a package directory (and optionally its git repository) for
//! common mistakes before the package is listed on Package Control. The
//! most involved check compares the package's key bindings against the
//! default key bindings shipped with Sublime Text.
//!
//! # Modules
//!
//! - [`check`] - Reports, checkers, registries and the runner
//! - [`checks`] - Built-in file and repository checkers
//! - [`cli`] - Command-line interface and output formatting
//! - [`error`] - Error types and result aliases
//! - [`jsonc`] - Parsing of JSON with comments and trailing commas
//! - [`keymap`] - Key chords, bindings and default keymaps
//! - [`package`] - Package directory access
//! - [`repo`] - Repository access and semantic version tags
//!
//! # Example
//!
//! ```
//! use st_package_reviewer::keymap::{default_keymaps, parse_sequence, Platform};
//!
//! let keys = parse_sequence(&serde_json::json!(["ctrl+shift+p"])).unwrap();
//! let linux = default_keymaps().for_platform(Platform::Linux);
//! assert!(!linux.get_for_chords(&keys).is_empty());
//! ```

pub mod check;
pub mod checks;
pub mod cli;
pub mod error;
pub mod jsonc;
pub mod keymap;
pub mod package;
pub mod repo;

pub use error::{Result, ReviewError};
