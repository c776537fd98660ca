//! Key binding model and conflict detection.
//!
//! Keymap files (`*.sublime-keymap`) are lists of bindings such as:
//!
//! ```json
//! [
//!     { "keys": ["ctrl+shift+p"], "command": "show_overlay",
//!       "args": {"overlay": "command_palette"} }
//! ]
//! ```
//!
//! A [`KeyMapping`] holds the validated bindings of one file, indexed by
//! normalized [`Chord`] sequence. Sublime Text's own bindings are bundled
//! and available through [`default_keymaps`].

pub mod binding;
pub mod chord;
pub mod defaults;
pub mod mapping;
pub mod platform;

pub use binding::{
    entry_label, validate_entry, Binding, BindingIssue, EntryIssues, IssueLevel, ALLOWED_KEYS,
    REQUIRED_KEYS,
};
pub use chord::{parse_sequence, sequence_to_string, Chord, ChordError, Modifier};
pub use defaults::{default_keymaps, DefaultKeymaps};
pub use mapping::{Conflict, KeyMapping, Overridden};
pub use platform::{applicable_platforms, Platform, COMMON_KEYMAP_FILENAME};
