//! Target platforms and keymap file names.

use std::fmt;

/// File name of the keymap loaded on every platform.
pub const COMMON_KEYMAP_FILENAME: &str = "Default.sublime-keymap";

/// A platform Sublime Text runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Osx,
    Windows,
}

impl Platform {
    /// All platforms, in lookup order.
    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Osx, Platform::Windows];

    /// Name used in keymap file names.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::Osx => "OSX",
            Platform::Windows => "Windows",
        }
    }

    /// Parse the name used in keymap file names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// File name of this platform's keymap, e.g. `Default (OSX).sublime-keymap`.
    pub fn keymap_filename(self) -> String {
        format!("Default ({}).sublime-keymap", self.name())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Platforms a keymap file applies to, judging by its file name.
///
/// Returns `None` for names Sublime Text never loads as keymaps.
pub fn applicable_platforms(file_name: &str) -> Option<Vec<Platform>> {
    if file_name == COMMON_KEYMAP_FILENAME {
        return Some(Platform::ALL.to_vec());
    }
    let platform = file_name
        .strip_prefix("Default (")?
        .strip_suffix(").sublime-keymap")?;
    Platform::from_name(platform).map(|p| vec![p])
}
