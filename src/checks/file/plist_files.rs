//! Syntax validation of property list resources.

use std::fs;
use std::io::Cursor;

use crate::check::{CapturedError, Check, Reports};
use crate::package::PackageRoot;

/// TextMate-era resources stored as property lists.
pub const PLIST_FILE_GLOBS: [&str; 4] = [
    "**/*.tmLanguage",
    "**/*.tmPreferences",
    "**/*.tmSnippet",
    "**/*.tmTheme",
];

/// Fails for every property list resource that does not parse.
pub struct CheckPlistFiles<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckPlistFiles<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }
}

impl Check for CheckPlistFiles<'_> {
    fn name(&self) -> &'static str {
        "plist-files"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        for path in self.package.globs(&PLIST_FILE_GLOBS)? {
            let bytes = fs::read(&path)?;
            if let Err(e) = plist::Value::from_reader(Cursor::new(bytes)) {
                reports.fail_with(
                    format!(
                        "File '{}' is a badly formatted Plist",
                        self.package.display_path(&path)
                    ),
                    CapturedError::from_error(&e),
                );
            }
        }
        Ok(())
    }
}
