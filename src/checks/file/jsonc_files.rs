//! Syntax validation of JSON resource files.

use crate::check::{CapturedError, Check, Reports};
use crate::jsonc;
use crate::package::PackageRoot;

/// Resource files Sublime Text reads as JSON with comments and trailing commas.
pub const JSONC_FILE_GLOBS: [&str; 8] = [
    "**/*.sublime-build",
    "**/*.sublime-commands",
    "**/*.sublime-keymap",
    "**/*.sublime-macro",
    "**/*.sublime-menu",
    "**/*.sublime-mousemap",
    "**/*.sublime-settings",
    "**/*.sublime-theme",
];

/// Fails for every JSON resource that does not parse.
pub struct CheckJsoncFiles<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckJsoncFiles<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }
}

impl Check for CheckJsoncFiles<'_> {
    fn name(&self) -> &'static str {
        "jsonc-files"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        for path in self.package.globs(&JSONC_FILE_GLOBS)? {
            if let Err(e) = jsonc::from_path(&path) {
                reports.fail_with(
                    format!(
                        "File '{}' is badly formatted JSON (with comments)",
                        self.package.display_path(&path)
                    ),
                    CapturedError::from_error(&e),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{messages, package, perform};

    #[test]
    fn comments_and_trailing_commas_are_accepted() {
        let (_temp, root) = package(&[
            (
                "Preferences.sublime-settings",
                "{\n  // indent\n  \"tab_size\": 4,\n}\n",
            ),
            ("Main.sublime-menu", "[ /* empty */ ]"),
        ]);
        let (failures, _) = perform(Box::new(CheckJsoncFiles::new(&root)));
        assert!(failures.is_empty());
    }

    #[test]
    fn broken_file_fails_with_position() {
        let (_temp, root) = package(&[(
            "sub/Tool.sublime-build",
            "{\n  // run it\n  \"cmd\": [\"make\"\n}\n",
        )]);
        let (failures, _) = perform(Box::new(CheckJsoncFiles::new(&root)));

        assert_eq!(
            messages(&failures),
            ["File 'sub/Tool.sublime-build' is badly formatted JSON (with comments)"]
        );
        let error = failures[0].error().unwrap();
        assert!(error.to_string().contains("line 4"), "{}", error);
    }

    #[test]
    fn other_files_are_not_parsed() {
        let (_temp, root) = package(&[("notes.json", "{ nope")]);
        let (failures, _) = perform(Box::new(CheckJsoncFiles::new(&root)));
        assert!(failures.is_empty());
    }
}
