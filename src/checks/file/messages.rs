//! Validation of `messages.json`, the install and upgrade message index.

use std::fs;

use serde_json::Value;

use crate::check::{CapturedError, Check, Reports};
use crate::package::PackageRoot;
use crate::repo::SemVer;

/// Checks that `messages.json` exists when needed and points at real files.
pub struct CheckMessages<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckMessages<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }
}

impl Check for CheckMessages<'_> {
    fn name(&self) -> &'static str {
        "messages"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        let msg_path = self.package.sub_path("messages.json");
        let folder_exists = self.package.is_dir("messages");
        let file_exists = msg_path.is_file();

        if !file_exists {
            if folder_exists {
                reports.fail("`messages` folder exists, but `messages.json` does not");
            }
            return Ok(());
        }

        let mut reports = reports.context(self.package.file_context_label(&msg_path));
        let text = fs::read_to_string(&msg_path)?;
        let data: Value = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                reports.fail_with(
                    "unable to load `messages.json`",
                    CapturedError::from_error(&e),
                );
                return Ok(());
            }
        };

        let Some(entries) = data.as_object() else {
            reports.fail("`messages.json` is not an object");
            return Ok(());
        };

        for (key, rel_path) in entries {
            if key != "install" && !SemVer::is_valid(key) {
                reports.fail(format!(
                    "Key '{}' is not 'install' or a valid semantic version",
                    key
                ));
            }

            let Some(rel_path) = rel_path.as_str() else {
                reports.fail(format!("Value of key '{}' is not a file path", key));
                continue;
            };
            if !self.package.is_file(rel_path) {
                reports.fail(format!(
                    "File '{}', as specified by key '{}', does not exist",
                    rel_path, key
                ));
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
    fn no_messages_is_fine() {
        let (_temp, root) = package(&[("plugin.py", "")]);
        let (failures, _) = perform(Box::new(CheckMessages::new(&root)));
        assert!(failures.is_empty());
    }

    #[test]
    fn folder_without_index_fails() {
        let (_temp, root) = package(&[("messages/install.txt", "hi")]);
        let (failures, _) = perform(Box::new(CheckMessages::new(&root)));
        assert_eq!(
            messages(&failures),
            ["`messages` folder exists, but `messages.json` does not"]
        );
    }

    #[test]
    fn valid_index_passes() {
        let (_temp, root) = package(&[
            (
                "messages.json",
                r#"{"install": "messages/install.txt", "1.2.0": "messages/1.2.0.txt"}"#,
            ),
            ("messages/install.txt", ""),
            ("messages/1.2.0.txt", ""),
        ]);
        let (failures, _) = perform(Box::new(CheckMessages::new(&root)));
        assert!(failures.is_empty());
    }

    #[test]
    fn bad_keys_and_missing_files_fail() {
        let (_temp, root) = package(&[
            ("messages.json", r#"{"1.2": "messages/1.2.txt"}"#),
            ("messages/1.2.txt", ""),
        ]);
        let (failures, _) = perform(Box::new(CheckMessages::new(&root)));
        assert_eq!(
            messages(&failures),
            ["Key '1.2' is not 'install' or a valid semantic version"]
        );
        assert_eq!(failures[0].context(), ["File: messages.json"]);

        let (_temp, root) = package(&[("messages.json", r#"{"install": "gone.txt"}"#)]);
        let (failures, _) = perform(Box::new(CheckMessages::new(&root)));
        assert_eq!(
            messages(&failures),
            ["File 'gone.txt', as specified by key 'install', does not exist"]
        );
    }

    #[test]
    fn unparsable_index_fails_with_error() {
        let (_temp, root) = package(&[("messages.json", "{\"install\": ")]);
        let (failures, _) = perform(Box::new(CheckMessages::new(&root)));
        assert_eq!(messages(&failures), ["unable to load `messages.json`"]);
        assert!(failures[0].error().is_some());
    }
}
