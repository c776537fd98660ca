//! Key binding validation and conflict detection.
//!
//! Every keymap Sublime Text actually loads (`Default.sublime-keymap` and
//! the platform specific `Default (<Platform>).sublime-keymap`) is
//! validated entry by entry, then its bindings are looked up in the bundled
//! default keymaps of each platform it applies to.

use std::path::{Path, PathBuf};

use crate::check::{CapturedError, Check, Reports};
use crate::error::ReviewError;
use crate::keymap::{
    applicable_platforms, default_keymaps, IssueLevel, KeyMapping, Overridden, Platform,
};
use crate::package::PackageRoot;

/// Flags malformed bindings and bindings that shadow default ones.
pub struct CheckKeybindings<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckKeybindings<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }

    fn keymap_files(&self) -> anyhow::Result<Vec<(PathBuf, Vec<Platform>)>> {
        let files = self
            .package
            .glob("**/*.sublime-keymap")?
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?;
                match applicable_platforms(name) {
                    Some(platforms) => Some((path, platforms)),
                    None => {
                        tracing::debug!("Ignoring unused keymap {}", path.display());
                        None
                    }
                }
            })
            .collect();
        Ok(files)
    }

    fn check_file(&self, reports: &mut Reports, path: &Path, platforms: &[Platform]) {
        let (mapping, issues) = match KeyMapping::load(path) {
            Ok(parsed) => parsed,
            Err(ReviewError::InvalidKeymap { .. }) => {
                reports.fail("Keymap is not a list of bindings");
                return;
            }
            Err(e) => {
                reports.fail_with("Unable to parse keymap file", CapturedError::from_error(&e));
                return;
            }
        };

        for entry in issues {
            let mut reports = reports.context(entry.label);
            for issue in entry.issues {
                match issue.level {
                    IssueLevel::Failure => reports.fail(issue.message),
                    IssueLevel::Warning => reports.warn(issue.message),
                }
            }
        }

        let defaults = default_keymaps();
        let targets: Vec<_> = platforms
            .iter()
            .flat_map(|&platform| defaults.lookup_order(platform))
            .collect();
        let conflicts = mapping.conflicts_against(&targets);
        tracing::debug!(
            "{} conflicts for {} on {:?}",
            conflicts.len(),
            self.package.display_path(path),
            platforms
        );

        for conflict in conflicts {
            let keys = conflict.binding.keys_display();
            match conflict.first_unconditional() {
                Some(default) => {
                    let mut reports = reports.context(default_label(default));
                    reports.fail(format!(
                        "The binding {} unconditionally overrides a default binding",
                        keys
                    ));
                }
                None => {
                    let mut reports = reports.context(default_label(&conflict.overridden[0]));
                    reports.warn(format!(
                        "The binding {} is also defined in default bindings \
                         but is masked with a 'context'",
                        keys
                    ));
                }
            }
        }
    }
}

fn default_label(default: &Overridden<'_>) -> String {
    format!(
        "Default command: {} ({})",
        default.binding.command(),
        default.source
    )
}

impl Check for CheckKeybindings<'_> {
    fn name(&self) -> &'static str {
        "keybindings"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        for (path, platforms) in self.keymap_files()? {
            let mut reports = reports.context(self.package.file_context_label(&path));
            self.check_file(&mut reports, &path, &platforms);
        }
        Ok(())
    }
}
