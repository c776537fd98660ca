//! Use of the `.no-sublime-package` marker.

use crate::check::{Check, Reports};
use crate::package::PackageRoot;

/// Questions packages that opt out of being installed zipped.
pub struct CheckNoSublimePackage<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckNoSublimePackage<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }
}

impl Check for CheckNoSublimePackage<'_> {
    fn name(&self) -> &'static str {
        "no-sublime-package"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        if !self.package.is_file(".no-sublime-package") {
            return Ok(());
        }

        let potential_invokers = self.package.globs(&["*.py", "**/*.sublime-build"])?;
        if potential_invokers.is_empty() {
            reports.fail(
                "'.no-sublime-package' is defined, \
                 but no other resource file can make use of it",
            );
        } else {
            reports.warn(
                "'.no-sublime-package' is defined. \
                 Please verify that it is *really* necessary",
            );
        }
        Ok(())
    }
}
