//! Files that should not be shipped with a package.

use crate::check::{Check, Reports};
use crate::package::PackageRoot;

/// Fails if the package ships Package Control's install metadata.
pub struct CheckPackageMetadata<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckPackageMetadata<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }
}

impl Check for CheckPackageMetadata<'_> {
    fn name(&self) -> &'static str {
        "package-metadata"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        if self.package.is_file("package-metadata.json") {
            reports.fail(
                "'package-metadata.json' is supposed to be automatically generated \
                 by Package Control during installation",
            );
        }
        Ok(())
    }
}

/// Fails for compiled Python files whose source is shipped as well.
pub struct CheckPycFiles<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckPycFiles<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }
}

impl Check for CheckPycFiles<'_> {
    fn name(&self) -> &'static str {
        "pyc-files"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        for path in self.package.glob("**/*.pyc")? {
            if path.with_extension("py").is_file() {
                reports.fail(format!(
                    "'{}' is redundant because its corresponding .py file exists",
                    self.package.display_path(&path)
                ));
            }
        }
        Ok(())
    }
}
