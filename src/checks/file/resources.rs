//! Checks on what kind of resources a package provides.

use crate::check::{Check, Reports};
use crate::package::PackageRoot;

/// Files Sublime Text picks up by themselves.
///
/// Hidden variants (`.hidden-color-scheme`, `.hidden-tmTheme`) are left out
/// since they do nothing unless another file refers to them.
pub const RESOURCE_FILE_GLOBS: [&str; 19] = [
    "*.py",
    "**/*.sublime-build",
    "**/*.sublime-color-scheme",
    "**/*.sublime-commands",
    "**/*.sublime-completions",
    "**/*.sublime-keymap",
    "**/*.sublime-macro",
    "**/*.sublime-menu",
    "**/*.sublime-mousemap",
    "**/*.sublime-settings",
    "**/*.sublime-snippet",
    "**/*.sublime-syntax",
    "**/*.sublime-theme",
    "**/*.tmLanguage",
    "**/*.tmPreferences",
    "**/*.tmSnippet",
    "**/*.tmTheme",
    // hunspell dictionaries
    "**/*.aff",
    "**/*.dic",
];

/// Fails if Python code exists only in subdirectories and nothing can load it.
pub struct CheckPluginsInRoot<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckPluginsInRoot<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }
}

impl Check for CheckPluginsInRoot<'_> {
    fn name(&self) -> &'static str {
        "plugins-in-root"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        if !self.package.glob("*.py")?.is_empty() {
            return Ok(());
        }

        let nested = self.package.glob("*/**/*.py")?;
        if nested.is_empty() {
            return Ok(());
        }
        tracing::debug!("Non-plugin Python files: {:?}", nested);

        if self.package.glob("**/*.sublime-build")?.is_empty() {
            reports.fail(format!(
                "The package contains {} Python file(s), but none of them are in the \
                 package root and no build system is specified",
                nested.len()
            ));
        }
        Ok(())
    }
}

/// Fails if the package has nothing Sublime Text would load.
pub struct CheckHasResourceFiles<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckHasResourceFiles<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }
}

impl Check for CheckHasResourceFiles<'_> {
    fn name(&self) -> &'static str {
        "has-resource-files"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        if self.package.globs(&RESOURCE_FILE_GLOBS)?.is_empty() {
            reports.fail("The package does not define any file that interfaces with Sublime Text");
        }
        Ok(())
    }
}

/// Warns about syntax definitions older builds cannot load.
pub struct CheckHasSublimeSyntax<'a> {
    package: &'a PackageRoot,
}

impl<'a> CheckHasSublimeSyntax<'a> {
    pub fn new(package: &'a PackageRoot) -> Self {
        Self { package }
    }
}

impl Check for CheckHasSublimeSyntax<'_> {
    fn name(&self) -> &'static str {
        "has-sublime-syntax"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        for path in self.package.glob("**/*.sublime-syntax")? {
            let has_fallback = path.with_extension("tmLanguage").is_file()
                || path.with_extension("hidden-tmLanguage").is_file();
            if !has_fallback {
                let mut reports = reports.context(self.package.file_context_label(&path));
                reports.warn(
                    "'.sublime-syntax' support has been added in build 3092 and there \
                     is no '.tmLanguage' fallback file",
                );
            }
        }
        Ok(())
    }
}
