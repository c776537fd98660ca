//! Checkers for package contents.

pub mod jsonc_files;
pub mod keybindings;
pub mod messages;
pub mod metadata;
pub mod no_sublime_package;
pub mod plist_files;
pub mod resources;
pub mod xml_files;

pub use jsonc_files::CheckJsoncFiles;
pub use keybindings::CheckKeybindings;
pub use messages::CheckMessages;
pub use metadata::{CheckPackageMetadata, CheckPycFiles};
pub use no_sublime_package::CheckNoSublimePackage;
pub use plist_files::CheckPlistFiles;
pub use resources::{CheckHasResourceFiles, CheckHasSublimeSyntax, CheckPluginsInRoot};
pub use xml_files::CheckXmlFiles;

use crate::check::{Check, CheckerRegistry};
use crate::package::PackageRoot;

impl CheckerRegistry<PackageRoot> {
    /// All file checkers, in execution order.
    pub fn file_checkers() -> Self {
        let mut registry = Self::new();
        registry.register("keybindings", keybindings);
        registry.register("package-metadata", package_metadata);
        registry.register("pyc-files", pyc_files);
        registry.register("plugins-in-root", plugins_in_root);
        registry.register("has-resource-files", has_resource_files);
        registry.register("has-sublime-syntax", has_sublime_syntax);
        registry.register("messages", messages);
        registry.register("no-sublime-package", no_sublime_package);
        registry.register("jsonc-files", jsonc_files);
        registry.register("plist-files", plist_files);
        registry.register("xml-files", xml_files);
        registry
    }
}

fn keybindings(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckKeybindings::new(package))
}

fn package_metadata(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckPackageMetadata::new(package))
}

fn pyc_files(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckPycFiles::new(package))
}

fn plugins_in_root(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckPluginsInRoot::new(package))
}

fn has_resource_files(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckHasResourceFiles::new(package))
}

fn has_sublime_syntax(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckHasSublimeSyntax::new(package))
}

fn messages(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckMessages::new(package))
}

fn no_sublime_package(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckNoSublimePackage::new(package))
}

fn jsonc_files(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckJsoncFiles::new(package))
}

fn plist_files(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckPlistFiles::new(package))
}

fn xml_files(package: &PackageRoot) -> Box<dyn Check + '_> {
    Box::new(CheckXmlFiles::new(package))
}
