//! Built-in checkers.
//!
//! File checkers inspect a package directory ([`PackageRoot`]); repository
//! checkers inspect version control metadata ([`Repository`]). Each kind has
//! a registry constructor listing its checkers in execution order:
//! [`CheckerRegistry::file_checkers`] and [`CheckerRegistry::repo_checkers`].
//!
//! [`PackageRoot`]: crate::package::PackageRoot
//! [`Repository`]: crate::repo::Repository
//! [`CheckerRegistry::file_checkers`]: crate::check::CheckerRegistry::file_checkers
//! [`CheckerRegistry::repo_checkers`]: crate::check::CheckerRegistry::repo_checkers

pub mod file;
pub mod repo;

use crate::check::CheckerRegistry;
use crate::package::PackageRoot;
use crate::repo::Repository;

/// Names of every built-in checker, file checkers first.
pub fn all_checker_names() -> Vec<&'static str> {
    let mut names = CheckerRegistry::<PackageRoot>::file_checkers().names();
    names.extend(CheckerRegistry::<dyn Repository>::repo_checkers().names());
    names
}
