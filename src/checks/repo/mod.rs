//! Checkers for package repositories.

pub mod readme;
pub mod tags;

pub use readme::CheckReadme;
pub use tags::{CheckOnlyPrereleaseTags, CheckSemverTags};

use crate::check::{Check, CheckerRegistry};
use crate::repo::Repository;

impl CheckerRegistry<dyn Repository> {
    /// All repository checkers, in execution order.
    pub fn repo_checkers() -> Self {
        let mut registry = Self::new();
        registry.register("semver-tags", semver_tags);
        registry.register("only-prerelease-tags", only_prerelease_tags);
        registry.register("readme", readme);
        registry
    }
}

fn semver_tags<'a>(repo: &'a (dyn Repository + 'static)) -> Box<dyn Check + 'a> {
    Box::new(CheckSemverTags::new(repo))
}

fn only_prerelease_tags<'a>(repo: &'a (dyn Repository + 'static)) -> Box<dyn Check + 'a> {
    Box::new(CheckOnlyPrereleaseTags::new(repo))
}

fn readme<'a>(repo: &'a (dyn Repository + 'static)) -> Box<dyn Check + 'a> {
    Box::new(CheckReadme::new(repo))
}
