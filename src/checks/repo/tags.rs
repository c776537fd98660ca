//! Release tag conventions.
//!
//! Package Control installs the highest tag that is a semantic version, so a
//! repository needs at least one such tag.

use std::sync::LazyLock;

use regex::Regex;

use crate::check::{Check, Reports};
use crate::repo::{semver_tags, Repository};

static TWO_PART_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(v|^)\d+\.\d+$").expect("version pattern is valid"));

/// Fails if no tag is a semantic version.
pub struct CheckSemverTags<'a> {
    repo: &'a dyn Repository,
}

impl<'a> CheckSemverTags<'a> {
    pub fn new(repo: &'a dyn Repository) -> Self {
        Self { repo }
    }
}

impl Check for CheckSemverTags<'_> {
    fn name(&self) -> &'static str {
        "semver-tags"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        let tags = self.repo.tags()?;
        if !semver_tags(&tags).is_empty() {
            return Ok(());
        }

        let mut msg = String::from("No semantic version tags found");
        if tags.is_empty() {
            msg.push_str(" (no tags found at all)");
        }
        if tags.iter().any(|t| TWO_PART_VERSION.is_match(t)) {
            msg.push_str(" (semantic versions consist of exactly three numeric parts)");
        }
        reports.fail(msg);
        Ok(())
    }
}

/// Warns if every version tag is a pre-release.
pub struct CheckOnlyPrereleaseTags<'a> {
    repo: &'a dyn Repository,
}

impl<'a> CheckOnlyPrereleaseTags<'a> {
    pub fn new(repo: &'a dyn Repository) -> Self {
        Self { repo }
    }
}

impl Check for CheckOnlyPrereleaseTags<'_> {
    fn name(&self) -> &'static str {
        "only-prerelease-tags"
    }

    fn check(&mut self, reports: &mut Reports) -> anyhow::Result<()> {
        let versions = semver_tags(&self.repo.tags()?);
        if versions.is_empty() {
            return Ok(());
        }
        if versions.iter().all(|t| t.version.is_prerelease()) {
            reports.warn("Only found pre-release tags.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::UNHANDLED_ERROR_MESSAGE;
    use crate::checks::repo::test_support::FakeRepo;
    use crate::checks::test_support::{messages, perform};

    #[test]
    fn version_tags_pass() {
        let repo = FakeRepo::with_tags(&["v1.0.0", "latest"]);
        let (failures, warnings) = perform(Box::new(CheckSemverTags::new(&repo)));
        assert!(failures.is_empty() && warnings.is_empty());
    }

    #[test]
    fn no_tags_at_all() {
        let repo = FakeRepo::with_tags(&[]);
        let (failures, _) = perform(Box::new(CheckSemverTags::new(&repo)));
        assert_eq!(
            messages(&failures),
            ["No semantic version tags found (no tags found at all)"]
        );
    }

    #[test]
    fn two_part_versions_get_a_hint() {
        let repo = FakeRepo::with_tags(&["v1.2", "release"]);
        let (failures, _) = perform(Box::new(CheckSemverTags::new(&repo)));
        assert_eq!(
            messages(&failures),
            ["No semantic version tags found \
              (semantic versions consist of exactly three numeric parts)"]
        );
    }

    #[test]
    fn git_errors_become_a_checker_failure() {
        let repo = FakeRepo {
            broken: true,
            ..FakeRepo::default()
        };
        let (failures, _) = perform(Box::new(CheckSemverTags::new(&repo)));
        assert_eq!(messages(&failures), [UNHANDLED_ERROR_MESSAGE]);
    }

    #[test]
    fn only_prereleases_warn() {
        let repo = FakeRepo::with_tags(&["1.0.0-beta", "st3-1.1.0-rc.1"]);
        let (failures, warnings) = perform(Box::new(CheckOnlyPrereleaseTags::new(&repo)));
        assert!(failures.is_empty());
        assert_eq!(messages(&warnings), ["Only found pre-release tags."]);
    }

    #[test]
    fn one_release_is_enough() {
        let repo = FakeRepo::with_tags(&["1.0.0-beta", "1.0.0"]);
        let (_, warnings) = perform(Box::new(CheckOnlyPrereleaseTags::new(&repo)));
        assert!(warnings.is_empty());
    }

    #[test]
    fn no_versions_no_prerelease_warning() {
        let repo = FakeRepo::with_tags(&["latest"]);
        let (_, warnings) = perform(Box::new(CheckOnlyPrereleaseTags::new(&repo)));
        assert!(warnings.is_empty());
    }
}
