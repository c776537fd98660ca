//! Repositories as review subjects.
//!
//! Repository checkers look at a package's version control metadata rather
//! than its files. They work against the [`Repository`] trait so they can be
//! tested without a real checkout; [`GitCheckout`] implements it for a local
//! git working copy.

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ReviewError};

static SEMVER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    )
    .expect("semver pattern is valid")
});

static TAG_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(v|st[23]?-v?)").expect("tag prefix pattern is valid"));

/// Access to the metadata of a package repository.
pub trait Repository {
    /// Name used in report headings.
    fn name(&self) -> &str;

    /// All tag names of the repository.
    fn tags(&self) -> anyhow::Result<Vec<String>>;

    /// Whether the repository has a README in its root.
    fn has_readme(&self) -> anyhow::Result<bool>;
}

/// A semantic version, `MAJOR.MINOR.PATCH[-pre][+build]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
    pub build: Option<String>,
}

impl SemVer {
    /// Parse a version string, returning `None` if it is not a semantic version.
    pub fn parse(version: &str) -> Option<Self> {
        let caps = SEMVER_REGEX.captures(version)?;
        Some(Self {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            patch: caps[3].parse().ok()?,
            prerelease: caps.get(4).map(|m| m.as_str().to_string()),
            build: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }

    /// Whether `version` is a semantic version.
    pub fn is_valid(version: &str) -> bool {
        SEMVER_REGEX.is_match(version)
    }

    /// Whether this is a pre-release version.
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }
}

impl PartialOrd for SemVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemVer {
    // Build metadata does not take part in precedence; a pre-release sorts
    // before the release it precedes.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => compare_prerelease(a, b),
            })
            .then_with(|| self.build.cmp(&other.build))
    }
}

fn compare_prerelease(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// A tag whose name is a semantic version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVerTag {
    pub version: SemVer,
    /// The tag name as found in the repository.
    pub tag: String,
}

/// Parse a tag name, tolerating `v`, `st2-`, `st3-` and `st-v` style prefixes.
pub fn parse_tag(tag: &str) -> Option<SemVerTag> {
    let stripped = TAG_PREFIX_REGEX.replace(tag, "");
    match SemVer::parse(&stripped) {
        Some(version) => Some(SemVerTag {
            version,
            tag: tag.to_string(),
        }),
        None => {
            tracing::debug!("'{}' tag is not a semantic version", tag);
            None
        }
    }
}

/// Tags of `tags` that are semantic versions, in input order.
pub fn semver_tags(tags: &[String]) -> Vec<SemVerTag> {
    let found: Vec<SemVerTag> = tags.iter().filter_map(|t| parse_tag(t)).collect();
    tracing::debug!("{} of {} tags are semantic versions", found.len(), tags.len());
    found
}

/// A local git working copy.
#[derive(Debug, Clone)]
pub struct GitCheckout {
    path: PathBuf,
    name: String,
}

impl GitCheckout {
    /// Open a working copy, verifying that git recognizes it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(ReviewError::PackageNotFound { path });
        }
        if !path.is_dir() {
            return Err(ReviewError::NotADirectory { path });
        }

        let checkout = Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            path,
        };
        checkout.git(&["rev-parse", "--git-dir"])?;
        Ok(checkout)
    }

    /// The working copy directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        tracing::debug!("Running git {} in {}", args.join(" "), self.path.display());
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(|e| ReviewError::Git {
                path: self.path.clone(),
                args: args.join(" "),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ReviewError::Git {
                path: self.path.clone(),
                args: args.join(" "),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Repository for GitCheckout {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> anyhow::Result<Vec<String>> {
        let stdout = self.git(&["tag", "--list"])?;
        let tags: Vec<String> = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        tracing::debug!("tags: {:?}", tags);
        Ok(tags)
    }

    fn has_readme(&self) -> anyhow::Result<bool> {
        for entry in std::fs::read_dir(&self.path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_lowercase();
            if name.starts_with("readme") && entry.file_type()?.is_file() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
