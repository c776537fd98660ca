//! Package directories.
//!
//! [`PackageRoot`] is the subject of all file checkers. The directory tree is
//! walked once when the root is opened; globbing afterwards only matches
//! against that listing.

use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use walkdir::WalkDir;

use crate::error::{Result, ReviewError};

/// A package directory on disk.
#[derive(Debug, Clone)]
pub struct PackageRoot {
    root: PathBuf,
    /// Relative, `/`-separated file paths in sorted order.
    files: Vec<String>,
}

impl PackageRoot {
    /// Open a package directory and list its contents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.exists() {
            return Err(ReviewError::PackageNotFound { path: root });
        }
        if !root.is_dir() {
            return Err(ReviewError::NotADirectory { path: root });
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || e.file_name() != ".git");
        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            files.push(to_posix(rel));
        }
        files.sort();
        tracing::debug!("Listed {} files in {}", files.len(), root.display());

        Ok(Self { root, files })
    }

    /// The package directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Directory name of the package.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    /// Files matching `pattern`, as absolute paths in sorted order.
    ///
    /// `*` does not cross directory boundaries and `**/` matches zero or
    /// more directories, so `*.py` only matches files in the root while
    /// `**/*.py` matches them anywhere.
    pub fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| ReviewError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?
            .compile_matcher();

        Ok(self
            .files
            .iter()
            .filter(|rel| matcher.is_match(rel.as_str()))
            .map(|rel| self.root.join(rel))
            .collect())
    }

    /// Files matching any of `patterns`, concatenated in pattern order.
    pub fn globs(&self, patterns: &[&str]) -> Result<Vec<PathBuf>> {
        let mut matches = Vec::new();
        for pattern in patterns {
            matches.extend(self.glob(pattern)?);
        }
        Ok(matches)
    }

    /// Path of `rel_path` inside the package.
    pub fn sub_path(&self, rel_path: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel_path)
    }

    /// `path` relative to the package root, if it is inside the package.
    pub fn rel_path<'p>(&self, path: &'p Path) -> Option<&'p Path> {
        path.strip_prefix(&self.root).ok()
    }

    /// Whether `rel_path` is a file inside the package.
    pub fn is_file(&self, rel_path: impl AsRef<Path>) -> bool {
        self.sub_path(rel_path).is_file()
    }

    /// Whether `rel_path` is a directory inside the package.
    pub fn is_dir(&self, rel_path: impl AsRef<Path>) -> bool {
        self.sub_path(rel_path).is_dir()
    }

    /// Relative display form of `path`, falling back to the path itself.
    pub fn display_path(&self, path: &Path) -> String {
        match self.rel_path(path) {
            Some(rel) => to_posix(rel),
            None => path.display().to_string(),
        }
    }

    /// Context label for reports about `path`.
    pub fn file_context_label(&self, path: &Path) -> String {
        format!("File: {}", self.display_path(path))
    }
}

fn to_posix(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_package(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for file in files {
            let path = temp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        temp
    }

    fn rels(root: &PackageRoot, paths: Vec<PathBuf>) -> Vec<String> {
        paths.iter().map(|p| root.display_path(p)).collect()
    }

    #[test]
    fn open_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let err = PackageRoot::open(temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, ReviewError::PackageNotFound { .. }));
    }

    #[test]
    fn open_file_fails() {
        let temp = setup_package(&["file.txt"]);
        let err = PackageRoot::open(temp.path().join("file.txt")).unwrap_err();
        assert!(matches!(err, ReviewError::NotADirectory { .. }));
    }

    #[test]
    fn single_star_matches_root_only() {
        let temp = setup_package(&["plugin.py", "lib/helper.py"]);
        let root = PackageRoot::open(temp.path()).unwrap();

        assert_eq!(rels(&root, root.glob("*.py").unwrap()), ["plugin.py"]);
    }

    #[test]
    fn double_star_matches_any_depth() {
        let temp = setup_package(&["plugin.py", "lib/helper.py", "lib/deep/more.py"]);
        let root = PackageRoot::open(temp.path()).unwrap();

        assert_eq!(
            rels(&root, root.glob("**/*.py").unwrap()),
            ["lib/deep/more.py", "lib/helper.py", "plugin.py"]
        );
        assert_eq!(
            rels(&root, root.glob("*/**/*.py").unwrap()),
            ["lib/deep/more.py", "lib/helper.py"]
        );
    }

    #[test]
    fn globs_concatenate_in_pattern_order() {
        let temp = setup_package(&["a.sublime-build", "b.py"]);
        let root = PackageRoot::open(temp.path()).unwrap();

        assert_eq!(
            rels(&root, root.globs(&["*.py", "**/*.sublime-build"]).unwrap()),
            ["b.py", "a.sublime-build"]
        );
    }

    #[test]
    fn git_directory_is_skipped() {
        let temp = setup_package(&[".git/hooks/pre-commit.py", "plugin.py"]);
        let root = PackageRoot::open(temp.path()).unwrap();
        assert_eq!(rels(&root, root.glob("**/*.py").unwrap()), ["plugin.py"]);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let temp = setup_package(&[]);
        let root = PackageRoot::open(temp.path()).unwrap();
        assert!(matches!(
            root.glob("[unclosed"),
            Err(ReviewError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn file_context_label_is_relative() {
        let temp = setup_package(&["Keymaps/Default.sublime-keymap"]);
        let root = PackageRoot::open(temp.path()).unwrap();
        let path = root.sub_path("Keymaps/Default.sublime-keymap");

        assert_eq!(
            root.file_context_label(&path),
            "File: Keymaps/Default.sublime-keymap"
        );
        assert!(root.is_file("Keymaps/Default.sublime-keymap"));
        assert!(root.is_dir("Keymaps"));
    }
}
