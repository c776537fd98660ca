//! Parsed keymap files and conflict lookup.
//!
//! Bindings are indexed by their normalized chord sequence, so looking up
//! which bindings a chord sequence triggers is a single hash lookup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::binding::{entry_label, validate_entry, Binding, EntryIssues};
use super::chord::Chord;
use crate::error::{Result, ReviewError};
use crate::jsonc;

/// The validated bindings of one keymap file.
#[derive(Debug, Clone, Default)]
pub struct KeyMapping {
    path: PathBuf,
    bindings: Vec<Binding>,
    index: HashMap<Vec<Chord>, Vec<usize>>,
}

/// A default binding shadowed by a binding of the keymap under review.
#[derive(Debug, Clone, Copy)]
pub struct Overridden<'a> {
    /// Which default keymap the binding comes from.
    pub source: &'a str,
    pub binding: &'a Binding,
}

/// A binding whose chord sequence is also bound by default keymaps.
#[derive(Debug, Clone)]
pub struct Conflict<'a> {
    pub binding: &'a Binding,
    /// Matching default bindings, in lookup order.
    pub overridden: Vec<Overridden<'a>>,
}

impl<'a> Conflict<'a> {
    /// The first overridden default binding that has no `context`.
    pub fn first_unconditional(&self) -> Option<&Overridden<'a>> {
        self.overridden.iter().find(|o| !o.binding.is_conditional())
    }

    /// Whether some default binding is shadowed regardless of context.
    pub fn is_unconditional(&self) -> bool {
        self.first_unconditional().is_some()
    }
}

impl KeyMapping {
    /// Read a keymap file, validating every entry.
    ///
    /// File-level problems (IO, JSON syntax, not a list) are errors; problems
    /// with single entries are returned alongside the mapping, and those
    /// entries are left out of it.
    pub fn load(path: &Path) -> Result<(Self, Vec<EntryIssues>)> {
        let value = jsonc::from_path(path)?;
        Self::from_value(path, &value)
    }

    /// Build a mapping from already parsed JSON.
    pub fn from_value(path: &Path, value: &Value) -> Result<(Self, Vec<EntryIssues>)> {
        let entries = value.as_array().ok_or_else(|| ReviewError::InvalidKeymap {
            path: path.to_path_buf(),
        })?;

        let mut mapping = Self {
            path: path.to_path_buf(),
            ..Self::default()
        };
        let mut all_issues = Vec::new();

        for entry in entries {
            let (binding, issues) = validate_entry(entry);
            if !issues.is_empty() {
                all_issues.push(EntryIssues {
                    label: entry_label(entry),
                    issues,
                });
            }
            if let Some(binding) = binding {
                mapping.push(binding);
            }
        }

        Ok((mapping, all_issues))
    }

    /// Build a mapping from bindings that are already validated.
    pub fn from_bindings(path: impl Into<PathBuf>, bindings: Vec<Binding>) -> Self {
        let mut mapping = Self {
            path: path.into(),
            ..Self::default()
        };
        for binding in bindings {
            mapping.push(binding);
        }
        mapping
    }

    fn push(&mut self, binding: Binding) {
        self.index
            .entry(binding.keys().to_vec())
            .or_default()
            .push(self.bindings.len());
        self.bindings.push(binding);
    }

    /// The file this mapping was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retained bindings, in file order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Number of retained bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no binding was retained.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings whose chord sequence equals `chords` exactly.
    pub fn get_for_chords(&self, chords: &[Chord]) -> Vec<&Binding> {
        self.index
            .get(chords)
            .map(|indices| indices.iter().map(|&i| &self.bindings[i]).collect())
            .unwrap_or_default()
    }

    /// Bindings of this mapping that `other` binds as well.
    pub fn find_conflicts<'a>(&'a self, other: &'a KeyMapping) -> Vec<Conflict<'a>> {
        self.conflicts_against(&[("", other)])
    }

    /// Bindings of this mapping that any of `targets` binds as well.
    ///
    /// Each conflicting binding is reported once, with the matches of all
    /// targets in target order. Identical bindings defined twice are only
    /// reported the first time.
    pub fn conflicts_against<'a>(
        &'a self,
        targets: &[(&'a str, &'a KeyMapping)],
    ) -> Vec<Conflict<'a>> {
        let mut conflicts: Vec<Conflict<'a>> = Vec::new();

        for binding in &self.bindings {
            if conflicts.iter().any(|c| c.binding == binding) {
                continue;
            }

            let overridden: Vec<Overridden<'a>> = targets
                .iter()
                .flat_map(|&(source, target)| {
                    target
                        .get_for_chords(binding.keys())
                        .into_iter()
                        .map(move |default| Overridden {
                            source,
                            binding: default,
                        })
                })
                .collect();

            if !overridden.is_empty() {
                conflicts.push(Conflict {
                    binding,
                    overridden,
                });
            }
        }

        conflicts
    }
}
