//! Sublime Text's own key bindings, embedded at compile time.

use std::path::Path;
use std::sync::LazyLock;

use include_dir::{include_dir, Dir};

use super::mapping::KeyMapping;
use super::platform::{Platform, COMMON_KEYMAP_FILENAME};
use crate::jsonc;

/// Embedded default keymaps directory.
static KEYMAPS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/data/keymaps");

static DEFAULT_KEYMAPS: LazyLock<DefaultKeymaps> = LazyLock::new(DefaultKeymaps::load);

/// The default keymaps of every platform, parsed once per process.
pub fn default_keymaps() -> &'static DefaultKeymaps {
    &DEFAULT_KEYMAPS
}

/// Default keymaps shipped with Sublime Text.
#[derive(Debug)]
pub struct DefaultKeymaps {
    linux: KeyMapping,
    osx: KeyMapping,
    windows: KeyMapping,
    common: KeyMapping,
}

impl DefaultKeymaps {
    fn load() -> Self {
        Self {
            linux: load_embedded(&Platform::Linux.keymap_filename()),
            osx: load_embedded(&Platform::Osx.keymap_filename()),
            windows: load_embedded(&Platform::Windows.keymap_filename()),
            common: load_embedded(COMMON_KEYMAP_FILENAME),
        }
    }

    /// The default keymap specific to `platform`.
    pub fn for_platform(&self, platform: Platform) -> &KeyMapping {
        match platform {
            Platform::Linux => &self.linux,
            Platform::Osx => &self.osx,
            Platform::Windows => &self.windows,
        }
    }

    /// The default keymap loaded on every platform.
    pub fn common(&self) -> &KeyMapping {
        &self.common
    }

    /// Keymaps to search for bindings active on `platform`, with their labels.
    pub fn lookup_order(&self, platform: Platform) -> [(&'static str, &KeyMapping); 2] {
        [
            (platform.name(), self.for_platform(platform)),
            (platform.name(), self.common()),
        ]
    }
}

fn load_embedded(file_name: &str) -> KeyMapping {
    let path = Path::new(file_name);
    let Some(text) = KEYMAPS_DIR
        .get_file(file_name)
        .and_then(|file| file.contents_utf8())
    else {
        tracing::error!("Bundled keymap {} is missing", file_name);
        return KeyMapping::from_bindings(path, Vec::new());
    };

    let parsed = jsonc::from_str(text)
        .map_err(|source| crate::error::ReviewError::ResourceParse {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|value| KeyMapping::from_value(path, &value));

    match parsed {
        Ok((mapping, issues)) => {
            for entry in &issues {
                for issue in &entry.issues {
                    tracing::warn!("{} in {}: {}", entry.label, file_name, issue.message);
                }
            }
            tracing::debug!("Loaded {} default bindings from {}", mapping.len(), file_name);
            mapping
        }
        Err(e) => {
            tracing::error!("Failed to load bundled keymap: {}", e);
            KeyMapping::from_bindings(path, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::chord::Chord;

    fn chords(keys: &[&str]) -> Vec<Chord> {
        keys.iter().map(|k| Chord::parse(k).unwrap()).collect()
    }

    #[test]
    fn every_platform_map_is_populated() {
        let defaults = default_keymaps();
        for platform in Platform::ALL {
            assert!(
                defaults.for_platform(platform).len() > 50,
                "{} map looks truncated",
                platform
            );
        }
        assert!(!defaults.common().is_empty());
    }

    #[test]
    fn loaded_once() {
        assert!(std::ptr::eq(default_keymaps(), default_keymaps()));
    }

    #[test]
    fn command_palette_is_bound_per_platform() {
        let defaults = default_keymaps();
        let linux = defaults.for_platform(Platform::Linux);
        let osx = defaults.for_platform(Platform::Osx);

        let found = linux.get_for_chords(&chords(&["ctrl+shift+p"]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].command(), "show_overlay");
        assert!(!found[0].is_conditional());

        assert!(osx.get_for_chords(&chords(&["ctrl+shift+p"])).is_empty());
        assert_eq!(osx.get_for_chords(&chords(&["super+shift+p"])).len(), 1);
    }

    #[test]
    fn multi_chord_sequences_are_indexed() {
        let windows = default_keymaps().for_platform(Platform::Windows);
        let found = windows.get_for_chords(&chords(&["ctrl+k", "ctrl+b"]));
        assert_eq!(found[0].command(), "toggle_side_bar");
    }

    #[test]
    fn common_map_holds_context_guarded_bindings() {
        let common = default_keymaps().common();
        let escape = common.get_for_chords(&chords(&["escape"]));
        assert!(escape.len() > 1);
        assert!(escape.iter().all(|b| b.is_conditional()));
    }

    #[test]
    fn lookup_order_searches_platform_then_common() {
        let defaults = default_keymaps();
        let order = defaults.lookup_order(Platform::Osx);
        assert_eq!(order[0].0, "OSX");
        assert!(std::ptr::eq(order[0].1, defaults.for_platform(Platform::Osx)));
        assert!(std::ptr::eq(order[1].1, defaults.common()));
    }
}
