//! Key chords and their canonical form.
//!
//! A chord is a set of modifiers plus one key, written `ctrl+shift+p`.
//! Modifiers are stored sorted by the fixed precedence
//! `ctrl, super, alt, shift`, so `shift+ctrl+p` and `ctrl+shift+p` are the
//! same chord.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

/// Keyboard modifier keys, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// Control key
    Ctrl,
    /// Super/Command/Windows key
    Super,
    /// Alt key (`option` on macOS)
    Alt,
    /// Shift key
    Shift,
}

impl Modifier {
    /// Parse a modifier token, accepting `option` as an alias of `alt`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "ctrl" => Some(Modifier::Ctrl),
            "super" => Some(Modifier::Super),
            "alt" | "option" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            _ => None,
        }
    }

    /// Canonical token.
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Ctrl => "ctrl",
            Modifier::Super => "super",
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a chord or chord sequence could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// A token before the key is not a known modifier.
    #[error("Unrecognized modifier key '{0}'")]
    UnrecognizedModifier(String),

    /// The chord is empty.
    #[error("Chord '{0}' has no key")]
    MissingKey(String),

    /// A chord in the sequence is not a string.
    #[error("Chord {0} is not a string")]
    NotAString(String),

    /// The `keys` value is empty or not an array.
    #[error("'keys' key is empty or not a list")]
    NotAList,
}

/// One key combination in canonical form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chord {
    modifiers: Vec<Modifier>,
    key: String,
}

impl Chord {
    /// Parse and normalize a chord such as `shift+ctrl+p`.
    ///
    /// A trailing `+` is the plus key itself, so `ctrl++` is
    /// `ctrl` with key `+`.
    pub fn parse(chord: &str) -> Result<Self, ChordError> {
        if chord.is_empty() {
            return Err(ChordError::MissingKey(chord.to_string()));
        }

        let (prefix, key) = match chord.strip_suffix('+') {
            Some(rest) => (rest.strip_suffix('+').unwrap_or(rest), "+"),
            None => chord.rsplit_once('+').unwrap_or(("", chord)),
        };

        let mut modifiers = Vec::new();
        if !prefix.is_empty() {
            for token in prefix.split('+') {
                let modifier = Modifier::parse(token)
                    .ok_or_else(|| ChordError::UnrecognizedModifier(token.to_string()))?;
                modifiers.push(modifier);
            }
        }
        modifiers.sort();
        modifiers.dedup();

        Ok(Self {
            modifiers,
            key: key.to_string(),
        })
    }

    /// Modifiers in canonical order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// The physical key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier)?;
        }
        f.write_str(&self.key)
    }
}

/// Normalize the `keys` value of a binding into a chord sequence.
pub fn parse_sequence(keys: &Value) -> Result<Vec<Chord>, ChordError> {
    let items = match keys.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => return Err(ChordError::NotAList),
    };

    let chords = items
        .iter()
        .map(|item| match item.as_str() {
            Some(chord) => Chord::parse(chord),
            None => Err(ChordError::NotAString(item.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        let normalized = Value::from(chords.iter().map(|c| c.to_string()).collect::<Vec<_>>());
        if &normalized != keys {
            tracing::debug!("normalized chords {} to {}", keys, normalized);
        }
    }
    Ok(chords)
}

/// Canonical string form of a chord sequence, e.g. `["ctrl+k", "ctrl+b"]`.
pub fn sequence_to_string(chords: &[Chord]) -> String {
    let rendered: Vec<String> = chords.iter().map(|c| c.to_string()).collect();
    Value::from(rendered).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(chord: &str) -> String {
        Chord::parse(chord).unwrap().to_string()
    }

    #[test]
    fn modifier_order_is_canonical() {
        assert_eq!(normalize("shift+ctrl+a"), "ctrl+shift+a");
        assert_eq!(normalize("ctrl+shift+a"), "ctrl+shift+a");
        assert_eq!(normalize("shift+alt+super+ctrl+x"), "ctrl+super+alt+shift+x");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize("shift+super+k");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn option_is_alt() {
        assert_eq!(normalize("option+shift+up"), "alt+shift+up");
        assert_eq!(
            Chord::parse("option+x").unwrap(),
            Chord::parse("alt+x").unwrap()
        );
    }

    #[test]
    fn plain_key_has_no_modifiers() {
        let chord = Chord::parse("f12").unwrap();
        assert!(chord.modifiers().is_empty());
        assert_eq!(chord.key(), "f12");
    }

    #[test]
    fn plus_key() {
        assert_eq!(normalize("+"), "+");
        assert_eq!(normalize("ctrl++"), "ctrl++");
        assert_eq!(normalize("shift+ctrl+"), "ctrl+shift++");
        assert_eq!(Chord::parse("ctrl++").unwrap().key(), "+");
    }

    #[test]
    fn duplicate_modifiers_collapse() {
        assert_eq!(normalize("ctrl+ctrl+a"), "ctrl+a");
    }

    #[test]
    fn unknown_modifier_is_rejected() {
        assert_eq!(
            Chord::parse("foo+a"),
            Err(ChordError::UnrecognizedModifier("foo".to_string()))
        );
        assert_eq!(
            Chord::parse("foo+a").unwrap_err().to_string(),
            "Unrecognized modifier key 'foo'"
        );
    }

    #[test]
    fn modifiers_are_case_sensitive() {
        assert!(matches!(
            Chord::parse("Ctrl+a"),
            Err(ChordError::UnrecognizedModifier(_))
        ));
    }

    #[test]
    fn empty_chord_is_rejected() {
        assert_eq!(
            Chord::parse(""),
            Err(ChordError::MissingKey(String::new()))
        );
    }

    #[test]
    fn sequence_normalizes_each_chord() {
        let chords = parse_sequence(&json!(["shift+ctrl+k", "ctrl+b"])).unwrap();
        assert_eq!(sequence_to_string(&chords), r#"["ctrl+shift+k","ctrl+b"]"#);
    }

    #[test]
    fn sequence_must_be_non_empty_list() {
        assert_eq!(parse_sequence(&json!([])), Err(ChordError::NotAList));
        assert_eq!(parse_sequence(&json!("ctrl+a")), Err(ChordError::NotAList));
        assert_eq!(parse_sequence(&json!(null)), Err(ChordError::NotAList));
    }

    #[test]
    fn sequence_items_must_be_strings() {
        assert_eq!(
            parse_sequence(&json!(["ctrl+a", 5])),
            Err(ChordError::NotAString("5".to_string()))
        );
    }

    #[test]
    fn sequence_reports_first_bad_modifier() {
        assert_eq!(
            parse_sequence(&json!(["ctrl+a", "hyper+b"])),
            Err(ChordError::UnrecognizedModifier("hyper".to_string()))
        );
    }
}
