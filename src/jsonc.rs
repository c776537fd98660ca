//! JSON with comments.
//!
//! Sublime Text resource files (keymaps, settings, menus, build systems...)
//! accept `//` and `/* */` comments and trailing commas. This module blanks
//! those out and hands the rest to `serde_json`. Blanking keeps every byte
//! offset and line break in place, so error positions refer to the original
//! text.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, ReviewError};

/// Parse JSON text that may contain comments and trailing commas.
pub fn from_str(text: &str) -> serde_json::Result<Value> {
    let stripped = strip_trailing_commas(strip_comments(text.as_bytes()));
    // Comments are blanked as whole characters, so this never substitutes.
    let stripped = String::from_utf8_lossy(&stripped);
    serde_json::from_str(&stripped)
}

/// Read and parse a JSON-with-comments file.
///
/// The file is read completely and closed before parsing starts.
pub fn from_path(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    from_str(&text).map_err(|source| ReviewError::ResourceParse {
        path: path.to_path_buf(),
        source,
    })
}

fn strip_comments(input: &[u8]) -> Vec<u8> {
    let mut out = input.to_vec();
    let mut i = 0;
    while i < input.len() {
        match input[i] {
            b'"' => i = skip_string(input, i),
            b'/' if input.get(i + 1) == Some(&b'/') => {
                while i < input.len() && input[i] != b'\n' {
                    blank(&mut out, i);
                    i += 1;
                }
            }
            b'/' if input.get(i + 1) == Some(&b'*') => {
                blank(&mut out, i);
                blank(&mut out, i + 1);
                i += 2;
                while i < input.len() {
                    if input[i] == b'*' && input.get(i + 1) == Some(&b'/') {
                        blank(&mut out, i);
                        blank(&mut out, i + 1);
                        i += 2;
                        break;
                    }
                    blank(&mut out, i);
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
    out
}

fn strip_trailing_commas(mut input: Vec<u8>) -> Vec<u8> {
    let mut i = 0;
    while i < input.len() {
        match input[i] {
            b'"' => i = skip_string(&input, i),
            b',' => {
                let next = input[i + 1..]
                    .iter()
                    .find(|b| !b.is_ascii_whitespace());
                if matches!(next, Some(&b']') | Some(&b'}')) {
                    input[i] = b' ';
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    input
}

/// Index just past the string literal starting at `start`.
fn skip_string(input: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < input.len() {
        match input[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    input.len()
}

/// Replace a byte with a space, keeping line breaks.
fn blank(out: &mut [u8], i: usize) {
    if let Some(b) = out.get_mut(i) {
        if *b != b'\n' && *b != b'\r' {
            *b = b' ';
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_json_parses() {
        assert_eq!(from_str(r#"{"a": [1, 2]}"#).unwrap(), json!({"a": [1, 2]}));
    }

    #[test]
    fn line_comments_are_ignored() {
        let text = "[\n  // a comment\n  {\"keys\": [\"f1\"]} // trailing\n]";
        assert_eq!(from_str(text).unwrap(), json!([{"keys": ["f1"]}]));
    }

    #[test]
    fn block_comments_are_ignored() {
        let text = "/* header\n spanning lines */ {\"a\": /* inline */ 1}";
        assert_eq!(from_str(text).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn trailing_commas_are_ignored() {
        let text = "[{\"a\": 1,}, [1, 2, ], ]";
        assert_eq!(from_str(text).unwrap(), json!([{"a": 1}, [1, 2]]));
    }

    #[test]
    fn trailing_comma_before_comment() {
        let text = "[1, // last\n]";
        assert_eq!(from_str(text).unwrap(), json!([1]));
    }

    #[test]
    fn comment_markers_inside_strings_are_kept() {
        let text = r#"{"url": "http://example.com/*x*/", "s": "a,]", "q": "\"//"}"#;
        assert_eq!(
            from_str(text).unwrap(),
            json!({"url": "http://example.com/*x*/", "s": "a,]", "q": "\"//"})
        );
    }

    #[test]
    fn non_ascii_comments_are_handled() {
        let text = "// ünïcödé\n{\"key\": \"välue\"}";
        assert_eq!(from_str(text).unwrap(), json!({"key": "välue"}));
    }

    #[test]
    fn errors_keep_original_line_numbers() {
        let text = "// one\n/* two\nthree */\n{\"a\": }";
        let err = from_str(text).unwrap_err();
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn from_path_reports_path_on_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("broken.sublime-settings");
        fs::write(&path, "{").unwrap();

        let err = from_path(&path).unwrap_err();
        assert!(matches!(err, ReviewError::ResourceParse { .. }));
        assert!(err.to_string().contains("broken.sublime-settings"));
    }
}
