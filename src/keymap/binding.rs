//! Key bindings and their structural validation.

use serde_json::{Map, Value};

use super::chord::{parse_sequence, sequence_to_string, Chord};

/// Keys every binding must define.
pub const REQUIRED_KEYS: [&str; 2] = ["keys", "command"];

/// Keys a binding may define.
pub const ALLOWED_KEYS: [&str; 4] = ["keys", "command", "args", "context"];

/// Severity of a [`BindingIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueLevel {
    /// The binding is unusable and was dropped.
    Failure,
    /// The binding is kept but looks wrong.
    Warning,
}

/// A structural problem found in one keymap entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingIssue {
    pub level: IssueLevel,
    pub message: String,
}

impl BindingIssue {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Failure,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warning,
            message: message.into(),
        }
    }
}

/// All issues of one keymap entry, with the entry's context label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryIssues {
    /// `Binding: <entry as compact JSON>`
    pub label: String,
    pub issues: Vec<BindingIssue>,
}

/// A validated binding with a normalized chord sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    keys: Vec<Chord>,
    command: String,
    args: Option<Value>,
    context: Option<Value>,
}

impl Binding {
    /// Create a binding from already normalized parts.
    pub fn new(keys: Vec<Chord>, command: impl Into<String>) -> Self {
        Self {
            keys,
            command: command.into(),
            args: None,
            context: None,
        }
    }

    /// Attach an activation condition.
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Attach command arguments.
    pub fn with_args(mut self, args: Value) -> Self {
        self.args = Some(args);
        self
    }

    /// The normalized chord sequence.
    pub fn keys(&self) -> &[Chord] {
        &self.keys
    }

    /// The command run by this binding.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Command arguments, if any.
    pub fn args(&self) -> Option<&Value> {
        self.args.as_ref()
    }

    /// Activation condition, if any.
    pub fn context(&self) -> Option<&Value> {
        self.context.as_ref()
    }

    /// Whether the binding only applies under a `context` condition.
    pub fn is_conditional(&self) -> bool {
        self.context.is_some()
    }

    /// The chord sequence as a JSON array string.
    pub fn keys_display(&self) -> String {
        sequence_to_string(&self.keys)
    }
}

/// Context label used for reports about a keymap entry.
pub fn entry_label(entry: &Value) -> String {
    format!("Binding: {}", entry)
}

/// Validate one keymap entry.
///
/// Returns the binding if it can take part in conflict analysis, and every
/// issue found on the way. An entry missing required keys produces exactly
/// one failure (plus the supplementary keys warning, if any) and its chords
/// are not looked at.
pub fn validate_entry(entry: &Value) -> (Option<Binding>, Vec<BindingIssue>) {
    let mut issues = Vec::new();

    let object = match entry.as_object() {
        Some(object) => object,
        None => {
            issues.push(BindingIssue::failure("Binding is not an object"));
            return (None, issues);
        }
    };

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect();
    let extra: Vec<&str> = object
        .keys()
        .map(String::as_str)
        .filter(|key| !ALLOWED_KEYS.contains(key))
        .collect();

    if !missing.is_empty() {
        issues.push(BindingIssue::failure(format!(
            "Binding is missing the keys {}",
            key_list(&missing)
        )));
    }
    if !extra.is_empty() {
        issues.push(BindingIssue::warning(format!(
            "Binding defines supplementary keys {}",
            key_list(&extra)
        )));
    }
    if !missing.is_empty() {
        return (None, issues);
    }

    match build_binding(object) {
        Ok(binding) => (Some(binding), issues),
        Err(message) => {
            issues.push(BindingIssue::failure(message));
            (None, issues)
        }
    }
}

fn build_binding(object: &Map<String, Value>) -> Result<Binding, String> {
    let keys = parse_sequence(&object["keys"]).map_err(|e| e.to_string())?;
    let command = object["command"]
        .as_str()
        .ok_or_else(|| "'command' key is not a string".to_string())?;

    Ok(Binding {
        keys,
        command: command.to_string(),
        args: object.get("args").cloned(),
        context: object.get("context").cloned(),
    })
}

fn key_list(keys: &[&str]) -> String {
    Value::from(keys.to_vec()).to_string()
}
