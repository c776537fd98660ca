//! Terminal styling for human-readable output.

use console::Style;

/// Styles used by [`HumanFormatter`](super::HumanFormatter).
#[derive(Debug, Clone)]
pub struct ReviewTheme {
    /// Style for `## Report for` headings (bold).
    pub header: Style,
    /// Style for repository/package section headings (magenta).
    pub section: Style,
    /// Style for the failure summary line (red bold).
    pub failure: Style,
    /// Style for the warning summary line (orange).
    pub warning: Style,
    /// Style for "No failures" and "No warnings" (green).
    pub success: Style,
    /// Style for the trailing help text (dim).
    pub dim: Style,
}

impl Default for ReviewTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            header: Style::new().bold(),
            section: Style::new().magenta(),
            failure: Style::new().red().bold(),
            warning: Style::new().color256(208),
            success: Style::new().green(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            section: Style::new(),
            failure: Style::new(),
            warning: Style::new(),
            success: Style::new(),
            dim: Style::new(),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
