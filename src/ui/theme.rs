//! Visual theme and styling.

use console::Style;

/// Terminal styles for status output.
#[derive(Debug, Clone)]
pub struct Python2GoTheme {
    /// Success messages (green).
    pub success: Style,
    /// Warnings and streamed stderr (orange).
    pub warning: Style,
    /// Errors (red bold).
    pub error: Style,
    /// Spinners and running elements (blue).
    pub info: Style,
    /// Secondary text and streamed stdout.
    pub dim: Style,
    /// Important values (bold).
    pub highlight: Style,
    /// Headers (yellow bold).
    pub header: Style,
    /// Commands shown in output (dim italic).
    pub command: Style,
}

impl Default for Python2GoTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Python2GoTheme {
    /// The colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().yellow(),
            command: Style::new().dim().italic(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            command: Style::new(),
        }
    }

    /// The colored theme when colors are enabled, else the plain one.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("🐍"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a `name  version` row.
    pub fn format_package(&self, name: &str, version: &str, width: usize) -> String {
        format!(
            "{:<width$}  {}",
            name,
            self.dim.apply_to(version),
            width = width
        )
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
