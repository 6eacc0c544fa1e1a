//! Run configuration for the decode check.

use crate::presentation::DisplayMode;

/// How the report is written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned list with status glyphs
    #[default]
    Text,
    /// JSON array, one object per codec
    Json,
}

/// Configuration for a decode check run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Mode the list starts in
    pub initial_mode: DisplayMode,
    /// Output format
    pub format: OutputFormat,
    /// Color the status glyphs with ANSI escapes
    pub color: bool,
    /// Keep reading toggle commands from stdin
    pub interactive: bool,
}

impl CheckConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            initial_mode: DisplayMode::default(),
            format: OutputFormat::Text,
            color: true,
            interactive: false,
        }
    }

    /// Set the initial display mode (default: raw tags).
    pub fn initial_mode(mut self, mode: DisplayMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Set the output format (default: text).
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable colored glyphs (default: true).
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Enable or disable the interactive toggle loop (default: false).
    ///
    /// Ignored for JSON output.
    pub fn interactive(mut self, enabled: bool) -> Self {
        self.interactive = enabled;
        self
    }

    /// Whether the run should enter the toggle loop.
    pub fn wants_toggle_loop(&self) -> bool {
        self.interactive && self.format == OutputFormat::Text
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new()
    }
}
