//! Console output configuration.
//!
//! Controls whether status lines printed by the CLI use color and emoji,
//! based on terminal capabilities and user preference. Log records go
//! through `env_logger` and are unaffected.
//!
//! The following inputs are respected, in order:
//! - `--color=always|never|auto` CLI flag
//! - `NO_COLOR` set (any value) disables colors (https://no-color.org/)
//! - `CLICOLOR=0` disables colors
//! - `CLICOLOR_FORCE=1` forces colors even without a TTY
//! - `TERM=dumb` disables colors
//! - otherwise, the terminal's own capabilities decide

use std::env;

/// Parsed value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Always,
    Never,
    Auto,
}

impl ColorChoice {
    /// Parse a `--color` flag value; anything unrecognized falls back to
    /// auto-detection.
    pub fn parse(flag: &str) -> Self {
        match flag.to_lowercase().as_str() {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Auto,
        }
    }
}

/// Output configuration for the CLI status lines.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => detect_color_support(),
        };

        Self { use_color }
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

fn detect_color_support() -> bool {
    // The presence of NO_COLOR (even empty) disables colors
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }

    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }

    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }

    console::Term::stdout().features().colors_supported()
}

/// Returns the emoji when colors are enabled, the plain alternative when
/// they are not.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
