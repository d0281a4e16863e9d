//! Console settings.
//!
//! mlog reads no config file and no environment variable on its own. Embedding
//! applications that keep logger settings in their own TOML file can hand the
//! relevant table to [`ConsoleConfig::from_toml`]; everyone else uses the
//! defaults or the builder on [`crate::Console`].

use serde::Deserialize;

/// strftime pattern producing e.g. `02 Jan 2006 15:04:05 CET`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d %b %Y %H:%M:%S %Z";

/// When SGR escapes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Escapes are written even into pipes and files.
    #[default]
    Always,
    /// Plain text only.
    Never,
    /// Escapes only when the output is a terminal.
    Auto,
}

impl ColorMode {
    /// Resolves the mode against whether the output is a terminal.
    #[must_use]
    pub const fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal,
        }
    }
}

/// An empty table yields the stock behavior: colors always on and a `─` divider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub color: ColorMode,
    pub timestamp_format: String,
    pub divider_glyph: char,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            divider_glyph: crate::fmt::DIVIDER_GLYPH,
        }
    }
}

impl ConsoleConfig {
    /// Parses a TOML table such as:
    ///
    /// ```toml
    /// color = "auto"
    /// timestamp_format = "%H:%M:%S"
    /// divider_glyph = "="
    /// ```
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on syntax errors or unknown values.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }
}
