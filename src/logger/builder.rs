//! Stepwise construction of a [`Console`] without spelling out a whole [`ConsoleConfig`].

use super::Console;
use crate::config::{ColorMode, ConsoleConfig};

#[derive(Debug, Clone, Default)]
pub struct ConsoleBuilder {
    config: ConsoleConfig,
}

impl ConsoleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipes and log files often don't want escape codes; `Auto` checks stdout.
    #[must_use]
    pub const fn color(mut self, mode: ColorMode) -> Self {
        self.config.color = mode;
        self
    }

    /// chrono strftime pattern for the leading timestamp.
    #[must_use]
    pub fn timestamp_format(mut self, pattern: impl Into<String>) -> Self {
        self.config.timestamp_format = pattern.into();
        self
    }

    #[must_use]
    pub const fn divider_glyph(mut self, glyph: char) -> Self {
        self.config.divider_glyph = glyph;
        self
    }

    #[must_use]
    pub fn build(self) -> Console {
        Console::from_config(self.config)
    }
}
