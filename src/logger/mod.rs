//! The level-specific entry points, all funnelling into [`Console::log`].
//!
//! Every public entry point is `#[track_caller]`, so the reported `file:line`
//! is the caller's own, even through the free functions and macros.

mod builder;

pub use builder::ConsoleBuilder;

use crate::config::ConsoleConfig;
use crate::fmt::write_divider;
use crate::level::Level;
use crate::output::{self, CallSite, Record, TerminalState};
use std::fmt::{Debug, Display};
use std::io::{self, Write};
use std::process;

/// Exit status for `fatal` and `fatal_with_error`.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Renders records to stdout. Holds only settings, so it is cheap to share.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Console {
    config: ConsoleConfig,
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    #[must_use]
    pub const fn from_config(config: ConsoleConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Renders into an arbitrary sink. Used by [`Self::emit`] and by tests that capture output.
    ///
    /// # Errors
    /// I/O errors from `out`.
    pub fn render<W: Write + ?Sized>(
        &self,
        out: &mut W,
        record: &Record<'_>,
        terminal: TerminalState,
    ) -> Result<(), crate::Error> {
        output::render(out, record, &self.config, terminal)
    }

    /// Renders to stdout and flushes.
    ///
    /// Stdout stays locked for the whole block, so records from concurrent
    /// threads never interleave. Write failures are dropped.
    pub fn emit(&self, record: &Record<'_>) {
        let terminal = TerminalState::stdout();
        let mut stdout = io::stdout().lock();
        let _ = self.render(&mut stdout, record, terminal);
        let _ = stdout.flush();
    }

    /// The single parameterized routine. `error` is only shown at Fatal, Error and Warning.
    ///
    /// Never exits, even at [`Level::Fatal`]; that is left to [`Self::fatal`].
    pub fn log(
        &self,
        level: Level,
        message: &str,
        error: Option<&dyn Display>,
        extras: &[&dyn Debug],
        call_site: CallSite,
    ) {
        let mut record = Record::new(level, message, call_site).extras(extras);
        record.error = error;
        self.emit(&record);
    }

    /// Prints this console's divider to stdout if stdout is a terminal.
    pub fn divider(&self) {
        let terminal = TerminalState::stdout();
        let colors = self.config.color.enabled(terminal.is_terminal);
        let mut stdout = io::stdout().lock();
        let _ = write_divider(&mut stdout, terminal.width, self.config.divider_glyph, colors);
        let _ = stdout.flush();
    }

    /// Logs with a stack trace, then exits with status 1.
    #[track_caller]
    pub fn fatal(&self, message: &str, extras: &[&dyn Debug]) -> ! {
        self.log(Level::Fatal, message, None, extras, CallSite::caller());
        process::exit(FATAL_EXIT_CODE)
    }

    /// Logs with `error`'s text, then exits with status 1.
    #[track_caller]
    pub fn fatal_with_error(&self, message: &str, error: &dyn Display, extras: &[&dyn Debug]) -> ! {
        self.log(Level::Fatal, message, Some(error), extras, CallSite::caller());
        process::exit(FATAL_EXIT_CODE)
    }

    #[track_caller]
    pub fn error(&self, message: &str, extras: &[&dyn Debug]) {
        self.log(Level::Error, message, None, extras, CallSite::caller());
    }

    #[track_caller]
    pub fn error_with_error(&self, message: &str, error: &dyn Display, extras: &[&dyn Debug]) {
        self.log(Level::Error, message, Some(error), extras, CallSite::caller());
    }

    #[track_caller]
    pub fn warning(&self, message: &str, extras: &[&dyn Debug]) {
        self.log(Level::Warning, message, None, extras, CallSite::caller());
    }

    #[track_caller]
    pub fn info(&self, message: &str, extras: &[&dyn Debug]) {
        self.log(Level::Info, message, None, extras, CallSite::caller());
    }

    #[track_caller]
    pub fn debug(&self, message: &str, extras: &[&dyn Debug]) {
        self.log(Level::Debug, message, None, extras, CallSite::caller());
    }
}
