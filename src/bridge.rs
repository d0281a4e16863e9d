//! `log` facade support: records from `log::info!` and friends render through
//! a [`Console`] with the call site the facade reports.

use crate::level::Level;
use crate::logger::Console;
use crate::output::CallSite;
use log::{LevelFilter, Log, Metadata, SetLoggerError};
use std::io::{self, Write};

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

/// A [`Log`] implementation that never filters.
#[derive(Debug, Clone, Default)]
pub struct LogBridge {
    console: Console,
}

impl LogBridge {
    #[must_use]
    pub const fn new(console: Console) -> Self {
        Self { console }
    }

    /// Registers the bridge as the global `log` logger with every level enabled.
    ///
    /// # Errors
    /// Fails if another `log` logger is already installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }

    /// `<unknown>:0` when the record carries no location.
    #[must_use]
    pub fn call_site(record: &log::Record<'_>) -> CallSite {
        CallSite::new(
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
        )
    }
}

impl Log for LogBridge {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let message = record.args().to_string();
        self.console.log(
            record.level().into(),
            &message,
            None,
            &[],
            Self::call_site(record),
        );
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}
