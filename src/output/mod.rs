//! What one log call hands to the renderer, and where the rendered block goes.

mod render;

pub use render::render;

use crate::fmt::terminal_width;
use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt;
use std::io::{self, IsTerminal};
use std::panic::Location;
use std::path::Path;

/// File base name and line of the code that called a logging entry point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    /// Directories are stripped from `file`: `src/net/server.rs` becomes `server.rs`.
    #[must_use]
    pub fn new(file: &str, line: u32) -> Self {
        let base = Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file);
        Self {
            file: base.to_string(),
            line,
        }
    }

    /// The location of the nearest caller not marked `#[track_caller]`.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One log call, borrowed from the caller and dropped once rendered.
#[derive(Clone)]
pub struct Record<'a> {
    pub level: Level,
    pub message: &'a str,
    /// Shown instead of a stack trace at Fatal, Error and Warning. Ignored at Info and Debug.
    pub error: Option<&'a dyn fmt::Display>,
    pub extras: &'a [&'a dyn fmt::Debug],
    pub call_site: CallSite,
    pub timestamp: DateTime<Local>,
}

impl<'a> Record<'a> {
    /// A record stamped with the current local time, without error or extras.
    #[must_use]
    pub fn new(level: Level, message: &'a str, call_site: CallSite) -> Self {
        Self {
            level,
            message,
            error: None,
            extras: &[],
            call_site,
            timestamp: Local::now(),
        }
    }

    #[must_use]
    pub const fn error(mut self, error: &'a dyn fmt::Display) -> Self {
        self.error = Some(error);
        self
    }

    #[must_use]
    pub const fn extras(mut self, extras: &'a [&'a dyn fmt::Debug]) -> Self {
        self.extras = extras;
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("message", &self.message)
            .field("error", &self.error.map(ToString::to_string))
            .field("extras", &self.extras)
            .field("call_site", &self.call_site)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

/// What the renderer needs to know about the destination.
///
/// `width` is `Some` only for a terminal whose size could be queried; the
/// divider is written only then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalState {
    pub is_terminal: bool,
    pub width: Option<u16>,
}

impl TerminalState {
    /// Queries stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            is_terminal: io::stdout().is_terminal(),
            width: terminal_width(),
        }
    }

    /// A pipe or file: no divider, and no colors under [`crate::ColorMode::Auto`].
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            is_terminal: false,
            width: None,
        }
    }

    /// A terminal `width` columns wide.
    #[must_use]
    pub const fn sized(width: u16) -> Self {
        Self {
            is_terminal: true,
            width: Some(width),
        }
    }
}
