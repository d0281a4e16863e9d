//! Severity levels: they pick the tag text, the tag color, and whether a
//! record carries an error or stack-trace block.

use crate::fmt::Sgr;
use std::fmt;
use std::str::FromStr;

/// Ordered by ascending verbosity, so `Fatal` is the smallest value.
///
/// No level is ever filtered out; the ordering exists for callers that want to
/// compare severities themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// The process cannot continue. Rendering is followed by exit status 1.
    Fatal = 0,
    /// An operation failed.
    Error = 1,
    /// Something looks wrong but work continues.
    Warning = 2,
    /// Normal operational milestones.
    #[default]
    Info = 3,
    /// Development-time detail.
    Debug = 4,
}

impl Level {
    /// Lowercase name, as accepted by `FromStr` and the `mlog` binary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// The uppercase tag printed after the timestamp.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Bright foreground color for the tag.
    #[must_use]
    pub const fn tag_style(self) -> Sgr {
        match self {
            Self::Fatal | Self::Error => Sgr::FG_BRIGHT_RED,
            Self::Warning => Sgr::FG_BRIGHT_YELLOW,
            Self::Info => Sgr::FG_BRIGHT_GREEN,
            Self::Debug => Sgr::FG_BRIGHT_CYAN,
        }
    }

    /// Whether records at this level get the magenta error/stack-trace block.
    #[must_use]
    pub const fn shows_detail(self) -> bool {
        matches!(self, Self::Fatal | Self::Error | Self::Warning)
    }

    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Fatal,
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for names that match no level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fatal" | "crit" | "critical" => Ok(Self::Fatal),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
