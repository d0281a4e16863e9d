//! Unified error type for the fallible parts of mlog.
//!
//! The logging entry points themselves never return this: a failed write to the
//! console is dropped. It surfaces only from config parsing, color parsing, and
//! the sink-generic rendering functions.

/// Error type for mlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from the output sink.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// A color string that is not `#RRGGBB`.
    InvalidColor(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color: '{s}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::InvalidColor(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
