#![forbid(unsafe_code)]

//! `mlog` - readable, color-coded console logging for command-line tools.
//!
//! Each call prints one block to stdout:
//! - a dim local timestamp
//! - the level tag in its color (`FATAL`, `ERROR`, `WARNING`, `INFO`, `DEBUG`)
//! - the caller's `file:line`
//! - the message
//! - for fatal/error/warning: the error text, or a stack trace when no error was given
//! - any extra values, pretty-printed with `{:#?}`
//! - a divider as wide as the terminal (only when stdout is a terminal)
//!
//! There is no level filtering: every call prints. `fatal` exits with status 1.
//!
//! # Example
//!
//! ```no_run
//! mlog::initialize();
//!
//! mlog::info!("server started");
//! mlog::debug!("listening"; ("0.0.0.0", 8080));
//!
//! let err = std::io::Error::other("disk not found");
//! mlog::error!(err = err, "could not open cache");
//! mlog::fatal("boot failed", &[]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `mlog` binary and its Clap interface
//! - `log`: [`LogBridge`], routing `log` facade records through a [`Console`]

pub mod config;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
pub mod output;

mod error;
mod macros;

#[cfg(feature = "log")]
mod bridge;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{ColorMode, ConsoleConfig};
pub use error::Error;
pub use fmt::{Color, Layer, Sgr, apply_style, print_divider};
pub use global::{
    console, debug, error, error_with_error, fatal, fatal_with_error, info, initialize,
    initialize_with, is_initialized, warning,
};
pub use level::{Level, ParseLevelError};
pub use logger::{Console, ConsoleBuilder};
pub use output::{CallSite, Record, TerminalState};

#[cfg(feature = "log")]
pub use bridge::LogBridge;
