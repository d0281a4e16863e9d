//! Command-line interface for the `mlog` binary, using Clap.
//!
//! Shell scripts get the same output as library callers:
//!
//! ```text
//! mlog info "server started"
//! mlog error "upload failed" --error "connection reset" --file deploy.sh --line 42
//! mlog fatal "boot failed" --error "disk not found"     # exits 1
//! mlog divider
//! ```

mod commands;

pub use commands::{cmd_divider, cmd_log, run};

use crate::config::ColorMode;
use clap::{Args, Parser, Subcommand};

/// Color mode for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum, Default)]
pub enum ColorArg {
    #[default]
    Always,
    Never,
    Auto,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
            ColorArg::Auto => Self::Auto,
        }
    }
}

/// mlog - print readable, color-coded log lines from the command line.
#[derive(Parser)]
#[command(name = "mlog", version, about = "Print readable, color-coded log lines")]
pub struct Cli {
    /// When to emit color escape codes
    #[arg(long, value_enum, global = true, default_value = "always")]
    pub color: ColorArg,
    #[command(subcommand)]
    pub command: Command,
}

/// Fields shared by every level subcommand.
#[derive(Args, Debug, Clone)]
pub struct EntryArgs {
    /// Log message
    pub message: String,
    /// Extra values, printed one per line after the message
    pub extras: Vec<String>,
    /// File name reported as the call site
    #[arg(long, default_value = "mlog")]
    pub file: String,
    /// Line number reported as the call site
    #[arg(long, default_value_t = 0)]
    pub line: u32,
}

/// Levels that show an error or stack-trace block.
#[derive(Args, Debug, Clone)]
pub struct FailureArgs {
    #[command(flatten)]
    pub entry: EntryArgs,
    /// Error text shown in place of a stack trace
    #[arg(long)]
    pub error: Option<String>,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log at FATAL and exit with status 1.
    Fatal(FailureArgs),
    /// Log at ERROR.
    Error(FailureArgs),
    /// Log at WARNING.
    #[command(alias = "warn")]
    Warning(FailureArgs),
    /// Log at INFO.
    Info(EntryArgs),
    /// Log at DEBUG.
    Debug(EntryArgs),
    /// Print a terminal-wide divider (nothing when stdout is not a terminal).
    Divider,
}
