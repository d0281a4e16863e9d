//! `mlog` binary: log lines from shell scripts in the same format as the library.
//!
//! Usage:
//!   mlog <fatal|error|warning|info|debug> <message> [extras...] [--error TEXT] [--file NAME] [--line N]
//!   mlog divider
//!
//! `fatal` exits with status 1 after printing.

use clap::Parser;
use mlog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    run(Cli::parse())
}
