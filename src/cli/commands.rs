//! Subcommand handlers. A shell script has no Rust call site, so the reported
//! `file:line` comes from `--file`/`--line`.

use super::{Cli, Command, EntryArgs};
use crate::level::Level;
use crate::logger::Console;
use crate::output::CallSite;
use std::fmt::{self, Debug, Display};
use std::process::ExitCode;

/// Prints a command-line extra as typed, without the quotes `{:#?}` would add to a `String`.
struct Verbatim<'a>(&'a str);

impl Debug for Verbatim<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Dispatches a parsed command line.
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    let console = Console::builder().color(cli.color.into()).build();

    match cli.command {
        Command::Fatal(args) => cmd_log(&console, Level::Fatal, &args.entry, args.error.as_ref()),
        Command::Error(args) => cmd_log(&console, Level::Error, &args.entry, args.error.as_ref()),
        Command::Warning(args) => {
            cmd_log(&console, Level::Warning, &args.entry, args.error.as_ref())
        }
        Command::Info(entry) => cmd_log(&console, Level::Info, &entry, None),
        Command::Debug(entry) => cmd_log(&console, Level::Debug, &entry, None),
        Command::Divider => cmd_divider(&console),
    }
}

/// Renders one record. Fatal returns exit status 1 instead of exiting, so
/// stdout is flushed by normal teardown.
#[must_use]
pub fn cmd_log(
    console: &Console,
    level: Level,
    entry: &EntryArgs,
    error: Option<&String>,
) -> ExitCode {
    let extras: Vec<Verbatim<'_>> = entry.extras.iter().map(|e| Verbatim(e.as_str())).collect();
    let extras: Vec<&dyn Debug> = extras.iter().map(|e| e as &dyn Debug).collect();

    console.log(
        level,
        &entry.message,
        error.map(|e| e as &dyn Display),
        &extras,
        CallSite::new(&entry.file, entry.line),
    );

    if level == Level::Fatal {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

#[must_use]
pub fn cmd_divider(console: &Console) -> ExitCode {
    console.divider();
    ExitCode::SUCCESS
}
