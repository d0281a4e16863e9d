//! The process-wide console behind the free functions and macros.
//!
//! Nothing happens at load time. The embedding application calls
//! [`initialize`] (or [`initialize_with`]) once at startup, which installs the
//! console and prints the startup divider. `OnceLock` makes the first call win;
//! later calls, from any thread, are no-ops.

use crate::config::ConsoleConfig;
use crate::logger::Console;
use std::fmt::{Debug, Display};
use std::sync::{LazyLock, OnceLock};

static CONSOLE: OnceLock<Console> = OnceLock::new();

/// Serves calls made before initialization, without the startup divider.
static FALLBACK: LazyLock<Console> = LazyLock::new(Console::new);

/// Installs the default console and prints the startup divider.
pub fn initialize() {
    initialize_with(ConsoleConfig::default());
}

/// Installs a console built from `config` and prints the startup divider.
/// Ignored if a console is already installed.
pub fn initialize_with(config: ConsoleConfig) {
    let mut installed = false;
    let console = CONSOLE.get_or_init(|| {
        installed = true;
        Console::from_config(config)
    });
    if installed {
        console.divider();
    }
}

#[must_use]
pub fn is_initialized() -> bool {
    CONSOLE.get().is_some()
}

/// The installed console, or the default one before [`initialize`].
#[must_use]
pub fn console() -> &'static Console {
    CONSOLE.get().unwrap_or_else(|| LazyLock::force(&FALLBACK))
}

/// Logs with a stack trace, then exits with status 1.
#[track_caller]
pub fn fatal(message: &str, extras: &[&dyn Debug]) -> ! {
    console().fatal(message, extras)
}

/// Logs with `error`'s text, then exits with status 1.
#[track_caller]
pub fn fatal_with_error(message: &str, error: &dyn Display, extras: &[&dyn Debug]) -> ! {
    console().fatal_with_error(message, error, extras)
}

/// Logs with a stack trace.
#[track_caller]
pub fn error(message: &str, extras: &[&dyn Debug]) {
    console().error(message, extras);
}

/// Logs with `error`'s text in place of a stack trace.
#[track_caller]
pub fn error_with_error(message: &str, error: &dyn Display, extras: &[&dyn Debug]) {
    console().error_with_error(message, error, extras);
}

/// Logs with a stack trace.
#[track_caller]
pub fn warning(message: &str, extras: &[&dyn Debug]) {
    console().warning(message, extras);
}

#[track_caller]
pub fn info(message: &str, extras: &[&dyn Debug]) {
    console().info(message, extras);
}

#[track_caller]
pub fn debug(message: &str, extras: &[&dyn Debug]) {
    console().debug(message, extras);
}
