//! `format!`-style front ends for the free functions in [`crate::global`].
//!
//! ```no_run
//! let port = 8080;
//! let config = vec!["a", "b"];
//! mlog::info!("listening on {port}");
//! mlog::debug!("loaded config"; config);
//!
//! let err = std::io::Error::other("disk not found");
//! mlog::error!(err = err, "boot failed on port {}", port; port);
//! ```
//!
//! Extras after the `;` are printed with `{:#?}`, one per line, in order.

#[doc(hidden)]
#[macro_export]
macro_rules! __mlog_extras {
    ($($extra:expr),*) => {
        &[$(&$extra as &dyn ::std::fmt::Debug),*]
    };
}

/// Logs at Fatal and exits with status 1. `err = e,` shows `e` instead of a stack trace.
#[macro_export]
macro_rules! fatal {
    (err = $err:expr, $fmt:literal $(, $arg:expr)* ; $($extra:expr),+ $(,)?) => {
        $crate::fatal_with_error(&::std::format!($fmt $(, $arg)*), &$err, $crate::__mlog_extras!($($extra),+))
    };
    (err = $err:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::fatal_with_error(&::std::format!($fmt $(, $arg)*), &$err, &[])
    };
    ($fmt:literal $(, $arg:expr)* ; $($extra:expr),+ $(,)?) => {
        $crate::fatal(&::std::format!($fmt $(, $arg)*), $crate::__mlog_extras!($($extra),+))
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::fatal(&::std::format!($fmt $(, $arg)*), &[])
    };
}

/// Logs at Error. `err = e,` shows `e` instead of a stack trace.
#[macro_export]
macro_rules! error {
    (err = $err:expr, $fmt:literal $(, $arg:expr)* ; $($extra:expr),+ $(,)?) => {
        $crate::error_with_error(&::std::format!($fmt $(, $arg)*), &$err, $crate::__mlog_extras!($($extra),+))
    };
    (err = $err:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::error_with_error(&::std::format!($fmt $(, $arg)*), &$err, &[])
    };
    ($fmt:literal $(, $arg:expr)* ; $($extra:expr),+ $(,)?) => {
        $crate::error(&::std::format!($fmt $(, $arg)*), $crate::__mlog_extras!($($extra),+))
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::error(&::std::format!($fmt $(, $arg)*), &[])
    };
}

/// Logs at Warning with a stack trace.
#[macro_export]
macro_rules! warning {
    ($fmt:literal $(, $arg:expr)* ; $($extra:expr),+ $(,)?) => {
        $crate::warning(&::std::format!($fmt $(, $arg)*), $crate::__mlog_extras!($($extra),+))
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::warning(&::std::format!($fmt $(, $arg)*), &[])
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:literal $(, $arg:expr)* ; $($extra:expr),+ $(,)?) => {
        $crate::info(&::std::format!($fmt $(, $arg)*), $crate::__mlog_extras!($($extra),+))
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::info(&::std::format!($fmt $(, $arg)*), &[])
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* ; $($extra:expr),+ $(,)?) => {
        $crate::debug(&::std::format!($fmt $(, $arg)*), $crate::__mlog_extras!($($extra),+))
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::debug(&::std::format!($fmt $(, $arg)*), &[])
    };
}
