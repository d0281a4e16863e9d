//! The one rendering routine behind every entry point.
//!
//! Block layout, in order:
//!
//! ```text
//! <timestamp> <TAG> <file>:<line> <message>
//! <error text | stack trace>      (Fatal, Error, Warning only)
//! <extra #1>
//! <extra #2>
//! ──────────────────────────────  (terminals only)
//! ```

use super::{Record, TerminalState};
use crate::config::{ConsoleConfig, DEFAULT_TIMESTAMP_FORMAT};
use crate::fmt::{Sgr, write_divider};
use chrono::{DateTime, Offset, TimeZone};
use chrono_tz::Tz;
use std::backtrace::Backtrace;
use std::env;
use std::fmt::{Display, Write as _};
use std::io::{self, Write};
use std::sync::LazyLock;

/// The named local zone, so `%Z` prints `CET` instead of `+01:00`.
static LOCAL_ZONE: LazyLock<Option<Tz>> = LazyLock::new(resolve_local_zone);

/// Writes SGR codes only when colors are on, so the plain layout stays identical.
struct Styled<'w, W: Write + ?Sized> {
    out: &'w mut W,
    colors: bool,
}

impl<W: Write + ?Sized> Styled<'_, W> {
    fn set(&mut self, code: &Sgr) -> io::Result<()> {
        if self.colors {
            self.out.write_all(code.as_str().as_bytes())?;
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }
}

/// Renders `record` into `out`.
///
/// # Errors
/// I/O errors from `out`. Output written before the failure stays written.
pub fn render<W: Write + ?Sized>(
    out: &mut W,
    record: &Record<'_>,
    config: &ConsoleConfig,
    terminal: TerminalState,
) -> Result<(), crate::Error> {
    let colors = config.color.enabled(terminal.is_terminal);
    let mut styled = Styled { out, colors };

    styled.set(&Sgr::FG_BRIGHT_BLACK)?;
    styled.text(&format_timestamp(record, &config.timestamp_format))?;
    styled.text(" ")?;
    styled.set(&Sgr::RESET)?;

    styled.set(&record.level.tag_style())?;
    styled.text(record.level.tag())?;
    styled.set(&Sgr::RESET)?;

    styled.set(&Sgr::FG_BRIGHT_BLUE)?;
    styled.text(&format!(" {} ", record.call_site))?;
    styled.set(&Sgr::RESET)?;

    styled.text(record.message)?;
    styled.text("\n")?;

    if record.level.shows_detail() {
        styled.set(&Sgr::FG_BRIGHT_MAGENTA)?;
        styled.text(&detail_block(record))?;
        styled.set(&Sgr::RESET)?;
    }

    for extra in record.extras {
        styled.text(&format!("{extra:#?}\n"))?;
    }

    write_divider(styled.out, terminal.width, config.divider_glyph, colors)?;
    Ok(())
}

/// Error text when one was given, else the current stack trace. Always newline-terminated.
fn detail_block(record: &Record<'_>) -> String {
    let mut detail = match record.error {
        Some(error) => error.to_string(),
        None => Backtrace::force_capture().to_string(),
    };
    if !detail.ends_with('\n') {
        detail.push('\n');
    }
    detail
}

/// `TZ` first, like libc, then the system zone. A `TZ` that is not an IANA name
/// leaves formatting to chrono's `Local`.
fn resolve_local_zone() -> Option<Tz> {
    match env::var("TZ") {
        Ok(name) => name.trim_start_matches(':').parse().ok(),
        Err(_) => iana_time_zone::get_timezone().ok()?.parse().ok(),
    }
}

fn format_timestamp(record: &Record<'_>, pattern: &str) -> String {
    let timestamp = &record.timestamp;
    match *LOCAL_ZONE {
        // Only when the zone agrees with `Local`, so the wall-clock time never shifts.
        Some(zone)
            if zone.offset_from_utc_datetime(&timestamp.naive_utc()).fix()
                == *timestamp.offset() =>
        {
            format_in(&timestamp.with_timezone(&zone), pattern)
        }
        _ => format_in(timestamp, pattern),
    }
}

/// An invalid strftime pattern falls back to the default one instead of failing the record.
fn format_in<Z: TimeZone>(timestamp: &DateTime<Z>, pattern: &str) -> String
where
    Z::Offset: Display,
{
    let mut formatted = String::new();
    if write!(formatted, "{}", timestamp.format(pattern)).is_err() {
        formatted.clear();
        let _ = write!(formatted, "{}", timestamp.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    formatted
}
