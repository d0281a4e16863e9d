//! Full-width horizontal rule printed after each record.
//!
//! The rule is sized to the terminal so it never wraps. When stdout is not a
//! terminal (piped, redirected to a file) nothing is written at all.

use super::sgr::Sgr;
use std::io::{self, IsTerminal, Write};
use terminal_size::{Width, terminal_size_of};

/// Box-drawing light horizontal.
pub const DIVIDER_GLYPH: char = '─';

/// `width` copies of `glyph`.
#[must_use]
pub fn divider_line(width: usize, glyph: char) -> String {
    std::iter::repeat_n(glyph, width).collect()
}

/// Column count of stdout, or `None` when stdout is not a terminal or its size
/// can't be queried.
#[must_use]
pub fn terminal_width() -> Option<u16> {
    let stdout = io::stdout();
    if !stdout.is_terminal() {
        return None;
    }
    terminal_size_of(&stdout).map(|(Width(w), _)| w)
}

/// Writes a faint rule of `width` glyphs followed by a newline and a reset.
/// `None` writes zero bytes.
///
/// # Errors
/// I/O errors from `out`.
pub fn write_divider<W: Write + ?Sized>(
    out: &mut W,
    width: Option<u16>,
    glyph: char,
    colors: bool,
) -> io::Result<()> {
    let Some(width) = width else {
        return Ok(());
    };

    let line = divider_line(usize::from(width), glyph);
    if colors {
        write!(out, "{}{line}\n{}", Sgr::FG_BRIGHT_BLACK, Sgr::RESET)
    } else {
        writeln!(out, "{line}")
    }
}

/// Prints the divider to stdout if stdout is a terminal of known width.
pub fn print_divider() {
    let width = terminal_width();
    let mut stdout = io::stdout().lock();
    let _ = write_divider(&mut stdout, width, DIVIDER_GLYPH, true);
    let _ = stdout.flush();
}
