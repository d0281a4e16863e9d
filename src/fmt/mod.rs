//! Style encoding: SGR codes, RGB colors, and the terminal-width divider.

mod color;
mod divider;
mod sgr;

pub use color::Color;
pub use divider::{DIVIDER_GLYPH, divider_line, print_divider, terminal_width, write_divider};
pub use sgr::{Layer, Sgr, apply_style, paint};
