//! RGB colors for true-color codes, parsed from the `#RRGGBB` strings that
//! theme files and config values use.

use super::sgr::{Layer, Sgr};
use std::fmt;
use std::str::FromStr;

/// A 24-bit color, kept apart from raw `u8` triples so call sites read as colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `RRGGBB`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidColor`] when the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, crate::Error> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(crate::Error::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| crate::Error::InvalidColor(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// The true-color code for this color on `layer`.
    #[must_use]
    pub fn sgr(self, layer: Layer) -> Sgr {
        Sgr::true_color(layer, self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
