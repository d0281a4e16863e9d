//! SGR (Select Graphic Rendition) codes: every style the renderer emits is an
//! `ESC[<params>m` string held in an [`Sgr`].

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

/// Which color slot an extended or true-color code targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Text color (SGR parameter 38).
    Foreground,
    /// Cell background (SGR parameter 48).
    Background,
}

impl Layer {
    const fn param(self) -> u8 {
        match self {
            Self::Foreground => 38,
            Self::Background => 48,
        }
    }
}

/// One style code. Named codes are `'static`; palette and RGB codes are built at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sgr(Cow<'static, str>);

macro_rules! sgr_codes {
    ($($name:ident = $code:literal;)*) => {
        impl Sgr {
            $(
                pub const $name: Self = Self(Cow::Borrowed(concat!("\x1b[", $code, "m")));
            )*
        }
    };
}

sgr_codes! {
    RESET = "0";
    BOLD = "1";
    FAINT = "2";
    ITALIC = "3";
    UNDERLINE = "4";
    SLOW_BLINK = "5";
    RAPID_BLINK = "6";
    INVERT = "7";
    CONCEAL = "8";
    CROSSED_OUT = "9";
    DOUBLY_UNDERLINED = "21";
    NO_BOLD_OR_FAINT = "22";
    NO_ITALIC = "23";
    NO_UNDERLINE = "24";
    NO_BLINK = "25";
    NO_INVERT = "27";
    NO_CONCEAL = "28";
    NO_CROSSED_OUT = "29";
    OVERLINE = "53";
    NO_OVERLINE = "55";
    UNDERLINE_COLOR_DEFAULT = "59";

    FG_BLACK = "30";
    FG_RED = "31";
    FG_GREEN = "32";
    FG_YELLOW = "33";
    FG_BLUE = "34";
    FG_MAGENTA = "35";
    FG_CYAN = "36";
    FG_WHITE = "37";
    FG_DEFAULT = "39";

    FG_BRIGHT_BLACK = "90";
    FG_BRIGHT_RED = "91";
    FG_BRIGHT_GREEN = "92";
    FG_BRIGHT_YELLOW = "93";
    FG_BRIGHT_BLUE = "94";
    FG_BRIGHT_MAGENTA = "95";
    FG_BRIGHT_CYAN = "96";
    FG_BRIGHT_WHITE = "97";

    BG_BLACK = "40";
    BG_RED = "41";
    BG_GREEN = "42";
    BG_YELLOW = "43";
    BG_BLUE = "44";
    BG_MAGENTA = "45";
    BG_CYAN = "46";
    BG_WHITE = "47";
    BG_DEFAULT = "49";

    BG_BRIGHT_BLACK = "100";
    BG_BRIGHT_RED = "101";
    BG_BRIGHT_GREEN = "102";
    BG_BRIGHT_YELLOW = "103";
    BG_BRIGHT_BLUE = "104";
    BG_BRIGHT_MAGENTA = "105";
    BG_BRIGHT_CYAN = "106";
    BG_BRIGHT_WHITE = "107";
}

impl Sgr {
    /// One of the 256 palette colors: `ESC[38;5;<index>m` or `ESC[48;5;<index>m`.
    #[must_use]
    pub fn extended(layer: Layer, index: u8) -> Self {
        Self(Cow::Owned(format!("\x1b[{};5;{index}m", layer.param())))
    }

    /// An exact 24-bit color: `ESC[38;2;R;G;Bm` or `ESC[48;2;R;G;Bm`.
    #[must_use]
    pub fn true_color(layer: Layer, r: u8, g: u8, b: u8) -> Self {
        Self(Cow::Owned(format!("\x1b[{};2;{r};{g};{b}m", layer.param())))
    }

    /// The raw escape sequence.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sgr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Writes `code` to stdout. A failed write is dropped.
pub fn apply_style(code: &Sgr) {
    let mut stdout = io::stdout().lock();
    let _ = stdout.write_all(code.as_str().as_bytes());
    let _ = stdout.flush();
}

/// Wraps `text` in `code` and a trailing reset.
#[must_use]
pub fn paint(text: &str, code: &Sgr) -> String {
    let reset = Sgr::RESET;
    format!("{code}{text}{reset}")
}
