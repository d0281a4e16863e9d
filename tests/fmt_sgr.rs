use mlog::fmt::paint;
use mlog::{Layer, Sgr};

#[test]
fn named_codes_are_sgr_sequences() {
    assert_eq!(Sgr::RESET.as_str(), "\x1b[0m");
    assert_eq!(Sgr::BOLD.as_str(), "\x1b[1m");
    assert_eq!(Sgr::FAINT.as_str(), "\x1b[2m");
    assert_eq!(Sgr::DOUBLY_UNDERLINED.as_str(), "\x1b[21m");
    assert_eq!(Sgr::FG_RED.as_str(), "\x1b[31m");
    assert_eq!(Sgr::FG_DEFAULT.as_str(), "\x1b[39m");
    assert_eq!(Sgr::FG_BRIGHT_BLACK.as_str(), "\x1b[90m");
    assert_eq!(Sgr::BG_WHITE.as_str(), "\x1b[47m");
    assert_eq!(Sgr::BG_BRIGHT_WHITE.as_str(), "\x1b[107m");
}

#[test]
fn extended_palette_codes() {
    assert_eq!(Sgr::extended(Layer::Foreground, 0).as_str(), "\x1b[38;5;0m");
    assert_eq!(Sgr::extended(Layer::Foreground, 208).as_str(), "\x1b[38;5;208m");
    assert_eq!(Sgr::extended(Layer::Background, 255).as_str(), "\x1b[48;5;255m");
}

#[test]
fn true_color_codes() {
    assert_eq!(
        Sgr::true_color(Layer::Foreground, 10, 20, 30).as_str(),
        "\x1b[38;2;10;20;30m"
    );
    assert_eq!(
        Sgr::true_color(Layer::Background, 255, 0, 128).as_str(),
        "\x1b[48;2;255;0;128m"
    );
}

#[test]
fn display_matches_raw_code() {
    assert_eq!(Sgr::FG_BRIGHT_MAGENTA.to_string(), "\x1b[95m");
}

#[test]
fn paint_wraps_with_reset() {
    assert_eq!(paint("hi", &Sgr::FG_GREEN), "\x1b[32mhi\x1b[0m");
    assert_eq!(
        paint("hi", &Sgr::extended(Layer::Background, 4)),
        "\x1b[48;5;4mhi\x1b[0m"
    );
}
