//! Tests for log level functionality.

use mlog::{Level, Sgr};

#[test]
fn level_ordering_is_ascending_verbosity() {
    assert!(Level::Fatal < Level::Error);
    assert!(Level::Error < Level::Warning);
    assert!(Level::Warning < Level::Info);
    assert!(Level::Info < Level::Debug);
}

#[test]
fn level_tags() {
    let tags: Vec<_> = Level::all().iter().map(|l| l.tag()).collect();
    assert_eq!(tags, ["FATAL", "ERROR", "WARNING", "INFO", "DEBUG"]);
}

#[test]
fn level_display() {
    assert_eq!(Level::Fatal.to_string(), "fatal");
    assert_eq!(Level::Warning.to_string(), "warning");
    assert_eq!(Level::Debug.to_string(), "debug");
}

#[test]
fn level_tag_colors() {
    assert_eq!(Level::Fatal.tag_style(), Sgr::FG_BRIGHT_RED);
    assert_eq!(Level::Error.tag_style(), Sgr::FG_BRIGHT_RED);
    assert_eq!(Level::Warning.tag_style(), Sgr::FG_BRIGHT_YELLOW);
    assert_eq!(Level::Info.tag_style(), Sgr::FG_BRIGHT_GREEN);
    assert_eq!(Level::Debug.tag_style(), Sgr::FG_BRIGHT_CYAN);
}

#[test]
fn only_failure_levels_show_detail() {
    assert!(Level::Fatal.shows_detail());
    assert!(Level::Error.shows_detail());
    assert!(Level::Warning.shows_detail());
    assert!(!Level::Info.shows_detail());
    assert!(!Level::Debug.shows_detail());
}

#[test]
fn level_from_str() {
    assert_eq!("FATAL".parse::<Level>().unwrap(), Level::Fatal);
    assert_eq!("critical".parse::<Level>().unwrap(), Level::Fatal);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("Warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
}

#[test]
fn level_from_str_invalid() {
    let err = "trace".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'trace'");
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
