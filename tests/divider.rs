use mlog::fmt::{DIVIDER_GLYPH, divider_line, write_divider};

#[test]
fn divider_line_is_exactly_width_glyphs() {
    let line = divider_line(80, DIVIDER_GLYPH);
    assert_eq!(line.chars().count(), 80);
    assert!(line.chars().all(|c| c == '─'));
    assert!(divider_line(0, '=').is_empty());
}

#[test]
fn divider_is_faint_and_reset() {
    let mut out = Vec::new();
    write_divider(&mut out, Some(4), '─', true).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\x1b[90m────\n\x1b[0m");
}

#[test]
fn divider_without_colors_is_plain() {
    let mut out = Vec::new();
    write_divider(&mut out, Some(3), '=', false).unwrap();
    assert_eq!(out, b"===\n");
}

#[test]
fn divider_without_width_writes_nothing() {
    let mut out = Vec::new();
    write_divider(&mut out, None, '─', true).unwrap();
    assert!(out.is_empty());
}
