//! Tests for console settings.

use mlog::{ColorMode, Console, ConsoleConfig};

#[test]
fn defaults_match_stock_behavior() {
    let config = ConsoleConfig::default();
    assert_eq!(config.color, ColorMode::Always);
    assert_eq!(config.timestamp_format, "%d %b %Y %H:%M:%S %Z");
    assert_eq!(config.divider_glyph, '─');
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(ConsoleConfig::from_toml("").unwrap(), ConsoleConfig::default());
}

#[test]
fn toml_overrides_fields() {
    let config = ConsoleConfig::from_toml(
        r#"
color = "auto"
timestamp_format = "%H:%M:%S"
divider_glyph = "="
"#,
    )
    .unwrap();
    assert_eq!(config.color, ColorMode::Auto);
    assert_eq!(config.timestamp_format, "%H:%M:%S");
    assert_eq!(config.divider_glyph, '=');
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = ConsoleConfig::from_toml(r#"color = "never""#).unwrap();
    assert_eq!(config.color, ColorMode::Never);
    assert_eq!(config.timestamp_format, "%d %b %Y %H:%M:%S %Z");
    assert_eq!(config.divider_glyph, '─');
}

#[test]
fn unknown_color_mode_is_a_parse_error() {
    let err = ConsoleConfig::from_toml(r#"color = "sometimes""#).unwrap_err();
    assert!(matches!(err, mlog::Error::ConfigParse(_)));
    assert!(err.to_string().starts_with("parse error:"));
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Always.enabled(false));
    assert!(!ColorMode::Never.enabled(true));
    assert!(ColorMode::Auto.enabled(true));
    assert!(!ColorMode::Auto.enabled(false));
}

#[test]
fn builder_and_from_config_agree() {
    let config = ConsoleConfig {
        color: ColorMode::Never,
        timestamp_format: "%T".to_string(),
        divider_glyph: '-',
    };
    let built = Console::builder()
        .color(ColorMode::Never)
        .timestamp_format("%T")
        .divider_glyph('-')
        .build();
    assert_eq!(built, Console::from_config(config.clone()));
    assert_eq!(built.config(), &config);
}
