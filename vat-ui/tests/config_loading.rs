//! Integration tests that load configuration from on-disk fixture files.
//!
//! These complement the unit tests inside config.rs (which parse inline
//! strings) by exercising the read-from-disk path and CLI-style overrides.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use vat_core::{AmountField, DecimalSeparator, Key, VatRate};
use vat_ui::config::{AppConfig, ConfigError, ConfigOverrides, WindowConfig};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_full_fixture() {
    let config = AppConfig::load(&fixture_path("full.toml")).expect("fixture file should load");

    assert_eq!(config.rate, VatRate::Eight);
    assert_eq!(config.active, AmountField::Net);
    assert_eq!(config.separator, DecimalSeparator::Point);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.log_file, Some(PathBuf::from("vat.log")));
    assert_eq!(
        config.window,
        WindowConfig {
            width: 400.0,
            height: 720.0,
        }
    );
}

#[test]
fn test_invalid_separator_reports_file_path() {
    let path = fixture_path("invalid_separator.toml");

    let error = AppConfig::load(&path).unwrap_err();

    assert!(matches!(error, ConfigError::Parse { .. }));
    assert!(error.to_string().contains("invalid_separator.toml"));
}

#[test]
fn test_no_config_file_uses_startup_defaults() {
    let config = AppConfig::load_or_default(None).unwrap();

    assert_eq!(config.rate, VatRate::TwentyThree);
    assert_eq!(config.active, AmountField::Gross);
    assert_eq!(config.separator, DecimalSeparator::Comma);
    assert_eq!(config.log_file, None);
}

#[test]
fn test_cli_overrides_win_over_file() {
    let config = AppConfig::load(&fixture_path("full.toml"))
        .unwrap()
        .with_overrides(ConfigOverrides {
            rate: Some(VatRate::TwentyThree),
            log_file: Some(PathBuf::from("other.log")),
            ..ConfigOverrides::default()
        });

    assert_eq!(config.rate, VatRate::TwentyThree);
    assert_eq!(config.active, AmountField::Net);
    assert_eq!(config.log_file, Some(PathBuf::from("other.log")));
}

#[test]
fn test_configured_converter_uses_file_settings() {
    let config = AppConfig::load(&fixture_path("full.toml")).unwrap();
    let mut converter = config.converter();

    for key in [Key::Digit('1'), Key::Digit('0'), Key::Digit('0')] {
        converter.press(key).unwrap();
    }

    assert_eq!(converter.text(AmountField::Net), "100");
    assert_eq!(converter.text(AmountField::Gross), "108.00");
    assert_eq!(converter.text(AmountField::Vat), "8.00");
}
