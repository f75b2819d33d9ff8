//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use starfield::config::AppConfig;
use serial_test::serial;
use std::path::PathBuf;

fn temp_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("starfield-config-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SF_WINDOW__TITLE", "Test From Env");
    std::env::set_var("SF_STARS__COUNT", "250");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("SF_WINDOW__TITLE");
    std::env::remove_var("SF_STARS__COUNT");

    assert_eq!(config.window.title, "Test From Env");
    assert_eq!(config.stars.count, 250);
}

#[test]
#[serial]
fn test_default_file_loads() {
    let config = AppConfig::load().unwrap();
    assert_eq!(config.stars.near, 0.1);
    assert_eq!(config.stars.far, 10.0);
    assert_eq!(config.timing.max_framerate, 144);
    assert!(config.star_config().validate().is_ok());
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = temp_config_dir("user");
    std::fs::write(dir.join("default.toml"), "[stars]\ncount = 100\nspeed = 1.0\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[stars]\ncount = 42\nseed = 7\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.stars.count, 42);
    assert_eq!(config.stars.speed, 1.0);
    assert_eq!(config.stars.seed, Some(7));
    // Untouched keys keep built-in defaults
    assert_eq!(config.stars.radius, 30.0);
}

#[test]
#[serial]
fn test_partial_section_keeps_defaults() {
    let dir = temp_config_dir("partial");
    std::fs::write(dir.join("default.toml"), "[window]\nwidth = 640\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.window.width, 640);
    assert_eq!(config.window.height, 1080);
    assert_eq!(config.star_config().viewport.x, 640.0);
}

#[test]
#[serial]
fn test_invalid_value_is_error() {
    let dir = temp_config_dir("invalid");
    std::fs::write(dir.join("default.toml"), "[stars]\ncount = \"many\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_degenerate_values_fail_star_validation() {
    std::env::set_var("SF_STARS__NEAR", "20.0");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("SF_STARS__NEAR");

    assert!(config.star_config().validate().is_err());
}
