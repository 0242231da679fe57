// ABOUTME: Tests for environment-driven application configuration
// ABOUTME: Covers log level parsing, settings path override, and meals-per-day bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrotrack::config::environment::{AppConfig, LogLevel};
use macrotrack::logging::LoggingConfig;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

mod common;

fn clear_env() {
    for key in [
        "MACROTRACK_SETTINGS_PATH",
        "MACROTRACK_LOG_LEVEL",
        "MACROTRACK_MEALS_PER_DAY",
    ] {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("ERROR"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Warn);
    assert_eq!(LogLevel::Warn.to_string(), "warn");
}

#[test]
#[serial]
fn test_defaults_without_env() {
    common::init_test_logging();
    clear_env();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.default_meals_per_day, 3);
    assert!(config.settings_path.ends_with("macrotrack/settings.json"));
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var("MACROTRACK_SETTINGS_PATH", "/tmp/macrotrack-test/settings.json");
    env::set_var("MACROTRACK_LOG_LEVEL", "debug");
    env::set_var("MACROTRACK_MEALS_PER_DAY", "5");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(
        config.settings_path,
        PathBuf::from("/tmp/macrotrack-test/settings.json")
    );
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.default_meals_per_day, 5);
}

#[test]
#[serial]
fn test_log_level_drives_logging_config() {
    clear_env();
    env::remove_var("RUST_LOG");
    env::set_var("MACROTRACK_LOG_LEVEL", "error");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    let logging = LoggingConfig::from_env(config.log_level);
    assert_eq!(logging.level, "error");
}

#[test]
#[serial]
fn test_meals_per_day_out_of_range() {
    clear_env();
    env::set_var("MACROTRACK_MEALS_PER_DAY", "9");
    let result = AppConfig::from_env();
    env::set_var("MACROTRACK_MEALS_PER_DAY", "three");
    let unparsed = AppConfig::from_env();
    clear_env();

    assert!(result.is_err());
    assert!(unparsed.is_err());
}
