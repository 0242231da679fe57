// ABOUTME: Environment configuration for the Macrotrack command-line application
// ABOUTME: Resolves settings storage location, log level, and default meal count from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based application configuration

use anyhow::{Context, Result};
use macrotrack_core::constants::limits;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Directory created under the platform config dir
const APP_DIR_NAME: &str = "macrotrack";
/// Settings file name inside the app directory
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Application configuration resolved from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the JSON user settings file
    pub settings_path: PathBuf,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Meals per day used when settings do not specify one
    pub default_meals_per_day: u8,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `MACROTRACK_SETTINGS_PATH`: settings file (default: `<config dir>/macrotrack/settings.json`)
    /// - `MACROTRACK_LOG_LEVEL`: error, warn, info, debug, trace
    /// - `MACROTRACK_MEALS_PER_DAY`: default meal count (1-8)
    ///
    /// # Errors
    ///
    /// Returns an error if `MACROTRACK_MEALS_PER_DAY` is not a number in range
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let settings_path = env::var("MACROTRACK_SETTINGS_PATH")
            .map_or_else(|_| default_settings_path(), PathBuf::from);

        let log_level = LogLevel::from_str_or_default(&env_var_or("MACROTRACK_LOG_LEVEL", "warn"));

        let default_meals_per_day: u8 = env_var_or(
            "MACROTRACK_MEALS_PER_DAY",
            &limits::DEFAULT_MEALS_PER_DAY.to_string(),
        )
        .parse()
        .context("Invalid MACROTRACK_MEALS_PER_DAY value")?;
        if !(limits::MIN_MEALS_PER_DAY..=limits::MAX_MEALS_PER_DAY)
            .contains(&default_meals_per_day)
        {
            anyhow::bail!(
                "MACROTRACK_MEALS_PER_DAY must be between {} and {}",
                limits::MIN_MEALS_PER_DAY,
                limits::MAX_MEALS_PER_DAY
            );
        }

        let config = Self {
            settings_path,
            log_level,
            default_meals_per_day,
        };
        info!(
            settings_path = %config.settings_path.display(),
            log_level = %config.log_level,
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Platform config dir, falling back to the working directory
fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(SETTINGS_FILE_NAME)
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
