// ABOUTME: Logging configuration and structured logging setup for the command-line tool
// ABOUTME: Builds a tracing-subscriber registry with env filtering and json/pretty/compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use crate::config::environment::LogLevel;
use anyhow::Result;
use macrotrack_core::constants::service_names;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error, or a full `EnvFilter` string)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span enter/exit events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log collection
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            Some("pretty") => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_name: service_names::MACROTRACK_CLI.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// `RUST_LOG` wins over `default_level`; `LOG_FORMAT` picks the output
    /// format; `ENVIRONMENT=production` turns on locations and spans.
    #[must_use]
    pub fn from_env(default_level: LogLevel) -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

        let format = LogFormat::from_env_value(env::var("LOG_FORMAT").ok().as_deref());
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: service_names::MACROTRACK_CLI.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Use an explicit level instead of the environment's
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level.to_string();
        self
    }

    /// Build the filter for this configuration
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("warn"))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()?;
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_env_value(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some("pretty")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_env_value(None), LogFormat::Compact);
    }

    #[test]
    #[serial]
    fn test_default_level_used_without_rust_log() {
        env::remove_var("RUST_LOG");
        let config = LoggingConfig::from_env(LogLevel::Error);
        assert_eq!(config.level, "error");
    }

    #[test]
    fn test_with_level_overrides() {
        let config = LoggingConfig::default().with_level(LogLevel::Debug);
        assert_eq!(config.level, "debug");
    }
}
