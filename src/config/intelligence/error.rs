// ABOUTME: Configuration error types for nutrition program configuration validation
// ABOUTME: Defines error variants for invalid ranges, unbalanced splits, and env parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for program configuration validation.

use macrotrack_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Values in the wrong order (e.g., activity factors not ascending)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Shares don't sum to the required total (e.g., split not 1.0)
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
