// ABOUTME: Configuration management module for calculator tables and application settings
// ABOUTME: Handles environment configs and nutrition program intelligence parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Macrotrack
//!
//! - **Environment**: application configuration from environment variables
//! - **Intelligence**: calculator lookup tables with validation and env overrides

/// Environment and application configuration
pub mod environment;
/// Nutrition program calculator configuration
pub mod intelligence;
