// ABOUTME: Main library entry point for the Macrotrack nutrition calculator
// ABOUTME: Program calculation, questionnaire, intake progress, and settings persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macrotrack
//!
//! Nutrition tracking core: turns a short profile questionnaire into daily
//! calorie and macro targets, and compares logged food against them.
//!
//! ## Architecture
//!
//! - **Intelligence**: BMR/TDEE calculation, macro percentages, intake progress
//! - **Questionnaire**: multi-step answer collection and validation
//! - **Settings**: durable macro targets behind an async store trait
//! - **Config**: calculator tables and environment configuration
//!
//! Errors, constants and data models live in the `macrotrack-core` crate and
//! are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use macrotrack::config::intelligence::IntelligenceConfig;
//! use macrotrack::intelligence::calculate_nutritional_program;
//! use macrotrack::models::{ActivityLevel, ProfileInput, Sex};
//!
//! let profile = ProfileInput::new(Sex::Female, 34, 168.0, 62.0)
//!     .with_activity_level(ActivityLevel::LightlyActive);
//! let program = calculate_nutritional_program(
//!     &profile,
//!     &IntelligenceConfig::global().nutrition,
//! );
//! println!("Daily target: {} kcal", program.goal.calories);
//! ```

/// Configuration management
pub mod config;

/// Nutrition program calculation and intake analysis
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Multi-step nutrition questionnaire
pub mod questionnaire;

/// User settings persistence
pub mod settings;

pub use macrotrack_core::{constants, errors, models};
