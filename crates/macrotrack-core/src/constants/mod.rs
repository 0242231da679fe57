// ABOUTME: Application constants for energy conversion and input validation
// ABOUTME: Atwater factors, questionnaire bounds, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded constants shared across crates. Values that operators may tune
//! live in the configuration module of the main crate instead.

/// Atwater energy conversion factors (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
    /// Carbohydrate: 4 kcal/g
    pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
}

/// Percentage arithmetic
pub mod percent {
    /// Rounded macro percentages always sum to this value
    pub const TOTAL: i32 = 100;
    /// Tolerance when checking that a fractional split sums to 1.0
    pub const SPLIT_SUM_TOLERANCE: f64 = 0.001;
}

/// Questionnaire validation limits
pub mod limits {
    /// Minimum age accepted by the questionnaire (adults only)
    pub const MIN_AGE_YEARS: u32 = 18;
    /// Maximum age accepted by the questionnaire
    pub const MAX_AGE_YEARS: u32 = 100;
    /// Minimum height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum body fat percentage
    pub const MIN_BODY_FAT_PERCENT: f64 = 3.0;
    /// Maximum body fat percentage
    pub const MAX_BODY_FAT_PERCENT: f64 = 60.0;
    /// Minimum meals per day
    pub const MIN_MEALS_PER_DAY: u8 = 1;
    /// Maximum meals per day
    pub const MAX_MEALS_PER_DAY: u8 = 8;
    /// Default meals per day when the user has not chosen one
    pub const DEFAULT_MEALS_PER_DAY: u8 = 3;
    /// Maximum length of free-text preference answers
    pub const MAX_PREFERENCE_TEXT_LEN: usize = 500;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Command-line tool
    pub const MACROTRACK_CLI: &str = "macrotrack-cli";
}
