// ABOUTME: Nutrition intelligence: program calculation, macro percentages, and intake progress
// ABOUTME: Pure, synchronous computations over profile and food log records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! - `nutrition_calculator` - BMR, maintenance and goal calories, macro grams
//! - `macro_distribution` - percentage conversion and slider redistribution
//! - `consumption` - food log progress against daily targets

/// Daily intake progress against targets
pub mod consumption;
/// Percentage conversion and redistribution
pub mod macro_distribution;
/// Nutrition program calculator
pub mod nutrition_calculator;

pub use consumption::{
    per_meal_targets, progress_against, progress_for_totals, DailyProgress, NutrientProgress,
};
pub use macro_distribution::{grams_to_percentages, percentages_of_total, redistribute};
pub use nutrition_calculator::{
    calculate_bmr, calculate_goal_tdee, calculate_maintenance_tdee, calculate_nutritional_program,
    distribute_macros, normalize_percentages, resolve_diet_distribution, resolve_distribution,
    try_calculate_nutritional_program,
};
