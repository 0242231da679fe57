// ABOUTME: Core data models for profiles, nutrition programs, and food logs
// ABOUTME: Re-exports profile enums, program records, and meal tracking types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - **profile**: user inputs to the program calculator
//! - **program**: calculator outputs (macros, percentages, status)
//! - **nutrition**: per-meal food log and daily macro targets

/// Profile input enums and value object
pub mod profile;

/// Calculator output records
pub mod program;

/// Food log and macro target records
pub mod nutrition;

pub use nutrition::{DailyLog, FoodEntry, MacroTargets, MealType, NutrientTotals};
pub use profile::{ActivityLevel, DietType, NutritionalGoal, Occupation, ProfileInput, Sex};
pub use program::{
    CalculatedMacros, Macro, MacroGrams, MacroPercentages, MacroSplit, NutritionalProgram,
    ProgramStatus,
};
