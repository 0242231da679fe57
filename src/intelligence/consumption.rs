// ABOUTME: Daily consumption progress against saved calorie and macro targets
// ABOUTME: Remaining amounts, percent of target, over-target flags, and per-meal target splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::macro_distribution::grams_to_percentages;
use macrotrack_core::constants::limits;
use macrotrack_core::errors::{AppError, AppResult};
use macrotrack_core::models::{DailyLog, MacroPercentages, MacroTargets, NutrientTotals};
use serde::{Deserialize, Serialize};

/// Progress for one nutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutrientProgress {
    /// Amount consumed so far
    pub consumed: f64,
    /// Daily target
    pub target: f64,
    /// Amount left before the target, never negative
    pub remaining: f64,
    /// Consumed as a whole percent of the target (0 when the target is 0)
    pub percent_of_target: u32,
    /// Whether consumption exceeds a non-zero target
    pub over_target: bool,
}

impl NutrientProgress {
    /// Compare a consumed amount with its target
    #[must_use]
    pub fn new(consumed: f64, target: u32) -> Self {
        let consumed = if consumed.is_finite() {
            consumed.max(0.0)
        } else {
            0.0
        };
        let target = f64::from(target);
        let percent_of_target = if target > 0.0 {
            (consumed / target * 100.0).round() as u32
        } else {
            0
        };

        Self {
            consumed,
            target,
            remaining: (target - consumed).max(0.0),
            percent_of_target,
            over_target: target > 0.0 && consumed > target,
        }
    }
}

/// Day-level progress for calories and each macro
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    /// Energy (kcal)
    pub calories: NutrientProgress,
    /// Protein (g)
    pub protein: NutrientProgress,
    /// Fat (g)
    pub fat: NutrientProgress,
    /// Carbohydrates (g)
    pub carbs: NutrientProgress,
    /// Share of consumed macro energy per macro
    pub consumed_percentages: MacroPercentages,
}

/// Compare consumed totals with daily targets
#[must_use]
pub fn progress_for_totals(totals: &NutrientTotals, targets: &MacroTargets) -> DailyProgress {
    DailyProgress {
        calories: NutrientProgress::new(totals.calories, targets.calories),
        protein: NutrientProgress::new(totals.protein_g, targets.protein_grams),
        fat: NutrientProgress::new(totals.fat_g, targets.fat_grams),
        carbs: NutrientProgress::new(totals.carbs_g, targets.carb_grams),
        consumed_percentages: grams_to_percentages(totals.protein_g, totals.fat_g, totals.carbs_g),
    }
}

/// Compare everything logged for a day with daily targets
#[must_use]
pub fn progress_against(log: &DailyLog, targets: &MacroTargets) -> DailyProgress {
    progress_for_totals(&log.totals(), targets)
}

/// Divide daily targets evenly across meals, rounding each value
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` if `meals_per_day` is outside 1-8
pub fn per_meal_targets(targets: &MacroTargets, meals_per_day: u8) -> AppResult<MacroTargets> {
    if !(limits::MIN_MEALS_PER_DAY..=limits::MAX_MEALS_PER_DAY).contains(&meals_per_day) {
        return Err(AppError::out_of_range(
            "meals_per_day",
            format!(
                "Meals per day must be between {} and {}",
                limits::MIN_MEALS_PER_DAY,
                limits::MAX_MEALS_PER_DAY
            ),
        ));
    }

    let meals = f64::from(meals_per_day);
    let share = |value: u32| (f64::from(value) / meals).round() as u32;
    Ok(MacroTargets {
        calories: share(targets.calories),
        protein_grams: share(targets.protein_grams),
        fat_grams: share(targets.fat_grams),
        carb_grams: share(targets.carb_grams),
    })
}
