// ABOUTME: Nutrition program calculation using Mifflin-St Jeor BMR and activity multipliers
// ABOUTME: Maintenance and goal calories, macro gram distribution, and percentage normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Program Calculator
//!
//! Pure, synchronous pipeline from a [`ProfileInput`] to a [`NutritionalProgram`]:
//!
//! ```text
//! profile -> BMR -> maintenance kcal -> goal kcal -> macro grams -> macro percentages
//! ```
//!
//! Missing biometrics never produce `NaN` or an error in the pipeline itself:
//! BMR collapses to `0`, every later stage short-circuits to `0`, and the
//! resulting program is tagged [`ProgramStatus::InsufficientData`]. Callers that
//! prefer a `Result` use [`try_calculate_nutritional_program`].
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use super::macro_distribution::percentages_of_total;
use crate::config::intelligence::{BmrConfig, NutritionConfig};
use macrotrack_core::constants::energy;
use macrotrack_core::errors::{AppError, AppResult};
use macrotrack_core::models::{
    CalculatedMacros, Macro, MacroGrams, MacroPercentages, MacroSplit, NutritionalProgram,
    ProfileInput, ProgramStatus,
};
use serde_json::json;
use tracing::{debug, warn};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// Returns `0.0` when weight, height or age is zero, negative or not finite.
/// This is the "cannot compute" value every downstream stage checks for.
#[must_use]
pub fn calculate_bmr(profile: &ProfileInput, config: &BmrConfig) -> f64 {
    let missing = profile.missing_biometrics();
    if !missing.is_empty() {
        warn!(
            missing = ?missing,
            "Cannot calculate BMR: weight, height and age are all required"
        );
        return 0.0;
    }

    let weight_component = config.msj_weight_coef * profile.current_weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age_years);

    weight_component + height_component + age_component + config.constant_for(profile.sex)
}

/// Calculate maintenance Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x (activity factor + occupation offset), rounded to whole kcal.
///
/// A missing activity level uses the sedentary factor and a missing
/// occupation adds nothing. Returns `0` when BMR is not positive.
#[must_use]
pub fn calculate_maintenance_tdee(profile: &ProfileInput, config: &NutritionConfig) -> u32 {
    let bmr = calculate_bmr(profile, &config.bmr);
    if bmr <= 0.0 {
        return 0;
    }

    let multiplier = config.activity_factors.factor_for(profile.activity_level)
        + config.occupation_offsets.offset_for(profile.occupation);
    let tdee = round_kcal(bmr * multiplier);

    debug!(bmr, multiplier, tdee, "Calculated maintenance TDEE");
    tdee
}

/// Calculate goal calories by scaling maintenance with the goal multiplier
///
/// A missing goal keeps maintenance calories. Returns `0` when maintenance is `0`.
#[must_use]
pub fn calculate_goal_tdee(profile: &ProfileInput, config: &NutritionConfig) -> u32 {
    goal_calories(calculate_maintenance_tdee(profile, config), profile, config)
}

fn goal_calories(maintenance: u32, profile: &ProfileInput, config: &NutritionConfig) -> u32 {
    if maintenance == 0 {
        return 0;
    }

    let multiplier = config
        .goal_adjustments
        .multiplier_for(profile.nutritional_goal);
    round_kcal(f64::from(maintenance) * multiplier)
}

/// Split used for the maintenance macros: the diet type's, else balanced
#[must_use]
pub fn resolve_diet_distribution(profile: &ProfileInput, config: &NutritionConfig) -> MacroSplit {
    profile.diet_type.map_or(MacroSplit::BALANCED, |diet| {
        config.diet_distributions.split_for(diet)
    })
}

/// Split used for the goal macros
///
/// Precedence: the goal's own split, then the diet type's split, then the
/// balanced 30/30/40 default.
#[must_use]
pub fn resolve_distribution(profile: &ProfileInput, config: &NutritionConfig) -> MacroSplit {
    profile
        .nutritional_goal
        .and_then(|goal| config.goal_adjustments.adjustment_for(goal).distribution)
        .unwrap_or_else(|| resolve_diet_distribution(profile, config))
}

/// Convert a calorie total into whole grams of each macro
///
/// `grams = round(calories x share / kcal_per_gram)` with 4/9/4 kcal per gram.
#[must_use]
pub fn distribute_macros(calories: u32, split: &MacroSplit) -> MacroGrams {
    if calories == 0 {
        return MacroGrams::default();
    }

    let kcal = f64::from(calories);
    let grams =
        |nutrient: Macro| round_grams(kcal * split.share(nutrient) / nutrient.kcal_per_gram());
    MacroGrams {
        protein_grams: grams(Macro::Protein),
        fat_grams: grams(Macro::Fat),
        carb_grams: grams(Macro::Carbs),
    }
}

/// Convert macro grams into whole percentages of `total_calories` summing to 100
///
/// Each percentage is rounded independently, then carbs absorbs the whole
/// residual (`100 - sum`). Protein and fat are never adjusted, which keeps
/// displayed values stable across recalculations. A zero calorie total is
/// treated as 1 kcal.
#[must_use]
pub fn normalize_percentages(
    protein_g: u32,
    fat_g: u32,
    carb_g: u32,
    total_calories: u32,
) -> MacroPercentages {
    percentages_of_total(
        f64::from(protein_g) * energy::PROTEIN_KCAL_PER_GRAM,
        f64::from(fat_g) * energy::FAT_KCAL_PER_GRAM,
        f64::from(carb_g) * energy::CARB_KCAL_PER_GRAM,
        f64::from(total_calories.max(1)),
    )
}

/// Calculate the complete nutrition program for a profile
///
/// Maintenance macros use the diet type's split; goal macros use the goal's
/// split when it has one. The percentage distribution describes the goal
/// macros. Identical inputs always give identical outputs.
#[must_use]
pub fn calculate_nutritional_program(
    profile: &ProfileInput,
    config: &NutritionConfig,
) -> NutritionalProgram {
    let maintenance_calories = calculate_maintenance_tdee(profile, config);
    let maintenance = CalculatedMacros::new(
        maintenance_calories,
        distribute_macros(
            maintenance_calories,
            &resolve_diet_distribution(profile, config),
        ),
    );

    let goal_kcal = goal_calories(maintenance_calories, profile, config);
    let goal = CalculatedMacros::new(
        goal_kcal,
        distribute_macros(goal_kcal, &resolve_distribution(profile, config)),
    );

    let macro_distribution_percent = normalize_percentages(
        goal.protein_grams,
        goal.fat_grams,
        goal.carb_grams,
        goal.calories,
    );

    let status = if maintenance_calories == 0 {
        ProgramStatus::InsufficientData
    } else {
        ProgramStatus::Complete
    };

    debug!(
        ?status,
        maintenance_kcal = maintenance.calories,
        goal_kcal = goal.calories,
        "Calculated nutritional program"
    );

    NutritionalProgram {
        status,
        maintenance,
        goal,
        macro_distribution_percent,
    }
}

/// Calculate the program, failing instead of returning zero placeholders
///
/// # Errors
///
/// Returns `INSUFFICIENT_DATA` when no positive BMR can be computed. The
/// details carry a `reason` (`missing_biometrics` or `non_positive_bmr`) and
/// the unusable biometric fields.
pub fn try_calculate_nutritional_program(
    profile: &ProfileInput,
    config: &NutritionConfig,
) -> AppResult<NutritionalProgram> {
    let program = calculate_nutritional_program(profile, config);
    if program.is_complete() {
        return Ok(program);
    }

    let missing = profile.missing_biometrics();
    if missing.is_empty() {
        return Err(AppError::insufficient_data(
            "Weight, height and age give a non-positive BMR",
        )
        .with_details(json!({ "reason": "non_positive_bmr", "missing_fields": missing })));
    }
    Err(AppError::insufficient_data(
        "Weight, height and age are needed to calculate a nutrition program",
    )
    .with_details(json!({ "reason": "missing_biometrics", "missing_fields": missing })))
}

fn round_kcal(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

fn round_grams(value: f64) -> u32 {
    round_kcal(value)
}
