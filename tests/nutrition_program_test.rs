// ABOUTME: Integration tests for the nutrition program calculator pipeline
// ABOUTME: Covers BMR, TDEE, goal adjustment, macro distribution, and percentage normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Program calculator tests
//!
//! - Reference scenario end to end
//! - Zero propagation for missing biometrics
//! - Percentages always summing to 100 with carbs absorbing the residual
//! - Monotonic maintenance calories across activity levels
//! - Determinism

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrotrack::config::intelligence::{IntelligenceConfig, NutritionConfig};
use macrotrack::errors::ErrorCode;
use macrotrack::intelligence::{
    calculate_bmr, calculate_goal_tdee, calculate_maintenance_tdee, calculate_nutritional_program,
    distribute_macros, normalize_percentages, try_calculate_nutritional_program,
};
use macrotrack::models::{
    ActivityLevel, DietType, MacroPercentages, MacroSplit, NutritionalGoal, Occupation,
    ProfileInput, ProgramStatus, Sex,
};

mod common;

const ALL_DIETS: [DietType; 7] = [
    DietType::Balanced,
    DietType::HighProtein,
    DietType::LowCarb,
    DietType::Keto,
    DietType::Mediterranean,
    DietType::Vegetarian,
    DietType::Vegan,
];

const ALL_GOALS: [NutritionalGoal; 7] = [
    NutritionalGoal::CleanBulk,
    NutritionalGoal::LeanBulk,
    NutritionalGoal::Recomposition,
    NutritionalGoal::Maintenance,
    NutritionalGoal::MildDeficit,
    NutritionalGoal::ModerateDeficit,
    NutritionalGoal::AggressiveDeficit,
];

// ============================================================================
// REFERENCE SCENARIO
// ============================================================================

#[test]
fn test_reference_profile_end_to_end() {
    common::init_test_logging();
    let config = &IntelligenceConfig::global().nutrition;
    let profile = common::reference_profile();

    // 10 * 75 + 6.25 * 175 - 5 * 30 + 5 = 1698.75
    let bmr = calculate_bmr(&profile, &config.bmr);
    assert!((bmr - 1698.75).abs() < 1e-9);

    let program = calculate_nutritional_program(&profile, config);
    assert_eq!(program.status, ProgramStatus::Complete);
    assert_eq!(program.maintenance.calories, 2633);
    assert_eq!(program.goal.calories, 2633);
    assert_eq!(program.goal.protein_grams, 197);
    assert_eq!(program.goal.fat_grams, 88);
    assert_eq!(program.goal.carb_grams, 263);
    assert_eq!(program.maintenance, program.goal);
    assert_eq!(
        program.macro_distribution_percent,
        MacroPercentages::new(30, 30, 40)
    );
}

#[test]
fn test_female_lean_bulk_uses_goal_split() {
    let config = NutritionConfig::default();
    let profile = ProfileInput::new(Sex::Female, 28, 165.0, 60.0)
        .with_activity_level(ActivityLevel::VeryActive)
        .with_diet_type(DietType::Keto)
        .with_nutritional_goal(NutritionalGoal::LeanBulk);

    // BMR 600 + 1031.25 - 140 - 161 = 1330.25; x 1.725 = 2294.68
    assert_eq!(calculate_maintenance_tdee(&profile, &config), 2295);
    // 2295 x 1.05 = 2409.75
    assert_eq!(calculate_goal_tdee(&profile, &config), 2410);

    let program = calculate_nutritional_program(&profile, &config);
    // Maintenance keeps the keto split, goal uses the lean bulk override
    assert_eq!(program.maintenance.carb_grams, 29);
    assert_eq!(program.goal.protein_grams, 181);
    assert_eq!(program.goal.fat_grams, 67);
    assert_eq!(program.goal.carb_grams, 271);
}

// ============================================================================
// MISSING DATA
// ============================================================================

#[test]
fn test_missing_biometrics_zero_everything() {
    common::init_test_logging();
    let config = NutritionConfig::default();

    for profile in [
        ProfileInput::new(Sex::Male, 30, 175.0, 0.0),
        ProfileInput::new(Sex::Male, 30, 0.0, 75.0),
        ProfileInput::new(Sex::Female, 0, 160.0, 60.0),
    ] {
        let program = calculate_nutritional_program(&profile, &config);
        assert_eq!(program.status, ProgramStatus::InsufficientData);
        assert!(program.maintenance.is_zero());
        assert!(program.goal.is_zero());
        // Normalizer runs on a 1 kcal floor, so carbs carries the whole 100
        assert_eq!(
            program.macro_distribution_percent,
            MacroPercentages::new(0, 0, 100)
        );
    }
}

#[test]
fn test_try_calculate_lists_every_missing_field() {
    let profile = ProfileInput::new(Sex::Male, 0, 0.0, 0.0);
    let error = try_calculate_nutritional_program(&profile, &NutritionConfig::default())
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InsufficientData);
    let missing = error.context.details["missing_fields"].as_array().unwrap();
    assert_eq!(missing.len(), 3);
}

#[test]
fn test_try_calculate_complete_profile() {
    let program =
        try_calculate_nutritional_program(&common::reference_profile(), &NutritionConfig::default())
            .unwrap();
    assert!(program.is_complete());
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_percentages_sum_to_100_for_every_diet_and_goal() {
    let config = NutritionConfig::default();
    for diet in ALL_DIETS {
        for goal in ALL_GOALS {
            let profile = common::reference_profile()
                .with_diet_type(diet)
                .with_nutritional_goal(goal);
            let percentages = calculate_nutritional_program(&profile, &config)
                .macro_distribution_percent;
            assert!(
                percentages.is_normalized(),
                "{diet} / {goal} gave {percentages:?}"
            );
        }
    }
}

#[test]
fn test_activity_levels_never_decrease_maintenance() {
    let config = NutritionConfig::default();
    for occupation in [
        Occupation::SedentaryJob,
        Occupation::StandingJob,
        Occupation::PhysicalJob,
    ] {
        let calories: Vec<u32> = ActivityLevel::ALL
            .iter()
            .map(|level| {
                let profile = ProfileInput::new(Sex::Female, 45, 162.0, 70.0)
                    .with_activity_level(*level)
                    .with_occupation(occupation);
                calculate_maintenance_tdee(&profile, &config)
            })
            .collect();
        assert!(calories.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

#[test]
fn test_identical_input_identical_output() {
    let config = NutritionConfig::default();
    let profile = common::reference_profile()
        .with_diet_type(DietType::Mediterranean)
        .with_nutritional_goal(NutritionalGoal::MildDeficit);

    let first = calculate_nutritional_program(&profile, &config);
    let second = calculate_nutritional_program(&profile, &config);
    assert_eq!(first, second);
}

#[test]
fn test_residual_only_moves_carbs() {
    // 2000 kcal balanced: 150 g protein (600), 67 g fat (603), 200 g carbs (800)
    let grams = distribute_macros(2000, &MacroSplit::BALANCED);
    assert_eq!(grams.protein_grams, 150);
    assert_eq!(grams.fat_grams, 67);
    assert_eq!(grams.carb_grams, 200);

    // 30 + 30 + 40 = 100 before any adjustment
    let percentages = normalize_percentages(150, 67, 200, 2000);
    assert_eq!(percentages, MacroPercentages::new(30, 30, 40));

    // 23.3 + 33.75 + 43.3 rounds to 23 + 34 + 43 = 100
    let percentages = normalize_percentages(70, 45, 130, 1200);
    assert_eq!(percentages.protein, 23);
    assert_eq!(percentages.fat, 34);
    assert_eq!(percentages.carbs, 43);

    // 33 + 33 + 33 = 99; only carbs changes
    let percentages = normalize_percentages(100, 44, 100, 1200);
    assert_eq!(percentages.protein, 33);
    assert_eq!(percentages.fat, 33);
    assert_eq!(percentages.carbs, 34);

    // 48 + 5 + 48 = 101; carbs gives the point back
    let percentages = normalize_percentages(24, 1, 24, 200);
    assert_eq!(percentages, MacroPercentages::new(48, 5, 47));
}

#[test]
fn test_energy_matches_calories_within_rounding() {
    let config = NutritionConfig::default();
    for diet in ALL_DIETS {
        let profile = common::reference_profile().with_diet_type(diet);
        let program = calculate_nutritional_program(&profile, &config);
        let energy = program.goal.grams().energy_kcal();
        // Each gram is off by at most 0.5, fat costing 9 kcal
        assert!((energy - f64::from(program.goal.calories)).abs() <= 8.5);
    }
}

#[test]
fn test_missing_lifestyle_defaults() {
    let config = NutritionConfig::default();
    let bare = ProfileInput::new(Sex::Male, 30, 175.0, 75.0);
    let sedentary = bare.with_activity_level(ActivityLevel::Sedentary);

    assert_eq!(
        calculate_maintenance_tdee(&bare, &config),
        calculate_maintenance_tdee(&sedentary, &config)
    );
    assert_eq!(
        calculate_nutritional_program(&bare, &config),
        calculate_nutritional_program(&sedentary, &config)
    );
}
