// ABOUTME: Tests for calculator configuration defaults, validation, and environment overrides
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrotrack::config::intelligence::{
    ConfigError, GoalAdjustment, IntelligenceConfig, NutritionConfig,
};
use macrotrack::errors::{AppError, ErrorCode};
use macrotrack::models::{ActivityLevel, DietType, MacroSplit, NutritionalGoal, Occupation};
use serial_test::serial;
use std::env;

mod common;

fn clear_overrides() {
    for key in [
        "MACROTRACK_BMR_WEIGHT_COEF",
        "MACROTRACK_ACTIVITY_SEDENTARY",
        "MACROTRACK_ACTIVITY_VERY_ACTIVE",
        "MACROTRACK_OCCUPATION_PHYSICAL_JOB",
        "MACROTRACK_GOAL_MILD_DEFICIT_MULTIPLIER",
    ] {
        env::remove_var(key);
    }
}

#[test]
fn test_default_tables() {
    let config = NutritionConfig::default();

    assert!((config.activity_factors.factor_for(None) - 1.2).abs() < f64::EPSILON);
    assert!(
        (config
            .activity_factors
            .factor_for(Some(ActivityLevel::ExtraActive))
            - 1.9)
            .abs()
            < f64::EPSILON
    );
    assert!(config.occupation_offsets.offset_for(None).abs() < f64::EPSILON);
    assert!(
        (config
            .occupation_offsets
            .offset_for(Some(Occupation::StandingJob))
            - 0.1)
            .abs()
            < f64::EPSILON
    );
    assert_eq!(
        config.diet_distributions.split_for(DietType::Vegan),
        MacroSplit::new(0.20, 0.25, 0.55)
    );
    assert!(
        (config
            .goal_adjustments
            .multiplier_for(Some(NutritionalGoal::AggressiveDeficit))
            - 0.75)
            .abs()
            < f64::EPSILON
    );
    assert!(config
        .goal_adjustments
        .adjustment_for(NutritionalGoal::MildDeficit)
        .distribution
        .is_none());
}

#[test]
fn test_defaults_validate() {
    IntelligenceConfig::default().validate().unwrap();
}

#[test]
fn test_unbalanced_split_rejected() {
    let mut config = IntelligenceConfig::default();
    config.nutrition.diet_distributions.keto = MacroSplit::new(0.30, 0.70, 0.05);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_activity_factors_must_ascend() {
    let mut config = IntelligenceConfig::default();
    config.nutrition.activity_factors.very_active = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_goal_multiplier_bounds() {
    let mut config = IntelligenceConfig::default();
    config.nutrition.goal_adjustments.clean_bulk = GoalAdjustment::calories_only(2.0);
    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("occupation offsets").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("occupation offsets"));
}

#[test]
#[serial]
fn test_env_overrides_applied() {
    common::init_test_logging();
    clear_overrides();
    env::set_var("MACROTRACK_OCCUPATION_PHYSICAL_JOB", "0.25");
    env::set_var("MACROTRACK_GOAL_MILD_DEFICIT_MULTIPLIER", "0.92");

    let config = IntelligenceConfig::load().unwrap();
    clear_overrides();

    assert!((config.nutrition.occupation_offsets.physical_job - 0.25).abs() < f64::EPSILON);
    assert!(
        (config.nutrition.goal_adjustments.mild_deficit.calorie_multiplier - 0.92).abs()
            < f64::EPSILON
    );
}

#[test]
#[serial]
fn test_unparseable_env_override() {
    clear_overrides();
    env::set_var("MACROTRACK_BMR_WEIGHT_COEF", "ten");

    let result = IntelligenceConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("MACROTRACK_BMR_WEIGHT_COEF"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_env_override_still_validated() {
    clear_overrides();
    env::set_var("MACROTRACK_ACTIVITY_SEDENTARY", "1.6");

    let result = IntelligenceConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}
