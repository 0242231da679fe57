// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup and reusable profiles, foods, and daily logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `macrotrack`

use chrono::NaiveDate;
use macrotrack::models::{
    ActivityLevel, DailyLog, DietType, FoodEntry, MealType, NutrientTotals, NutritionalGoal,
    Occupation, ProfileInput, Sex,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Male, 30 years, 175 cm, 75 kg, moderately active desk worker on a balanced maintenance diet
pub fn reference_profile() -> ProfileInput {
    ProfileInput::new(Sex::Male, 30, 175.0, 75.0)
        .with_activity_level(ActivityLevel::ModeratelyActive)
        .with_occupation(Occupation::SedentaryJob)
        .with_diet_type(DietType::Balanced)
        .with_nutritional_goal(NutritionalGoal::Maintenance)
}

/// Nutrients for one serving
pub fn nutrients(calories: f64, protein_g: f64, fat_g: f64, carbs_g: f64) -> NutrientTotals {
    NutrientTotals {
        calories,
        protein_g,
        fat_g,
        carbs_g,
    }
}

/// A day with breakfast, lunch and a snack logged
pub fn sample_day() -> DailyLog {
    let mut log = DailyLog::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    log.add_entry(
        FoodEntry::new(
            MealType::Breakfast,
            "Greek yogurt",
            2.0,
            nutrients(100.0, 10.0, 0.0, 4.0),
        )
        .unwrap(),
    );
    log.add_entry(
        FoodEntry::new(
            MealType::Lunch,
            "Chicken rice bowl",
            1.0,
            nutrients(650.0, 45.0, 15.0, 80.0),
        )
        .unwrap()
        .with_brand("Homemade"),
    );
    log.add_entry(
        FoodEntry::new(
            MealType::Snack,
            "Almonds",
            1.5,
            nutrients(160.0, 6.0, 14.0, 6.0),
        )
        .unwrap(),
    );
    log
}
