// ABOUTME: Program calculation commands for macrotrack-cli
// ABOUTME: Handles program display, target saving, and questionnaire evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macrotrack::config::intelligence::NutritionConfig;
use macrotrack::constants::limits;
use macrotrack::errors::{AppError, AppResult};
use macrotrack::intelligence::{calculate_nutritional_program, try_calculate_nutritional_program};
use macrotrack::models::{NutritionalProgram, ProfileInput};
use macrotrack::questionnaire::QuestionnaireAnswers;
use macrotrack::settings::{save_program_targets, SettingsStore, UserSettings};
use std::path::Path;
use tracing::info;

use crate::helpers::display::{display_program, display_targets};
use crate::helpers::input::{print_json, read_json};

type Result<T> = AppResult<T>;

/// Calculate a program and print it without saving
pub fn show(profile: &ProfileInput, config: &NutritionConfig, json: bool) -> Result<()> {
    let program = calculate_nutritional_program(profile, config);
    if json {
        print_json(&program)
    } else {
        display_program(&program);
        Ok(())
    }
}

/// Calculate a program and save its goal macros as daily targets
pub async fn apply(
    store: &dyn SettingsStore,
    profile: &ProfileInput,
    config: &NutritionConfig,
    meals_per_day: u8,
    json: bool,
) -> Result<()> {
    check_meals(meals_per_day)?;
    let program = try_calculate_nutritional_program(profile, config)?;
    let settings = save_program_targets(store, &program, Some(meals_per_day)).await?;
    info!(meals_per_day, "Saved nutrition targets");
    report(&program, &settings, json)
}

/// Evaluate questionnaire answers, optionally saving the result
pub async fn questionnaire(
    store: &dyn SettingsStore,
    answers_path: &Path,
    config: &NutritionConfig,
    save_targets: bool,
    json: bool,
) -> Result<()> {
    let answers: QuestionnaireAnswers = read_json(answers_path).await?;
    let program = answers.program(config)?;

    if !save_targets {
        return if json {
            print_json(&program)
        } else {
            display_program(&program);
            Ok(())
        };
    }

    let settings = save_program_targets(
        store,
        &program,
        Some(answers.meals_per_day_or_default()),
    )
    .await?;
    report(&program, &settings, json)
}

fn report(program: &NutritionalProgram, settings: &UserSettings, json: bool) -> Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "program": program,
            "settings": settings,
        }));
    }
    display_program(program);
    display_targets(settings, None);
    println!("\nTargets saved.");
    Ok(())
}

fn check_meals(meals_per_day: u8) -> Result<()> {
    if (limits::MIN_MEALS_PER_DAY..=limits::MAX_MEALS_PER_DAY).contains(&meals_per_day) {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            "meals_per_day",
            format!(
                "Meals per day must be between {} and {}",
                limits::MIN_MEALS_PER_DAY,
                limits::MAX_MEALS_PER_DAY
            ),
        ))
    }
}
