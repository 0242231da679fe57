// ABOUTME: Target inspection and macro adjustment commands for macrotrack-cli
// ABOUTME: Shows saved daily targets and rebalances macro percentage splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macrotrack::errors::AppResult;
use macrotrack::intelligence::{per_meal_targets, redistribute};
use macrotrack::models::{Macro, MacroPercentages};
use macrotrack::settings::SettingsStore;

use crate::helpers::display::{display_percentages, display_targets};
use crate::helpers::input::print_json;

type Result<T> = AppResult<T>;

/// Show saved targets
pub async fn show(store: &dyn SettingsStore, per_meal: bool, json: bool) -> Result<()> {
    let settings = store.load().await?;
    let meal_targets = if per_meal {
        Some(per_meal_targets(
            &settings.macro_targets,
            settings.meals_per_day,
        )?)
    } else {
        None
    };

    if json {
        return print_json(&serde_json::json!({
            "settings": settings,
            "perMeal": meal_targets,
        }));
    }
    display_targets(&settings, meal_targets.as_ref());
    Ok(())
}

/// Move one macro to a new percent and print the rebalanced split
pub fn adjust(current: MacroPercentages, changed: Macro, percent: i32, json: bool) -> Result<()> {
    let adjusted = redistribute(current, changed, percent);
    if json {
        return print_json(&adjusted);
    }
    display_percentages(&adjusted);
    Ok(())
}
