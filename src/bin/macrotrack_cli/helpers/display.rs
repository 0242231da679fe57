// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for macrotrack-cli
// ABOUTME: Provides consistent display functions for programs, targets, and intake progress

use macrotrack::intelligence::{DailyProgress, NutrientProgress};
use macrotrack::models::{CalculatedMacros, MacroPercentages, MacroTargets, NutritionalProgram};
use macrotrack::settings::UserSettings;

/// Display a calculated program
pub fn display_program(program: &NutritionalProgram) {
    if !program.is_complete() {
        println!("\nNot enough information to calculate a program.");
        println!("Weight, height and age are all required.");
        return;
    }

    println!("\nNutrition Program");
    println!("{}", "=".repeat(50));
    display_macros("Maintenance", &program.maintenance);
    display_macros("Goal", &program.goal);
    display_percentages(&program.macro_distribution_percent);
}

fn display_macros(label: &str, macros: &CalculatedMacros) {
    println!("{label}:");
    println!("   Calories: {} kcal", macros.calories);
    println!("   Protein:  {} g", macros.protein_grams);
    println!("   Fat:      {} g", macros.fat_grams);
    println!("   Carbs:    {} g", macros.carb_grams);
}

/// Display a percentage triple on one line
pub fn display_percentages(percentages: &MacroPercentages) {
    println!(
        "Split: protein {}% / fat {}% / carbs {}%",
        percentages.protein, percentages.fat, percentages.carbs
    );
}

/// Display saved targets, optionally divided per meal
pub fn display_targets(settings: &UserSettings, per_meal: Option<&MacroTargets>) {
    let targets = &settings.macro_targets;
    println!("\nDaily Targets");
    println!("{}", "=".repeat(50));
    println!("   Calories: {} kcal", targets.calories);
    println!("   Protein:  {} g", targets.protein_grams);
    println!("   Fat:      {} g", targets.fat_grams);
    println!("   Carbs:    {} g", targets.carb_grams);
    println!("   Meals:    {}", settings.meals_per_day);
    match settings.updated_at {
        Some(updated) => println!("   Updated:  {}", updated.format("%Y-%m-%d %H:%M UTC")),
        None => println!("   Updated:  never (defaults)"),
    }

    if let Some(meal) = per_meal {
        println!("\nPer Meal");
        println!(
            "   {} kcal, {} g protein, {} g fat, {} g carbs",
            meal.calories, meal.protein_grams, meal.fat_grams, meal.carb_grams
        );
    }
}

/// Display daily progress against targets
pub fn display_progress(progress: &DailyProgress) {
    println!("\nDaily Progress");
    println!("{}", "=".repeat(50));
    display_nutrient("Calories", "kcal", &progress.calories);
    display_nutrient("Protein", "g", &progress.protein);
    display_nutrient("Fat", "g", &progress.fat);
    display_nutrient("Carbs", "g", &progress.carbs);
    display_percentages(&progress.consumed_percentages);
}

fn display_nutrient(label: &str, unit: &str, progress: &NutrientProgress) {
    let status = if progress.over_target {
        "over target"
    } else {
        "remaining"
    };
    let amount = if progress.over_target {
        progress.consumed - progress.target
    } else {
        progress.remaining
    };
    println!(
        "   {label:<9} {:.0}/{:.0} {unit} ({}%), {amount:.0} {unit} {status}",
        progress.consumed, progress.target, progress.percent_of_target
    );
}
