// ABOUTME: Durable user settings holding daily macro targets and meal count
// ABOUTME: Pluggable async storage backends (JSON file, in-memory) behind a common trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON file settings store
pub mod file;
/// In-memory settings store
pub mod memory;

pub use file::FileSettingsStore;
pub use memory::InMemorySettingsStore;

use chrono::{DateTime, Utc};
use macrotrack_core::constants::limits;
use macrotrack_core::errors::{AppError, AppResult};
use macrotrack_core::models::{MacroTargets, NutritionalProgram};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

/// Settings persisted between runs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Daily calorie and macro targets
    pub macro_targets: MacroTargets,
    /// Meals eaten per day
    pub meals_per_day: u8,
    /// Last modification time, `None` until first saved
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            macro_targets: MacroTargets::default(),
            meals_per_day: limits::DEFAULT_MEALS_PER_DAY,
            updated_at: None,
        }
    }
}

impl UserSettings {
    /// Default targets with a custom meal count
    #[must_use]
    pub fn with_meals_per_day(meals_per_day: u8) -> Self {
        Self {
            meals_per_day,
            ..Self::default()
        }
    }

    /// Replace the targets with the goal macros of a program
    ///
    /// # Errors
    ///
    /// Returns `INSUFFICIENT_DATA` for a program calculated without usable
    /// biometrics, so placeholder zeros never overwrite real targets
    pub fn apply_program(&mut self, program: &NutritionalProgram) -> AppResult<()> {
        if !program.is_complete() {
            return Err(AppError::insufficient_data(
                "Cannot save targets from an incomplete nutrition program",
            )
            .with_details(json!({ "status": program.status })));
        }

        self.macro_targets = MacroTargets::from(program.goal);
        self.updated_at = Some(Utc::now());
        info!(
            calories = self.macro_targets.calories,
            protein_g = self.macro_targets.protein_grams,
            fat_g = self.macro_targets.fat_grams,
            carbs_g = self.macro_targets.carb_grams,
            "Applied nutrition program to settings"
        );
        Ok(())
    }
}

/// Storage backend for [`UserSettings`]
#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load stored settings, or defaults when nothing has been saved
    ///
    /// # Errors
    ///
    /// Returns an error if stored settings exist but cannot be read or parsed
    async fn load(&self) -> AppResult<UserSettings>;

    /// Persist settings, replacing anything stored before
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written
    async fn save(&self, settings: &UserSettings) -> AppResult<()>;
}

/// Load settings, apply a program and save them back
///
/// `meals_per_day` replaces the stored meal count when given.
///
/// # Errors
///
/// Returns a storage error or `INSUFFICIENT_DATA` for an incomplete program
pub async fn save_program_targets<S: SettingsStore + ?Sized>(
    store: &S,
    program: &NutritionalProgram,
    meals_per_day: Option<u8>,
) -> AppResult<UserSettings> {
    let mut settings = store.load().await?;
    settings.apply_program(program)?;
    if let Some(meals) = meals_per_day {
        settings.meals_per_day = meals;
    }
    store.save(&settings).await?;
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use macrotrack_core::models::{CalculatedMacros, MacroPercentages, ProgramStatus};

    fn program(status: ProgramStatus, calories: u32) -> NutritionalProgram {
        let macros = CalculatedMacros {
            calories,
            protein_grams: 180,
            fat_grams: 70,
            carb_grams: 200,
        };
        NutritionalProgram {
            status,
            maintenance: macros,
            goal: macros,
            macro_distribution_percent: MacroPercentages::new(35, 30, 35),
        }
    }

    #[test]
    fn test_apply_complete_program() {
        let mut settings = UserSettings::default();
        settings
            .apply_program(&program(ProgramStatus::Complete, 2100))
            .unwrap();

        assert_eq!(settings.macro_targets.calories, 2100);
        assert_eq!(settings.macro_targets.protein_grams, 180);
        assert!(settings.updated_at.is_some());
    }

    #[test]
    fn test_incomplete_program_keeps_targets() {
        let mut settings = UserSettings::default();
        let result = settings.apply_program(&program(ProgramStatus::InsufficientData, 0));

        assert!(result.is_err());
        assert_eq!(settings, UserSettings::default());
    }
}
