// ABOUTME: Intelligence configuration for the nutrition program calculator
// ABOUTME: Loads defaults, applies environment overrides, and validates lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Provides type-safe, validated configuration for the program calculator.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity/occupation multipliers, diet and goal splits
//! - `error` - Configuration validation errors

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, DietDistributionsConfig, GoalAdjustment,
    GoalAdjustmentsConfig, NutritionConfig, OccupationOffsetsConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the nutrition program calculator
    pub nutrition: NutritionConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if nutr.bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }

        nutr.activity_factors.validate()?;
        nutr.occupation_offsets.validate()?;
        nutr.diet_distributions.validate()?;
        nutr.goal_adjustments.validate()?;

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let nutr = &mut self.nutrition;

        // BMR coefficients
        Self::apply_env_var("MACROTRACK_BMR_WEIGHT_COEF", &mut nutr.bmr.msj_weight_coef)?;
        Self::apply_env_var("MACROTRACK_BMR_HEIGHT_COEF", &mut nutr.bmr.msj_height_coef)?;
        Self::apply_env_var("MACROTRACK_BMR_AGE_COEF", &mut nutr.bmr.msj_age_coef)?;
        Self::apply_env_var(
            "MACROTRACK_BMR_MALE_CONSTANT",
            &mut nutr.bmr.msj_male_constant,
        )?;
        Self::apply_env_var(
            "MACROTRACK_BMR_FEMALE_CONSTANT",
            &mut nutr.bmr.msj_female_constant,
        )?;

        // Activity factors
        let factors = &mut nutr.activity_factors;
        Self::apply_env_var("MACROTRACK_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var(
            "MACROTRACK_ACTIVITY_LIGHTLY_ACTIVE",
            &mut factors.lightly_active,
        )?;
        Self::apply_env_var(
            "MACROTRACK_ACTIVITY_MODERATELY_ACTIVE",
            &mut factors.moderately_active,
        )?;
        Self::apply_env_var("MACROTRACK_ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;
        Self::apply_env_var("MACROTRACK_ACTIVITY_EXTRA_ACTIVE", &mut factors.extra_active)?;

        // Occupation offsets
        let offsets = &mut nutr.occupation_offsets;
        Self::apply_env_var(
            "MACROTRACK_OCCUPATION_SEDENTARY_JOB",
            &mut offsets.sedentary_job,
        )?;
        Self::apply_env_var(
            "MACROTRACK_OCCUPATION_STANDING_JOB",
            &mut offsets.standing_job,
        )?;
        Self::apply_env_var(
            "MACROTRACK_OCCUPATION_PHYSICAL_JOB",
            &mut offsets.physical_job,
        )?;

        // Goal calorie multipliers
        let goals = &mut nutr.goal_adjustments;
        Self::apply_env_var(
            "MACROTRACK_GOAL_CLEAN_BULK_MULTIPLIER",
            &mut goals.clean_bulk.calorie_multiplier,
        )?;
        Self::apply_env_var(
            "MACROTRACK_GOAL_LEAN_BULK_MULTIPLIER",
            &mut goals.lean_bulk.calorie_multiplier,
        )?;
        Self::apply_env_var(
            "MACROTRACK_GOAL_MILD_DEFICIT_MULTIPLIER",
            &mut goals.mild_deficit.calorie_multiplier,
        )?;
        Self::apply_env_var(
            "MACROTRACK_GOAL_MODERATE_DEFICIT_MULTIPLIER",
            &mut goals.moderate_deficit.calorie_multiplier,
        )?;
        Self::apply_env_var(
            "MACROTRACK_GOAL_AGGRESSIVE_DEFICIT_MULTIPLIER",
            &mut goals.aggressive_deficit.calorie_multiplier,
        )?;

        Ok(self)
    }
}
