// ABOUTME: Nutrition program configuration for BMR, TDEE multipliers, and macro splits
// ABOUTME: Configures activity factors, occupation offsets, diet splits, and goal adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Program Configuration
//!
//! Lookup tables for the program calculator. Every table is a struct with one
//! field per enum variant and an exhaustive `match` accessor, so adding a
//! variant is a compile error until the table covers it.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology

use super::error::ConfigError;
use macrotrack_core::models::{
    ActivityLevel, DietType, MacroSplit, NutritionalGoal, Occupation, Sex,
};
use serde::{Deserialize, Serialize};

/// Nutrition Program Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Occupation offsets added to the activity factor
    pub occupation_offsets: OccupationOffsetsConfig,
    /// Macro split per diet type
    pub diet_distributions: DietDistributionsConfig,
    /// Calorie multiplier and optional split per nutritional goal
    pub goal_adjustments: GoalAdjustmentsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant
    #[must_use]
    pub const fn constant_for(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.msj_male_constant,
            Sex::Female => self.msj_female_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level; sedentary when unknown
    #[must_use]
    pub const fn factor_for(&self, level: Option<ActivityLevel>) -> f64 {
        match level {
            None | Some(ActivityLevel::Sedentary) => self.sedentary,
            Some(ActivityLevel::LightlyActive) => self.lightly_active,
            Some(ActivityLevel::ModeratelyActive) => self.moderately_active,
            Some(ActivityLevel::VeryActive) => self.very_active,
            Some(ActivityLevel::ExtraActive) => self.extra_active,
        }
    }

    /// Validate factors are within 1.0-2.5 and strictly ascending
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a factor is out of range or out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sedentary < 1.0 || self.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        let ordered = ActivityLevel::ALL.map(|level| self.factor_for(Some(level)));
        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

/// Additive TDEE offsets for day-job activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupationOffsetsConfig {
    /// Desk job: 0.0
    pub sedentary_job: f64,
    /// Standing job: 0.1
    pub standing_job: f64,
    /// Physical job: 0.2
    pub physical_job: f64,
}

impl OccupationOffsetsConfig {
    /// Offset for an occupation; zero when unknown
    #[must_use]
    pub const fn offset_for(&self, occupation: Option<Occupation>) -> f64 {
        match occupation {
            None => 0.0,
            Some(Occupation::SedentaryJob) => self.sedentary_job,
            Some(Occupation::StandingJob) => self.standing_job,
            Some(Occupation::PhysicalJob) => self.physical_job,
        }
    }

    /// Validate offsets are within 0.0-0.5
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if an offset is outside 0.0-0.5
    pub fn validate(&self) -> Result<(), ConfigError> {
        let offsets = [self.sedentary_job, self.standing_job, self.physical_job];
        if offsets.iter().any(|offset| !(0.0..=0.5).contains(offset)) {
            return Err(ConfigError::ValueOutOfRange(
                "Occupation offsets must be between 0.0 and 0.5",
            ));
        }
        Ok(())
    }
}

/// Protein/fat/carb split for each diet type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietDistributionsConfig {
    /// Balanced: 30/30/40
    pub balanced: MacroSplit,
    /// High protein: 40/30/30
    pub high_protein: MacroSplit,
    /// Low carb: 35/45/20
    pub low_carb: MacroSplit,
    /// Ketogenic: 25/70/5
    pub keto: MacroSplit,
    /// Mediterranean: 20/35/45
    pub mediterranean: MacroSplit,
    /// Vegetarian: 20/30/50
    pub vegetarian: MacroSplit,
    /// Vegan: 20/25/55
    pub vegan: MacroSplit,
}

impl DietDistributionsConfig {
    /// Split for a diet type
    #[must_use]
    pub const fn split_for(&self, diet_type: DietType) -> MacroSplit {
        match diet_type {
            DietType::Balanced => self.balanced,
            DietType::HighProtein => self.high_protein,
            DietType::LowCarb => self.low_carb,
            DietType::Keto => self.keto,
            DietType::Mediterranean => self.mediterranean,
            DietType::Vegetarian => self.vegetarian,
            DietType::Vegan => self.vegan,
        }
    }

    /// Validate every split sums to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if a split is negative or does not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            self.balanced,
            self.high_protein,
            self.low_carb,
            self.keto,
            self.mediterranean,
            self.vegetarian,
            self.vegan,
        ];
        if splits.iter().any(|split| !split.is_valid()) {
            return Err(ConfigError::InvalidWeights(
                "Diet macro splits must be non-negative and sum to 1.0",
            ));
        }
        Ok(())
    }
}

/// Calorie multiplier and optional split for one nutritional goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalAdjustment {
    /// Multiplier applied to maintenance calories
    pub calorie_multiplier: f64,
    /// Split that overrides the diet type, if the goal has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<MacroSplit>,
}

impl GoalAdjustment {
    /// Adjustment with a split override
    #[must_use]
    pub const fn with_split(calorie_multiplier: f64, split: MacroSplit) -> Self {
        Self {
            calorie_multiplier,
            distribution: Some(split),
        }
    }

    /// Adjustment that keeps the diet type's split
    #[must_use]
    pub const fn calories_only(calorie_multiplier: f64) -> Self {
        Self {
            calorie_multiplier,
            distribution: None,
        }
    }
}

/// Adjustments for each nutritional goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Clean bulk: x1.10, 30/25/45
    pub clean_bulk: GoalAdjustment,
    /// Lean bulk: x1.05, 30/25/45
    pub lean_bulk: GoalAdjustment,
    /// Recomposition: x1.00, 40/30/30
    pub recomposition: GoalAdjustment,
    /// Maintenance: x1.00, diet split
    pub maintenance: GoalAdjustment,
    /// Mild deficit: x0.90, diet split
    pub mild_deficit: GoalAdjustment,
    /// Moderate deficit: x0.85, 40/30/30
    pub moderate_deficit: GoalAdjustment,
    /// Aggressive deficit: x0.75, 45/30/25
    pub aggressive_deficit: GoalAdjustment,
}

impl GoalAdjustmentsConfig {
    /// Adjustment for a goal
    #[must_use]
    pub const fn adjustment_for(&self, goal: NutritionalGoal) -> GoalAdjustment {
        match goal {
            NutritionalGoal::CleanBulk => self.clean_bulk,
            NutritionalGoal::LeanBulk => self.lean_bulk,
            NutritionalGoal::Recomposition => self.recomposition,
            NutritionalGoal::Maintenance => self.maintenance,
            NutritionalGoal::MildDeficit => self.mild_deficit,
            NutritionalGoal::ModerateDeficit => self.moderate_deficit,
            NutritionalGoal::AggressiveDeficit => self.aggressive_deficit,
        }
    }

    /// Calorie multiplier for a goal; 1.0 when unknown
    #[must_use]
    pub const fn multiplier_for(&self, goal: Option<NutritionalGoal>) -> f64 {
        match goal {
            Some(goal) => self.adjustment_for(goal).calorie_multiplier,
            None => 1.0,
        }
    }

    /// Validate multipliers are within 0.5-1.5 and override splits sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a multiplier or split is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let adjustments = [
            self.clean_bulk,
            self.lean_bulk,
            self.recomposition,
            self.maintenance,
            self.mild_deficit,
            self.moderate_deficit,
            self.aggressive_deficit,
        ];
        for adjustment in adjustments {
            if !(0.5..=1.5).contains(&adjustment.calorie_multiplier) {
                return Err(ConfigError::ValueOutOfRange(
                    "Goal calorie multipliers must be between 0.5 and 1.5",
                ));
            }
            if adjustment
                .distribution
                .is_some_and(|split| !split.is_valid())
            {
                return Err(ConfigError::InvalidWeights(
                    "Goal macro splits must be non-negative and sum to 1.0",
                ));
            }
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl Default for OccupationOffsetsConfig {
    fn default() -> Self {
        Self {
            sedentary_job: 0.0,
            standing_job: 0.1,
            physical_job: 0.2,
        }
    }
}

impl Default for DietDistributionsConfig {
    fn default() -> Self {
        Self {
            balanced: MacroSplit::BALANCED,
            high_protein: MacroSplit::new(0.40, 0.30, 0.30),
            low_carb: MacroSplit::new(0.35, 0.45, 0.20),
            keto: MacroSplit::new(0.25, 0.70, 0.05),
            mediterranean: MacroSplit::new(0.20, 0.35, 0.45),
            vegetarian: MacroSplit::new(0.20, 0.30, 0.50),
            vegan: MacroSplit::new(0.20, 0.25, 0.55),
        }
    }
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        let bulk_split = MacroSplit::new(0.30, 0.25, 0.45);
        let high_protein_split = MacroSplit::new(0.40, 0.30, 0.30);
        Self {
            clean_bulk: GoalAdjustment::with_split(1.10, bulk_split),
            lean_bulk: GoalAdjustment::with_split(1.05, bulk_split),
            recomposition: GoalAdjustment::with_split(1.0, high_protein_split),
            maintenance: GoalAdjustment::calories_only(1.0),
            mild_deficit: GoalAdjustment::calories_only(0.90),
            moderate_deficit: GoalAdjustment::with_split(0.85, high_protein_split),
            // Higher protein share protects lean mass in a large deficit
            aggressive_deficit: GoalAdjustment::with_split(0.75, MacroSplit::new(0.45, 0.30, 0.25)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = NutritionConfig::default();
        assert!(config.activity_factors.validate().is_ok());
        assert!(config.occupation_offsets.validate().is_ok());
        assert!(config.diet_distributions.validate().is_ok());
        assert!(config.goal_adjustments.validate().is_ok());
    }

    #[test]
    fn test_unknown_lookups_fall_back() {
        let config = NutritionConfig::default();
        assert!((config.activity_factors.factor_for(None) - 1.2).abs() < f64::EPSILON);
        assert!(config.occupation_offsets.offset_for(None).abs() < f64::EPSILON);
        assert!((config.goal_adjustments.multiplier_for(None) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_descending_activity_factors_rejected() {
        let factors = ActivityFactorsConfig {
            very_active: 1.5,
            ..ActivityFactorsConfig::default()
        };
        assert!(matches!(
            factors.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_bad_goal_split_rejected() {
        let goals = GoalAdjustmentsConfig {
            recomposition: GoalAdjustment::with_split(1.0, MacroSplit::new(0.5, 0.5, 0.5)),
            ..GoalAdjustmentsConfig::default()
        };
        assert!(matches!(
            goals.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }
}
