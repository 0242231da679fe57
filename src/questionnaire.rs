// ABOUTME: Multi-step nutrition questionnaire with per-step validation
// ABOUTME: Converts validated answers into a calculator profile and nutrition program
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition questionnaire
//!
//! Answers stay optional while the user moves between steps. Bounds are
//! enforced here rather than in the calculator, which only guards against
//! values it cannot compute with.

use crate::config::intelligence::NutritionConfig;
use crate::intelligence::try_calculate_nutritional_program;
use macrotrack_core::constants::limits;
use macrotrack_core::errors::{AppError, AppResult};
use macrotrack_core::models::{
    ActivityLevel, DietType, NutritionalGoal, NutritionalProgram, Occupation, ProfileInput, Sex,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Questionnaire pages in display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireStep {
    /// Sex and age
    Basics,
    /// Height, weights and body fat
    Body,
    /// Training activity and occupation
    Lifestyle,
    /// Diet style and meals per day
    Diet,
    /// Nutrition program type
    Goal,
    /// Free-text preferences
    Preferences,
}

impl QuestionnaireStep {
    /// Every step, first to last
    pub const ALL: [Self; 6] = [
        Self::Basics,
        Self::Body,
        Self::Lifestyle,
        Self::Diet,
        Self::Goal,
        Self::Preferences,
    ];

    /// Following step, `None` on the last one
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Basics => Some(Self::Body),
            Self::Body => Some(Self::Lifestyle),
            Self::Lifestyle => Some(Self::Diet),
            Self::Diet => Some(Self::Goal),
            Self::Goal => Some(Self::Preferences),
            Self::Preferences => None,
        }
    }

    /// Preceding step, `None` on the first one
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Basics => None,
            Self::Body => Some(Self::Basics),
            Self::Lifestyle => Some(Self::Body),
            Self::Diet => Some(Self::Lifestyle),
            Self::Goal => Some(Self::Diet),
            Self::Preferences => Some(Self::Goal),
        }
    }

    /// One-based position for progress display
    #[must_use]
    pub const fn number(self) -> usize {
        self as usize + 1
    }
}

impl fmt::Display for QuestionnaireStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Self::Basics => "Basics",
            Self::Body => "Body",
            Self::Lifestyle => "Lifestyle",
            Self::Diet => "Diet",
            Self::Goal => "Goal",
            Self::Preferences => "Preferences",
        };
        f.write_str(title)
    }
}

/// Answers collected by the questionnaire
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionnaireAnswers {
    /// Biological sex
    pub sex: Option<Sex>,
    /// Age in years
    pub age_years: Option<u32>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Current body weight in kilograms
    pub current_weight_kg: Option<f64>,
    /// Target body weight in kilograms
    pub target_weight_kg: Option<f64>,
    /// Body fat percentage
    pub body_fat_percent: Option<f64>,
    /// Weekly training activity
    pub activity_level: Option<ActivityLevel>,
    /// Day-job physical demand
    pub occupation: Option<Occupation>,
    /// Diet style
    pub diet_type: Option<DietType>,
    /// Nutrition program type
    pub nutritional_goal: Option<NutritionalGoal>,
    /// Meals eaten per day
    pub meals_per_day: Option<u8>,
    /// Free-text food preferences and restrictions
    pub preferences: Option<String>,
}

impl QuestionnaireAnswers {
    /// Validate the answers belonging to one step
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for an unanswered required question and
    /// `VALUE_OUT_OF_RANGE` for an answer outside its bounds
    pub fn validate_step(&self, step: QuestionnaireStep) -> AppResult<()> {
        match step {
            QuestionnaireStep::Basics => {
                require(self.sex, "sex")?;
                let age = require(self.age_years, "age_years")?;
                if !(limits::MIN_AGE_YEARS..=limits::MAX_AGE_YEARS).contains(&age) {
                    return Err(AppError::out_of_range(
                        "age_years",
                        format!(
                            "Age must be between {} and {} years",
                            limits::MIN_AGE_YEARS,
                            limits::MAX_AGE_YEARS
                        ),
                    ));
                }
            }
            QuestionnaireStep::Body => {
                let height = require(self.height_cm, "height_cm")?;
                check_range("height_cm", height, limits::MIN_HEIGHT_CM, limits::MAX_HEIGHT_CM)?;
                let weight = require(self.current_weight_kg, "current_weight_kg")?;
                check_range(
                    "current_weight_kg",
                    weight,
                    limits::MIN_WEIGHT_KG,
                    limits::MAX_WEIGHT_KG,
                )?;
                if let Some(target) = self.target_weight_kg {
                    check_range(
                        "target_weight_kg",
                        target,
                        limits::MIN_WEIGHT_KG,
                        limits::MAX_WEIGHT_KG,
                    )?;
                }
                if let Some(body_fat) = self.body_fat_percent {
                    check_range(
                        "body_fat_percent",
                        body_fat,
                        limits::MIN_BODY_FAT_PERCENT,
                        limits::MAX_BODY_FAT_PERCENT,
                    )?;
                }
            }
            QuestionnaireStep::Lifestyle => {
                require(self.activity_level, "activity_level")?;
            }
            QuestionnaireStep::Diet => {
                require(self.diet_type, "diet_type")?;
                if let Some(meals) = self.meals_per_day {
                    if !(limits::MIN_MEALS_PER_DAY..=limits::MAX_MEALS_PER_DAY).contains(&meals) {
                        return Err(AppError::out_of_range(
                            "meals_per_day",
                            format!(
                                "Meals per day must be between {} and {}",
                                limits::MIN_MEALS_PER_DAY,
                                limits::MAX_MEALS_PER_DAY
                            ),
                        ));
                    }
                }
            }
            QuestionnaireStep::Goal => {
                require(self.nutritional_goal, "nutritional_goal")?;
            }
            QuestionnaireStep::Preferences => {
                if let Some(text) = &self.preferences {
                    if text.chars().count() > limits::MAX_PREFERENCE_TEXT_LEN {
                        return Err(AppError::out_of_range(
                            "preferences",
                            format!(
                                "Preferences must be at most {} characters",
                                limits::MAX_PREFERENCE_TEXT_LEN
                            ),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate every step in order
    ///
    /// # Errors
    ///
    /// Returns the first failure, with the failing step in the error details
    pub fn validate(&self) -> AppResult<()> {
        for step in QuestionnaireStep::ALL {
            self.validate_step(step).map_err(|e| {
                e.with_details(serde_json::json!({ "step": step }))
            })?;
        }
        Ok(())
    }

    /// First step that does not validate yet
    #[must_use]
    pub fn first_incomplete_step(&self) -> Option<QuestionnaireStep> {
        QuestionnaireStep::ALL
            .into_iter()
            .find(|step| self.validate_step(*step).is_err())
    }

    /// Meals per day, falling back to the default
    #[must_use]
    pub fn meals_per_day_or_default(&self) -> u8 {
        self.meals_per_day.unwrap_or(limits::DEFAULT_MEALS_PER_DAY)
    }

    /// Build the calculator profile from validated answers
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn to_profile(&self) -> AppResult<ProfileInput> {
        self.validate()?;

        let mut profile = ProfileInput::new(
            require(self.sex, "sex")?,
            require(self.age_years, "age_years")?,
            require(self.height_cm, "height_cm")?,
            require(self.current_weight_kg, "current_weight_kg")?,
        );
        profile.activity_level = self.activity_level;
        profile.occupation = self.occupation;
        profile.diet_type = self.diet_type;
        profile.nutritional_goal = self.nutritional_goal;
        Ok(profile)
    }

    /// Validate the answers and calculate the nutrition program
    ///
    /// # Errors
    ///
    /// Returns a validation failure or `INSUFFICIENT_DATA`
    pub fn program(&self, config: &NutritionConfig) -> AppResult<NutritionalProgram> {
        let profile = self.to_profile()?;
        let program = try_calculate_nutritional_program(&profile, config)?;
        debug!(
            goal_kcal = program.goal.calories,
            "Calculated program from questionnaire"
        );
        Ok(program)
    }
}

fn require<T: Copy>(value: Option<T>, field: &'static str) -> AppResult<T> {
    value.ok_or_else(|| AppError::missing_field(field))
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            field,
            format!("{field} must be between {min} and {max}"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use macrotrack_core::errors::ErrorCode;

    fn complete_answers() -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            sex: Some(Sex::Male),
            age_years: Some(30),
            height_cm: Some(175.0),
            current_weight_kg: Some(75.0),
            target_weight_kg: Some(72.0),
            body_fat_percent: Some(18.0),
            activity_level: Some(ActivityLevel::ModeratelyActive),
            occupation: Some(Occupation::SedentaryJob),
            diet_type: Some(DietType::Balanced),
            nutritional_goal: Some(NutritionalGoal::Maintenance),
            meals_per_day: Some(4),
            preferences: Some("No shellfish".to_owned()),
        }
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(QuestionnaireStep::Basics.previous(), None);
        assert_eq!(
            QuestionnaireStep::Basics.next(),
            Some(QuestionnaireStep::Body)
        );
        assert_eq!(QuestionnaireStep::Preferences.next(), None);
        assert_eq!(QuestionnaireStep::Goal.number(), 5);
    }

    #[test]
    fn test_missing_answer_reports_field() {
        let answers = QuestionnaireAnswers {
            age_years: None,
            ..complete_answers()
        };
        let error = answers
            .validate_step(QuestionnaireStep::Basics)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.context.resource_id.as_deref(), Some("age_years"));
        assert_eq!(
            answers.first_incomplete_step(),
            Some(QuestionnaireStep::Basics)
        );
    }

    #[test]
    fn test_minors_rejected() {
        let answers = QuestionnaireAnswers {
            age_years: Some(17),
            ..complete_answers()
        };
        let error = answers.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.details["step"], "basics");
    }

    #[test]
    fn test_complete_answers_produce_program() {
        let answers = complete_answers();
        assert_eq!(answers.first_incomplete_step(), None);

        let program = answers.program(&NutritionConfig::default()).unwrap();
        assert_eq!(program.goal.calories, 2633);
    }
}
