// ABOUTME: Profile input models for nutrition program calculation
// ABOUTME: Sex, ActivityLevel, Occupation, DietType, NutritionalGoal, and ProfileInput definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Sex {
    /// Male (+5 kcal Mifflin-St Jeor constant)
    Male,
    /// Female (-161 kcal Mifflin-St Jeor constant)
    Female,
}

/// Weekly training activity, mapped to a TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Hard daily exercise plus physical work or two sessions a day
    ExtraActive,
}

impl ActivityLevel {
    /// All levels from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];
}

/// Day-job physical demand, mapped to an additive TDEE offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Occupation {
    /// Desk work
    SedentaryJob,
    /// On your feet most of the day
    StandingJob,
    /// Manual labour
    PhysicalJob,
}

/// Diet style, mapped to a protein/fat/carb split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DietType {
    /// 30/30/40
    Balanced,
    /// 40/30/30
    HighProtein,
    /// 35/45/20
    LowCarb,
    /// 25/70/5
    Keto,
    /// 20/35/45
    Mediterranean,
    /// 20/30/50
    Vegetarian,
    /// 20/25/55
    Vegan,
}

/// Nutrition program type, mapped to a calorie multiplier and an optional split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum NutritionalGoal {
    /// Surplus for muscle gain with minimal fat gain
    CleanBulk,
    /// Small surplus
    LeanBulk,
    /// Maintenance calories with a high-protein split
    Recomposition,
    /// Hold current weight
    Maintenance,
    /// Small deficit
    MildDeficit,
    /// Standard fat-loss deficit
    ModerateDeficit,
    /// Large deficit
    AggressiveDeficit,
}

macro_rules! string_enum {
    ($ty:ident, $label:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Canonical camelCase name used in JSON and the CLI
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized: String = s
                    .chars()
                    .filter(|c| *c != '-' && *c != '_')
                    .collect::<String>()
                    .to_lowercase();
                $(
                    if normalized == $name.to_lowercase() {
                        return Ok(Self::$variant);
                    }
                )+
                Err(AppError::invalid_input(format!("Unknown {}: {s}", $label))
                    .with_resource_id($label))
            }
        }
    };
}

string_enum!(Sex, "sex", {
    Male => "male",
    Female => "female",
});

string_enum!(ActivityLevel, "activity_level", {
    Sedentary => "sedentary",
    LightlyActive => "lightlyActive",
    ModeratelyActive => "moderatelyActive",
    VeryActive => "veryActive",
    ExtraActive => "extraActive",
});

string_enum!(Occupation, "occupation", {
    SedentaryJob => "sedentaryJob",
    StandingJob => "standingJob",
    PhysicalJob => "physicalJob",
});

string_enum!(DietType, "diet_type", {
    Balanced => "balanced",
    HighProtein => "highProtein",
    LowCarb => "lowCarb",
    Keto => "keto",
    Mediterranean => "mediterranean",
    Vegetarian => "vegetarian",
    Vegan => "vegan",
});

string_enum!(NutritionalGoal, "nutritional_goal", {
    CleanBulk => "cleanBulk",
    LeanBulk => "leanBulk",
    Recomposition => "recomposition",
    Maintenance => "maintenance",
    MildDeficit => "mildDeficit",
    ModerateDeficit => "moderateDeficit",
    AggressiveDeficit => "aggressiveDeficit",
});

/// Inputs to a single program calculation
///
/// Built fresh for every recalculation. Numeric fields use `0` for "not
/// provided"; the calculator treats zero, negative and non-finite values as
/// missing and produces an all-zero program.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    /// Biological sex
    pub sex: Sex,
    /// Age in whole years
    #[serde(default)]
    pub age_years: u32,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: f64,
    /// Current body weight in kilograms
    #[serde(default)]
    pub current_weight_kg: f64,
    /// Training activity; sedentary when absent
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Job activity; no offset when absent
    #[serde(default)]
    pub occupation: Option<Occupation>,
    /// Diet style; balanced split when absent
    #[serde(default)]
    pub diet_type: Option<DietType>,
    /// Program type; maintenance calories when absent
    #[serde(default)]
    pub nutritional_goal: Option<NutritionalGoal>,
}

impl ProfileInput {
    /// Profile with the required biometrics and no lifestyle choices
    #[must_use]
    pub fn new(sex: Sex, age_years: u32, height_cm: f64, current_weight_kg: f64) -> Self {
        Self {
            sex,
            age_years,
            height_cm,
            current_weight_kg,
            activity_level: None,
            occupation: None,
            diet_type: None,
            nutritional_goal: None,
        }
    }

    /// Set the activity level
    #[must_use]
    pub fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = Some(activity_level);
        self
    }

    /// Set the occupation
    #[must_use]
    pub fn with_occupation(mut self, occupation: Occupation) -> Self {
        self.occupation = Some(occupation);
        self
    }

    /// Set the diet type
    #[must_use]
    pub fn with_diet_type(mut self, diet_type: DietType) -> Self {
        self.diet_type = Some(diet_type);
        self
    }

    /// Set the nutritional goal
    #[must_use]
    pub fn with_nutritional_goal(mut self, nutritional_goal: NutritionalGoal) -> Self {
        self.nutritional_goal = Some(nutritional_goal);
        self
    }

    /// Names of the biometric fields that cannot feed the BMR equation
    #[must_use]
    pub fn missing_biometrics(&self) -> Vec<&'static str> {
        let usable = |value: f64| value.is_finite() && value > 0.0;
        let mut missing = Vec::new();
        if !usable(self.current_weight_kg) {
            missing.push("current_weight_kg");
        }
        if !usable(self.height_cm) {
            missing.push("height_cm");
        }
        if self.age_years == 0 {
            missing.push("age_years");
        }
        missing
    }
}
