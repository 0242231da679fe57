// ABOUTME: Nutrition program output records produced by the program calculator
// ABOUTME: MacroSplit, MacroGrams, CalculatedMacros, MacroPercentages, and NutritionalProgram
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{energy, percent};
use serde::{Deserialize, Serialize};

/// One of the three macronutrients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Macro {
    /// Protein (4 kcal/g)
    Protein,
    /// Fat (9 kcal/g)
    Fat,
    /// Carbohydrates (4 kcal/g)
    Carbs,
}

impl Macro {
    /// Energy density in kcal per gram
    #[must_use]
    pub const fn kcal_per_gram(self) -> f64 {
        match self {
            Self::Protein => energy::PROTEIN_KCAL_PER_GRAM,
            Self::Fat => energy::FAT_KCAL_PER_GRAM,
            Self::Carbs => energy::CARB_KCAL_PER_GRAM,
        }
    }
}

/// Fractional calorie split across protein, fat and carbs (sums to 1.0)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Protein share of calories (0.0-1.0)
    pub protein: f64,
    /// Fat share of calories (0.0-1.0)
    pub fat: f64,
    /// Carbohydrate share of calories (0.0-1.0)
    pub carbs: f64,
}

impl MacroSplit {
    /// Balanced 30/30/40 split used when nothing else resolves
    pub const BALANCED: Self = Self::new(0.30, 0.30, 0.40);

    /// Create a split from fractional shares
    #[must_use]
    pub const fn new(protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            protein,
            fat,
            carbs,
        }
    }

    /// Create a split from whole percentages
    #[must_use]
    pub fn from_percentages(percentages: MacroPercentages) -> Self {
        Self::new(
            f64::from(percentages.protein) / 100.0,
            f64::from(percentages.fat) / 100.0,
            f64::from(percentages.carbs) / 100.0,
        )
    }

    /// Share for a single macro
    #[must_use]
    pub const fn share(&self, nutrient: Macro) -> f64 {
        match nutrient {
            Macro::Protein => self.protein,
            Macro::Fat => self.fat,
            Macro::Carbs => self.carbs,
        }
    }

    /// Sum of the three shares
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }

    /// Whether the shares are non-negative and sum to 1.0
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.protein, self.fat, self.carbs]
            .iter()
            .all(|share| share.is_finite() && *share >= 0.0)
            && (self.total() - 1.0).abs() <= percent::SPLIT_SUM_TOLERANCE
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self::BALANCED
    }
}

/// Whole grams of each macro
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MacroGrams {
    /// Protein grams
    pub protein_grams: u32,
    /// Fat grams
    pub fat_grams: u32,
    /// Carbohydrate grams
    pub carb_grams: u32,
}

impl MacroGrams {
    /// Energy implied by the grams (4/9/4 kcal per gram)
    #[must_use]
    pub fn energy_kcal(&self) -> f64 {
        f64::from(self.protein_grams).mul_add(
            energy::PROTEIN_KCAL_PER_GRAM,
            f64::from(self.fat_grams).mul_add(
                energy::FAT_KCAL_PER_GRAM,
                f64::from(self.carb_grams) * energy::CARB_KCAL_PER_GRAM,
            ),
        )
    }
}

/// Calorie total with its macro breakdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedMacros {
    /// Daily calories (kcal)
    pub calories: u32,
    /// Protein grams
    pub protein_grams: u32,
    /// Fat grams
    pub fat_grams: u32,
    /// Carbohydrate grams
    pub carb_grams: u32,
}

impl CalculatedMacros {
    /// Combine a calorie total with its gram distribution
    #[must_use]
    pub const fn new(calories: u32, grams: MacroGrams) -> Self {
        Self {
            calories,
            protein_grams: grams.protein_grams,
            fat_grams: grams.fat_grams,
            carb_grams: grams.carb_grams,
        }
    }

    /// Gram distribution without the calorie total
    #[must_use]
    pub const fn grams(&self) -> MacroGrams {
        MacroGrams {
            protein_grams: self.protein_grams,
            fat_grams: self.fat_grams,
            carb_grams: self.carb_grams,
        }
    }

    /// Whether every field is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.calories == 0 && self.protein_grams == 0 && self.fat_grams == 0 && self.carb_grams == 0
    }
}

/// Whole-number macro percentages
///
/// Produced by the normalizer, so the fields sum to exactly 100. Carbs may
/// only go negative when the gram inputs exceed the calorie total, which the
/// calculator never produces.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroPercentages {
    /// Protein percent of calories
    pub protein: i32,
    /// Fat percent of calories
    pub fat: i32,
    /// Carbohydrate percent of calories
    pub carbs: i32,
}

impl MacroPercentages {
    /// Create from whole percentages
    #[must_use]
    pub const fn new(protein: i32, fat: i32, carbs: i32) -> Self {
        Self {
            protein,
            fat,
            carbs,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn sum(&self) -> i32 {
        self.protein + self.fat + self.carbs
    }

    /// Percentage for a single macro
    #[must_use]
    pub const fn get(&self, nutrient: Macro) -> i32 {
        match nutrient {
            Macro::Protein => self.protein,
            Macro::Fat => self.fat,
            Macro::Carbs => self.carbs,
        }
    }

    /// Whether the percentages sum to exactly 100
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        self.sum() == percent::TOTAL
    }
}

/// Whether a program was computed from complete biometrics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgramStatus {
    /// Weight, height and age were usable
    Complete,
    /// BMR could not be computed; every calorie and gram field is zero
    InsufficientData,
}

/// Aggregate calculator output
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalProgram {
    /// Whether the numbers are real or zero placeholders
    pub status: ProgramStatus,
    /// Maintenance calories and macros
    pub maintenance: CalculatedMacros,
    /// Goal-adjusted calories and macros
    pub goal: CalculatedMacros,
    /// Normalized percentages of the goal macros
    pub macro_distribution_percent: MacroPercentages,
}

impl NutritionalProgram {
    /// Whether the program holds real numbers
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, ProgramStatus::Complete)
    }
}
