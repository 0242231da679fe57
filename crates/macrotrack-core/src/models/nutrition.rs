// ABOUTME: Nutrition tracking models for per-meal food intake and daily targets
// ABOUTME: DailyLog, FoodEntry, MealType, NutrientTotals, and MacroTargets definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::program::CalculatedMacros;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Add;
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Meals in display order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Snack,
        Self::Other,
    ];
}

/// Calories and macro grams, fractional to keep serving math exact
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
}

impl NutrientTotals {
    /// Multiply every field by a serving count
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
            carbs_g: self.carbs_g * factor,
        }
    }
}

impl Add for NutrientTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
        }
    }
}

/// One logged food
///
/// Deserialization runs the same checks as [`FoodEntry::new`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "FoodEntryRecord")]
pub struct FoodEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Meal the food was eaten at
    pub meal_type: MealType,
    /// Food name
    pub name: String,
    /// Brand name (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Number of servings consumed
    pub servings: f64,
    /// Nutrients per serving
    pub per_serving: NutrientTotals,
    /// Timestamp when the food was logged
    pub logged_at: DateTime<Utc>,
}

impl FoodEntry {
    /// Create an entry, rejecting negative or non-finite quantities
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, servings is not positive, or a
    /// per-serving value is negative or non-finite
    pub fn new(
        meal_type: MealType,
        name: impl Into<String>,
        servings: f64,
        per_serving: NutrientTotals,
    ) -> AppResult<Self> {
        let name = name.into();
        check_entry(&name, servings, &per_serving)?;

        Ok(Self {
            id: Uuid::new_v4(),
            meal_type,
            name,
            brand: None,
            servings,
            per_serving,
            logged_at: Utc::now(),
        })
    }

    /// Set the brand
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Nutrients consumed (per serving × servings)
    #[must_use]
    pub fn consumed(&self) -> NutrientTotals {
        self.per_serving.scaled(self.servings)
    }
}

/// Unchecked wire form of a [`FoodEntry`]
#[derive(Deserialize)]
struct FoodEntryRecord {
    id: Uuid,
    meal_type: MealType,
    name: String,
    #[serde(default)]
    brand: Option<String>,
    servings: f64,
    per_serving: NutrientTotals,
    logged_at: DateTime<Utc>,
}

impl TryFrom<FoodEntryRecord> for FoodEntry {
    type Error = AppError;

    fn try_from(record: FoodEntryRecord) -> AppResult<Self> {
        check_entry(&record.name, record.servings, &record.per_serving)
            .map_err(|e| e.with_details(serde_json::json!({ "entry_id": record.id })))?;
        Ok(Self {
            id: record.id,
            meal_type: record.meal_type,
            name: record.name,
            brand: record.brand,
            servings: record.servings,
            per_serving: record.per_serving,
            logged_at: record.logged_at,
        })
    }
}

fn check_entry(name: &str, servings: f64, per_serving: &NutrientTotals) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }
    if !servings.is_finite() || servings <= 0.0 {
        return Err(AppError::out_of_range(
            "servings",
            "Servings must be a positive number",
        ));
    }
    let values = [
        per_serving.calories,
        per_serving.protein_g,
        per_serving.fat_g,
        per_serving.carbs_g,
    ];
    if values.iter().any(|value| !value.is_finite() || *value < 0.0) {
        return Err(AppError::out_of_range(
            "per_serving",
            "Nutrient values must be non-negative numbers",
        ));
    }
    Ok(())
}

/// All foods logged on one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    /// Calendar day
    pub date: NaiveDate,
    /// Logged foods in insertion order
    #[serde(default)]
    pub entries: Vec<FoodEntry>,
}

impl DailyLog {
    /// Empty log for a day
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    /// Append an entry and return its id
    pub fn add_entry(&mut self, entry: FoodEntry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Remove an entry by id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no entry has this id
    pub fn remove_entry(&mut self, id: Uuid) -> AppResult<FoodEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| AppError::not_found(format!("Food entry {id}")))?;
        Ok(self.entries.remove(index))
    }

    /// Entries logged for one meal
    pub fn entries_for(&self, meal_type: MealType) -> impl Iterator<Item = &FoodEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.meal_type == meal_type)
    }

    /// Nutrients consumed at one meal
    #[must_use]
    pub fn meal_totals(&self, meal_type: MealType) -> NutrientTotals {
        self.entries_for(meal_type)
            .fold(NutrientTotals::default(), |acc, entry| acc + entry.consumed())
    }

    /// Nutrients consumed over the whole day
    #[must_use]
    pub fn totals(&self) -> NutrientTotals {
        self.entries
            .iter()
            .fold(NutrientTotals::default(), |acc, entry| acc + entry.consumed())
    }
}

/// Daily calorie and macro targets stored in user settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    /// Calories (kcal)
    pub calories: u32,
    /// Protein (g)
    pub protein_grams: u32,
    /// Fat (g)
    pub fat_grams: u32,
    /// Carbohydrates (g)
    pub carb_grams: u32,
}

impl Default for MacroTargets {
    fn default() -> Self {
        // 2000 kcal on the balanced 30/30/40 split
        Self {
            calories: 2000,
            protein_grams: 150,
            fat_grams: 67,
            carb_grams: 200,
        }
    }
}

impl From<CalculatedMacros> for MacroTargets {
    fn from(macros: CalculatedMacros) -> Self {
        Self {
            calories: macros.calories,
            protein_grams: macros.protein_grams,
            fat_grams: macros.fat_grams,
            carb_grams: macros.carb_grams,
        }
    }
}
