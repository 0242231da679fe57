// ABOUTME: Macro percentage helpers for gram conversion and slider-style redistribution
// ABOUTME: Keeps every percentage triple at exactly 100 with a fixed residual policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro distribution helpers
//!
//! All functions here produce whole-number triples that sum to exactly 100.
//! Each percentage is rounded on its own and a single macro absorbs the
//! residual, so the other two never drift between recalculations.

use macrotrack_core::constants::{energy, percent};
use macrotrack_core::models::{Macro, MacroPercentages};

/// Percentages of `total_kcal`, carbs absorbing the rounding residual
///
/// `total_kcal` must be positive; callers clamp it before calling.
#[must_use]
pub fn percentages_of_total(
    protein_kcal: f64,
    fat_kcal: f64,
    carb_kcal: f64,
    total_kcal: f64,
) -> MacroPercentages {
    let protein = round_percent(protein_kcal / total_kcal * 100.0);
    let fat = round_percent(fat_kcal / total_kcal * 100.0);
    let carbs = round_percent(carb_kcal / total_kcal * 100.0);

    let residual = percent::TOTAL - (protein + fat + carbs);
    MacroPercentages::new(protein, fat, carbs + residual)
}

/// Convert (possibly fractional) macro grams into percentages of their energy
///
/// The denominator is the energy of the three macros themselves, not a
/// separate calorie total. Zero grams gives an all-zero triple since there is
/// nothing to describe.
#[must_use]
pub fn grams_to_percentages(protein_g: f64, fat_g: f64, carb_g: f64) -> MacroPercentages {
    let protein_kcal = sanitize(protein_g) * energy::PROTEIN_KCAL_PER_GRAM;
    let fat_kcal = sanitize(fat_g) * energy::FAT_KCAL_PER_GRAM;
    let carb_kcal = sanitize(carb_g) * energy::CARB_KCAL_PER_GRAM;

    let total = protein_kcal + fat_kcal + carb_kcal;
    if total <= 0.0 {
        return MacroPercentages::default();
    }
    percentages_of_total(protein_kcal, fat_kcal, carb_kcal, total)
}

/// Move one macro to `new_percent` and rebalance the other two
///
/// The two untouched macros share `100 - new_percent` in proportion to their
/// previous values, or evenly when both were zero. The rounding residual goes
/// to carbs, or to fat when carbs is the macro being changed.
#[must_use]
pub fn redistribute(
    current: MacroPercentages,
    changed: Macro,
    new_percent: i32,
) -> MacroPercentages {
    let target = new_percent.clamp(0, percent::TOTAL);
    let remaining = f64::from(percent::TOTAL - target);

    let (first, second) = others(changed);
    let first_prev = f64::from(current.get(first).max(0));
    let second_prev = f64::from(current.get(second).max(0));
    let prev_total = first_prev + second_prev;

    let (first_raw, second_raw) = if prev_total > 0.0 {
        (
            remaining * first_prev / prev_total,
            remaining * second_prev / prev_total,
        )
    } else {
        (remaining / 2.0, remaining / 2.0)
    };

    let mut result = MacroPercentages::default();
    set(&mut result, changed, target);
    set(&mut result, first, round_percent(first_raw));
    set(&mut result, second, round_percent(second_raw));

    let absorber = if changed == Macro::Carbs {
        Macro::Fat
    } else {
        Macro::Carbs
    };
    let absorbed = result.get(absorber) + percent::TOTAL - result.sum();
    set(&mut result, absorber, absorbed);
    result
}

/// The two macros other than `changed`, in protein/fat/carbs order
const fn others(changed: Macro) -> (Macro, Macro) {
    match changed {
        Macro::Protein => (Macro::Fat, Macro::Carbs),
        Macro::Fat => (Macro::Protein, Macro::Carbs),
        Macro::Carbs => (Macro::Protein, Macro::Fat),
    }
}

fn set(percentages: &mut MacroPercentages, nutrient: Macro, value: i32) {
    match nutrient {
        Macro::Protein => percentages.protein = value,
        Macro::Fat => percentages.fat = value,
        Macro::Carbs => percentages.carbs = value,
    }
}

fn round_percent(value: f64) -> i32 {
    if value.is_finite() {
        value.round() as i32
    } else {
        0
    }
}

fn sanitize(grams: f64) -> f64 {
    if grams.is_finite() && grams > 0.0 {
        grams
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_to_percentages_uses_macro_energy() {
        // 100 g protein = 400 kcal, 50 g fat = 450 kcal, 200 g carbs = 800 kcal
        let percentages = grams_to_percentages(100.0, 50.0, 200.0);
        assert_eq!(percentages, MacroPercentages::new(24, 27, 49));
        assert!(percentages.is_normalized());
    }

    #[test]
    fn test_grams_to_percentages_empty() {
        assert_eq!(
            grams_to_percentages(0.0, 0.0, 0.0),
            MacroPercentages::default()
        );
    }

    #[test]
    fn test_redistribute_proportional() {
        let adjusted = redistribute(MacroPercentages::new(30, 30, 40), Macro::Protein, 40);
        // fat 60 x 30/70 = 25.7, carbs 60 x 40/70 = 34.3
        assert_eq!(adjusted, MacroPercentages::new(40, 26, 34));
    }

    #[test]
    fn test_redistribute_changing_carbs_puts_residual_on_fat() {
        let adjusted = redistribute(MacroPercentages::new(33, 33, 34), Macro::Carbs, 51);
        // 49 split evenly: 24.5 each rounds to 25 + 25, fat gives one back
        assert_eq!(adjusted.carbs, 51);
        assert_eq!(adjusted.protein, 25);
        assert_eq!(adjusted.fat, 24);
    }

    #[test]
    fn test_redistribute_even_when_others_zero() {
        let adjusted = redistribute(MacroPercentages::new(100, 0, 0), Macro::Protein, 50);
        assert_eq!(adjusted, MacroPercentages::new(50, 25, 25));
    }

    #[test]
    fn test_redistribute_clamps() {
        let adjusted = redistribute(MacroPercentages::new(30, 30, 40), Macro::Fat, 140);
        assert_eq!(adjusted, MacroPercentages::new(0, 100, 0));

        let adjusted = redistribute(MacroPercentages::new(30, 30, 40), Macro::Fat, -5);
        assert_eq!(adjusted.fat, 0);
        assert!(adjusted.is_normalized());
    }
}
