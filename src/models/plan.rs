use serde::{Deserialize, Serialize};

use crate::models::food::{FoodItem, MealSlot};

/// Macro targets in grams of protein, grams of fat and kcal.
///
/// Used both for the daily totals coming out of the predictors and for
/// the per-meal slices handed to the assembler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub fat_g: f64,
    pub calories: f64,
}

impl MacroTargets {
    pub fn new(protein_g: f64, fat_g: f64, calories: f64) -> Self {
        Self {
            protein_g,
            fat_g,
            calories,
        }
    }

    /// All three dimensions scaled by the same ratio.
    #[inline]
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            protein_g: self.protein_g * ratio,
            fat_g: self.fat_g * ratio,
            calories: self.calories * ratio,
        }
    }
}

/// Foods chosen for one meal slot, in the order they were picked.
///
/// Borrows from the catalog; a selection never outlives the catalog it
/// was assembled from.
#[derive(Debug, Clone, Default)]
pub struct MealSelection<'a> {
    pub items: Vec<&'a FoodItem>,
}

impl<'a> MealSelection<'a> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a food of this exact name was already picked.
    pub fn contains_name(&self, name: &str) -> bool {
        self.items.iter().any(|food| food.name == name)
    }

    /// Food names in selection order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|food| food.name.as_str()).collect()
    }
}

/// One row of the finished plan, shaped like the payload the frontend
/// renders. Field renames keep the deployed key names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealReport {
    #[serde(rename = "Meal")]
    pub meal: MealSlot,

    #[serde(rename = "Total Protein (g)")]
    pub total_protein: f64,

    #[serde(rename = "Total Fat (g)")]
    pub total_fat: f64,

    #[serde(rename = "Total Calories")]
    pub total_calories: f64,

    #[serde(rename = "Foods")]
    pub foods: String,
}
