use crate::models::{FoodItem, MacroTargets, MealSelection};

/// Running macro sums over a set of foods.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroTotals {
    pub protein_g: f64,
    pub fat_g: f64,
    pub calories: f64,
}

impl MacroTotals {
    /// Totals if `food` were added.
    #[inline]
    pub fn plus(&self, food: &FoodItem) -> Self {
        Self {
            protein_g: self.protein_g + food.protein_g,
            fat_g: self.fat_g + food.fat_g,
            calories: self.calories + food.calories,
        }
    }

    /// True while at least one macro is strictly below its target.
    ///
    /// A macro that lands exactly on target counts as met.
    #[inline]
    pub fn any_short_of(&self, target: &MacroTargets) -> bool {
        self.protein_g < target.protein_g
            || self.fat_g < target.fat_g
            || self.calories < target.calories
    }

    /// True if any macro strictly exceeds its target.
    #[inline]
    pub fn exceeds_any(&self, target: &MacroTargets) -> bool {
        self.protein_g > target.protein_g
            || self.fat_g > target.fat_g
            || self.calories > target.calories
    }

    /// L1 distance to the target over the three macros.
    #[inline]
    pub fn l1_distance(&self, target: &MacroTargets) -> f64 {
        (target.protein_g - self.protein_g).abs()
            + (target.fat_g - self.fat_g).abs()
            + (target.calories - self.calories).abs()
    }
}

/// Macro sums for a finished selection. Empty selections sum to zero.
pub fn aggregate(selection: &MealSelection) -> MacroTotals {
    selection
        .items
        .iter()
        .fold(MacroTotals::default(), |totals, food| totals.plus(food))
}
