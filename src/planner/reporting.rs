use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::models::{MacroTargets, MealReport, MealSelection, MealSlot};
use crate::planner::assembler::assemble;
use crate::planner::constants::{FOOD_LIST_SEPARATOR, NO_COMBINATION_FOUND};
use crate::planner::nutrition::aggregate;
use crate::planner::targets::per_meal_target;

/// Report row for one finished selection.
///
/// An empty selection becomes a row with zero totals and the fixed
/// not-found message in the Foods column.
pub fn build_report(slot: MealSlot, selection: &MealSelection) -> MealReport {
    if selection.is_empty() {
        return MealReport {
            meal: slot,
            total_protein: 0.0,
            total_fat: 0.0,
            total_calories: 0.0,
            foods: NO_COMBINATION_FOUND.to_string(),
        };
    }

    let totals = aggregate(selection);
    MealReport {
        meal: slot,
        total_protein: totals.protein_g,
        total_fat: totals.fat_g,
        total_calories: totals.calories,
        foods: selection.names().join(FOOD_LIST_SEPARATOR),
    }
}

/// Assemble every meal slot against the daily targets.
///
/// Rows come back in slot order: Breakfast, Lunch, Dinner, Snacks.
pub fn plan_meals(catalog: &FoodCatalog, daily: &MacroTargets) -> Vec<MealReport> {
    MealSlot::ALL
        .iter()
        .map(|&slot| {
            let target = per_meal_target(daily, slot);
            let candidates = catalog.slot_candidates(slot);
            let selection = assemble(&candidates, &target);
            debug!("{}: {} foods selected", slot, selection.len());
            build_report(slot, &selection)
        })
        .collect()
}
