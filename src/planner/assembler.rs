use crate::models::{FoodItem, MacroTargets, MealSelection};
use crate::planner::nutrition::MacroTotals;

/// Greedily select foods for one meal slot.
///
/// Starting from zero running totals, keep adding the candidate whose
/// hypothetical new totals sit closest to the target in L1 distance.
/// A candidate is skipped when its name was already picked or when
/// adding it would push any macro strictly past its target. The loop
/// runs while at least one macro is still short and stops the moment no
/// candidate fits, returning whatever accumulated so far.
///
/// Never fails: an unreachable target yields a partial or empty
/// selection. Ties in distance go to the candidate seen first, so the
/// result is fully determined by candidate order.
pub fn assemble<'a>(candidates: &[&'a FoodItem], target: &MacroTargets) -> MealSelection<'a> {
    let mut selection = MealSelection::default();
    let mut totals = MacroTotals::default();

    while totals.any_short_of(target) {
        let mut best_food: Option<&'a FoodItem> = None;
        let mut best_distance = f64::INFINITY;

        for &food in candidates {
            if selection.contains_name(&food.name) {
                continue;
            }

            let hypothetical = totals.plus(food);
            if hypothetical.exceeds_any(target) {
                continue;
            }

            // Strict improvement only, so earlier candidates win ties
            let distance = hypothetical.l1_distance(target);
            if distance < best_distance {
                best_distance = distance;
                best_food = Some(food);
            }
        }

        let food = match best_food {
            Some(food) => food,
            None => break,
        };

        totals = totals.plus(food);
        selection.items.push(food);
    }

    selection
}
