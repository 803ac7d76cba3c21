use crate::models::{MacroTargets, MealSlot};
use crate::planner::constants::meal_share;

/// Target for one meal slot: the daily target scaled by the slot's share.
///
/// Shares are applied to protein, fat and calories alike.
pub fn per_meal_target(daily: &MacroTargets, slot: MealSlot) -> MacroTargets {
    daily.scaled(meal_share(slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_per_meal_target() {
        let daily = MacroTargets::new(140.0, 40.0, 2500.0);

        let breakfast = per_meal_target(&daily, MealSlot::Breakfast);
        assert_float_absolute_eq!(breakfast.protein_g, 39.2, 1e-9);
        assert_float_absolute_eq!(breakfast.fat_g, 11.2, 1e-9);
        assert_float_absolute_eq!(breakfast.calories, 700.0, 1e-9);

        let snacks = per_meal_target(&daily, MealSlot::Snacks);
        assert_float_absolute_eq!(snacks.protein_g, 28.0, 1e-9);
        assert_float_absolute_eq!(snacks.fat_g, 8.0, 1e-9);
        assert_float_absolute_eq!(snacks.calories, 500.0, 1e-9);
    }

    #[test]
    fn test_lunch_and_dinner_share_a_ratio() {
        let daily = MacroTargets::new(100.0, 30.0, 2000.0);
        assert_eq!(
            per_meal_target(&daily, MealSlot::Lunch),
            per_meal_target(&daily, MealSlot::Dinner)
        );
    }
}
