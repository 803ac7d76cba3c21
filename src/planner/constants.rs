use crate::models::MealSlot;

/// Share of the daily target allotted to each meal slot.
///
/// The four shares sum to 1.18, not 1.0; per-meal targets are cut from
/// the daily totals with exactly these ratios.
pub const BREAKFAST_SHARE: f64 = 0.28;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.35;
pub const SNACKS_SHARE: f64 = 0.20;

/// Foods column value for a meal that came back empty.
pub const NO_COMBINATION_FOUND: &str = "No optimal combination found.";

/// Separator between food names in the Foods column.
pub const FOOD_LIST_SEPARATOR: &str = ", ";

/// Share of the daily target for one slot.
pub fn meal_share(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => BREAKFAST_SHARE,
        MealSlot::Lunch => LUNCH_SHARE,
        MealSlot::Dinner => DINNER_SHARE,
        MealSlot::Snacks => SNACKS_SHARE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_share_table() {
        assert_float_absolute_eq!(meal_share(MealSlot::Breakfast), 0.28, 1e-12);
        assert_float_absolute_eq!(meal_share(MealSlot::Lunch), 0.35, 1e-12);
        assert_float_absolute_eq!(meal_share(MealSlot::Dinner), 0.35, 1e-12);
        assert_float_absolute_eq!(meal_share(MealSlot::Snacks), 0.20, 1e-12);
    }

    #[test]
    fn test_shares_sum_above_one() {
        let sum: f64 = MealSlot::ALL.iter().map(|&slot| meal_share(slot)).sum();
        assert_float_absolute_eq!(sum, 1.18, 1e-12);
    }
}
