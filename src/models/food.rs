use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// The four meal slots a catalog row can belong to.
///
/// `ALL` fixes the slot order used everywhere a plan is walked, so
/// reports always come out Breakfast, Lunch, Dinner, Snacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for MealSlot {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snacks" => Ok(MealSlot::Snacks),
            _ => Err(PlannerError::InvalidInput(format!(
                "unknown meal slot '{}'",
                s
            ))),
        }
    }
}

/// A catalog row: one food with its macros and the meal it belongs to.
///
/// Field renames match the catalog CSV headers, which double as the
/// wire names the frontend already consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Food")]
    pub name: String,

    #[serde(rename = "Protein (g)")]
    pub protein_g: f64,

    #[serde(rename = "Fat (g)")]
    pub fat_g: f64,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Meal Time")]
    pub meal_slot: MealSlot,
}
