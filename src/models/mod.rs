pub mod food;
pub mod plan;

pub use food::{FoodItem, MealSlot};
pub use plan::{MacroTargets, MealReport, MealSelection};
