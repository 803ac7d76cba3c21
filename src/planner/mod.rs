pub mod assembler;
pub mod constants;
pub mod nutrition;
pub mod reporting;
pub mod targets;

pub use assembler::assemble;
pub use constants::{meal_share, FOOD_LIST_SEPARATOR, NO_COMBINATION_FOUND};
pub use nutrition::{aggregate, MacroTotals};
pub use reporting::{build_report, plan_meals};
pub use targets::per_meal_target;
