pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod metabolism;
pub mod models;
pub mod planner;
pub mod predictor;
pub mod server;

pub use error::{PlannerError, Result};
pub use models::{FoodItem, MealSlot};
