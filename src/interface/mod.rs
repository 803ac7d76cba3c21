pub mod prompts;
pub mod render;

pub use prompts::{
    complete_profile, prompt_activity_level, prompt_age, prompt_gender, prompt_height_cm,
    prompt_weight_kg,
};
pub use render::{display_food_list, display_plan};
