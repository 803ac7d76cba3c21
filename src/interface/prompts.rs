use dialoguer::{Input, Select};

use crate::error::{PlannerError, Result};
use crate::metabolism::{ActivityLevel, BodyProfile, Gender};

/// Prompt for body weight in kilograms.
pub fn prompt_weight_kg() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Body weight (kg)")
        .default("70".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for height in centimeters.
pub fn prompt_height_cm() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Height (cm)")
        .default("175".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<Gender> {
    let options = [Gender::Male.label(), Gender::Female.label()];

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Gender::Male,
        _ => Gender::Female,
    })
}

/// Prompt for activity level.
pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|level| level.label()).collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => ActivityLevel::Sedentary,
        1 => ActivityLevel::LightlyActive,
        2 => ActivityLevel::ModeratelyActive,
        3 => ActivityLevel::VeryActive,
        _ => ActivityLevel::ExtraActive,
    })
}

/// Build a full profile, prompting for any field not already supplied.
///
/// Flag-supplied gender and activity strings are parsed the same way
/// the HTTP boundary parses them, so a typo fails with the same error.
pub fn complete_profile(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<f64>,
    gender: Option<String>,
    activity_level: Option<String>,
) -> Result<BodyProfile> {
    let weight_kg = match weight_kg {
        Some(value) => value,
        None => prompt_weight_kg()?,
    };
    let height_cm = match height_cm {
        Some(value) => value,
        None => prompt_height_cm()?,
    };
    let age = match age {
        Some(value) => value,
        None => prompt_age()?,
    };
    let gender = match gender {
        Some(raw) => raw.parse()?,
        None => prompt_gender()?,
    };
    let activity = match activity_level {
        Some(raw) => raw.parse()?,
        None => prompt_activity_level()?,
    };

    Ok(BodyProfile {
        weight_kg,
        height_cm,
        age,
        gender,
        activity,
    })
}
