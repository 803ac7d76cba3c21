//! Body metrics: BMI, BMR (revised Harris-Benedict) and TDEE, plus the
//! gender / activity-level vocabularies and their model encodings.

use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};

/// Minimum fuzzy-match score before an activity-level suggestion is offered.
const SUGGESTION_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Numeric encoding the predictors were fitted with.
    #[inline]
    pub fn encoded(self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Gender {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(PlannerError::InvalidGender(s.to_string())),
        }
    }
}

/// The five recognized activity levels.
///
/// Each carries a TDEE multiplier and the ordinal encoding the
/// predictors were fitted with. Both tables are closed: any label
/// outside this set is a hard error at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly active",
            ActivityLevel::ModeratelyActive => "moderately active",
            ActivityLevel::VeryActive => "very active",
            ActivityLevel::ExtraActive => "extra active",
        }
    }

    /// Multiplier applied to BMR to get TDEE.
    #[inline]
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Numeric encoding the predictors were fitted with.
    #[inline]
    pub fn encoded(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 0.0,
            ActivityLevel::LightlyActive => 1.0,
            ActivityLevel::ModeratelyActive => 2.0,
            ActivityLevel::VeryActive => 3.0,
            ActivityLevel::ExtraActive => 4.0,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_lowercase();
        ActivityLevel::ALL
            .iter()
            .find(|level| level.label() == normalized)
            .copied()
            .ok_or_else(|| PlannerError::InvalidActivityLevel(s.to_string()))
    }
}

/// Closest known activity label for a misspelled input, if any label
/// scores above the fuzzy threshold.
pub fn suggest_activity_level(input: &str) -> Option<&'static str> {
    let mut candidates: Vec<(&'static str, f64)> = ActivityLevel::ALL
        .iter()
        .map(|level| {
            (
                level.label(),
                jaro_winkler(level.label(), &input.to_lowercase()),
            )
        })
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.first().map(|(label, _)| *label)
}

/// Everything the formulas and predictors need about one person.
#[derive(Debug, Clone, Copy)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: f64,
    pub gender: Gender,
    pub activity: ActivityLevel,
}

impl BodyProfile {
    /// Derived metrics for this profile.
    pub fn metrics(&self) -> MetabolicProfile {
        let bmi = bmi(self.weight_kg, self.height_cm);
        let bmr = bmr(self.weight_kg, self.height_cm, self.age, self.gender);
        let tdee = tdee(bmr, self.activity);
        MetabolicProfile { bmi, bmr, tdee }
    }
}

/// BMI, BMR and TDEE computed from one [`BodyProfile`].
#[derive(Debug, Clone, Copy)]
pub struct MetabolicProfile {
    pub bmi: f64,
    pub bmr: f64,
    pub tdee: f64,
}

/// Body mass index: weight over squared height in meters.
#[inline]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate, revised Harris-Benedict (1984) coefficients.
pub fn bmr(weight_kg: f64, height_cm: f64, age: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
#[inline]
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_bmi() {
        assert_float_absolute_eq!(bmi(80.0, 180.0), 24.691358024691358, 1e-9);
        assert_float_absolute_eq!(bmi(60.0, 165.0), 22.03856749311295, 1e-9);
    }

    #[test]
    fn test_bmr_male() {
        assert_float_absolute_eq!(bmr(80.0, 180.0, 30.0, Gender::Male), 1853.632, 1e-6);
    }

    #[test]
    fn test_bmr_female() {
        assert_float_absolute_eq!(bmr(60.0, 165.0, 25.0, Gender::Female), 1405.333, 1e-6);
    }

    #[test]
    fn test_tdee_multipliers() {
        assert_float_absolute_eq!(tdee(2000.0, ActivityLevel::Sedentary), 2400.0, 1e-9);
        assert_float_absolute_eq!(tdee(2000.0, ActivityLevel::LightlyActive), 2750.0, 1e-9);
        assert_float_absolute_eq!(tdee(2000.0, ActivityLevel::ModeratelyActive), 3100.0, 1e-9);
        assert_float_absolute_eq!(tdee(2000.0, ActivityLevel::VeryActive), 3450.0, 1e-9);
        assert_float_absolute_eq!(tdee(2000.0, ActivityLevel::ExtraActive), 3800.0, 1e-9);
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("male".parse::<Gender>().ok(), Some(Gender::Male));
        assert_eq!("FEMALE".parse::<Gender>().ok(), Some(Gender::Female));
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_activity_parse() {
        assert_eq!(
            "moderately active".parse::<ActivityLevel>().ok(),
            Some(ActivityLevel::ModeratelyActive)
        );
        assert_eq!(
            "Extra Active".parse::<ActivityLevel>().ok(),
            Some(ActivityLevel::ExtraActive)
        );
        assert!("athlete".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_encodings() {
        assert_float_absolute_eq!(Gender::Male.encoded(), 1.0, 1e-12);
        assert_float_absolute_eq!(Gender::Female.encoded(), 0.0, 1e-12);
        let encodings: Vec<f64> = ActivityLevel::ALL.iter().map(|a| a.encoded()).collect();
        assert_eq!(encodings, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_profile_metrics() {
        let profile = BodyProfile {
            weight_kg: 80.0,
            height_cm: 180.0,
            age: 30.0,
            gender: Gender::Male,
            activity: ActivityLevel::ModeratelyActive,
        };
        let metrics = profile.metrics();
        assert_float_absolute_eq!(metrics.bmi, bmi(80.0, 180.0), 1e-12);
        assert_float_absolute_eq!(metrics.bmr, 1853.632, 1e-6);
        assert_float_absolute_eq!(metrics.tdee, 1853.632 * 1.55, 1e-6);
    }

    #[test]
    fn test_suggestion_for_typo() {
        assert_eq!(
            suggest_activity_level("moderatly active"),
            Some("moderately active")
        );
        assert_eq!(suggest_activity_level("Sedentry"), Some("sedentary"));
    }

    #[test]
    fn test_no_suggestion_for_garbage() {
        assert_eq!(suggest_activity_level("xyzzy"), None);
    }
}
