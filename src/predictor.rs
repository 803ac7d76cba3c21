//! Daily macro target prediction.
//!
//! The planner never looks inside a model: anything implementing
//! [`MacroPredictor`] can supply the goal, fat and protein estimates.
//! The default set is three linear regressions with fitted coefficients
//! checked in below; a set can also be loaded from JSON files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::metabolism::{BodyProfile, MetabolicProfile};
use crate::models::MacroTargets;

/// An opaque regression model: feature vector in, scalar out.
pub trait MacroPredictor {
    fn predict(&self, features: &[f64]) -> f64;
}

/// Linear regression: intercept plus the dot product of coefficients
/// and features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl MacroPredictor for LinearModel {
    fn predict(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(coefficient, feature)| coefficient * feature)
                .sum::<f64>()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fitted coefficients (offline regression run)
// Last updated: 2026-07-30; feature order is documented on TargetModelSet
// ─────────────────────────────────────────────────────────────────────────────

const GOAL_INTERCEPT: f64 = 212.71;
const GOAL_COEFFICIENTS: [f64; 6] = [0.8463, 11.08, -0.0964, -1.882, 47.35, 28.6];

const FAT_INTERCEPT: f64 = -6.34;
const FAT_COEFFICIENTS: [f64; 5] = [0.00418, 0.913, -0.00207, 0.00414, 1.27];

const PROTEIN_INTERCEPT: f64 = -3.12;
const PROTEIN_COEFFICIENTS: [f64; 5] = [0.02409, 0.417, 0.00783, 0.01822, 2.54];

/// The three predictors behind a daily target estimate.
///
/// Feature vectors, in order:
/// - goal:    `[tdee, bmi, bmr, age, gender_encoded, activity_encoded]`
/// - fat:     `[tdee, bmi, bmr, goal_value, activity_encoded]`
/// - protein: `[tdee, bmi, bmr, goal_value, activity_encoded]`
///
/// The goal model feeds the fat and protein models; calories come
/// straight from TDEE.
#[derive(Debug, Clone)]
pub struct TargetModelSet<P = LinearModel> {
    pub goal: P,
    pub fat: P,
    pub protein: P,
}

impl TargetModelSet<LinearModel> {
    /// The built-in fitted models.
    pub fn fitted() -> Self {
        Self {
            goal: LinearModel {
                intercept: GOAL_INTERCEPT,
                coefficients: GOAL_COEFFICIENTS.to_vec(),
            },
            fat: LinearModel {
                intercept: FAT_INTERCEPT,
                coefficients: FAT_COEFFICIENTS.to_vec(),
            },
            protein: LinearModel {
                intercept: PROTEIN_INTERCEPT,
                coefficients: PROTEIN_COEFFICIENTS.to_vec(),
            },
        }
    }

    /// Load `goal_model.json`, `fat_model.json` and `protein_model.json`
    /// from a directory.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            goal: load_model(dir.join("goal_model.json"))?,
            fat: load_model(dir.join("fat_model.json"))?,
            protein: load_model(dir.join("protein_model.json"))?,
        })
    }
}

impl Default for TargetModelSet<LinearModel> {
    fn default() -> Self {
        Self::fitted()
    }
}

impl<P: MacroPredictor> TargetModelSet<P> {
    /// Daily macro targets for one profile.
    pub fn daily_targets(&self, profile: &BodyProfile, metrics: &MetabolicProfile) -> MacroTargets {
        let goal_features = [
            metrics.tdee,
            metrics.bmi,
            metrics.bmr,
            profile.age,
            profile.gender.encoded(),
            profile.activity.encoded(),
        ];
        debug!("goal model features: {:?}", goal_features);
        let goal_value = self.goal.predict(&goal_features);

        let macro_features = [
            metrics.tdee,
            metrics.bmi,
            metrics.bmr,
            goal_value,
            profile.activity.encoded(),
        ];
        debug!("fat/protein model features: {:?}", macro_features);
        let fat_g = self.fat.predict(&macro_features);
        let protein_g = self.protein.predict(&macro_features);

        MacroTargets {
            protein_g,
            fat_g,
            calories: metrics.tdee,
        }
    }
}

fn load_model<P: AsRef<Path>>(path: P) -> Result<LinearModel> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
