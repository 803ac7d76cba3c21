use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::error::PlannerError;
use crate::metabolism::{suggest_activity_level, BodyProfile};
use crate::models::MealReport;
use crate::planner::plan_meals;
use crate::server::AppState;

/// Body of `POST /calculate`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: f64,
    pub gender: String,
    pub activity_level: String,
}

/// Response of `POST /calculate`. Key casing matches what the deployed
/// frontend reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    #[serde(rename = "BMI")]
    pub bmi: f64,

    #[serde(rename = "BMR")]
    pub bmr: f64,

    #[serde(rename = "TDEE")]
    pub tdee: f64,

    pub meal_plan: Vec<MealReport>,
}

pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let response = process_calculate(&state, &request)?;
    Ok(Json(response))
}

/// The whole request pipeline, synchronous and side-effect free; the
/// handler above is only the axum shim around it.
pub fn process_calculate(
    state: &AppState,
    request: &CalculateRequest,
) -> Result<CalculateResponse, PlannerError> {
    let profile = BodyProfile {
        weight_kg: request.weight_kg,
        height_cm: request.height_cm,
        age: request.age,
        gender: request.gender.parse()?,
        activity: request.activity_level.parse()?,
    };

    let metrics = profile.metrics();
    debug!(
        "metrics: BMI {:.2}, BMR {:.2}, TDEE {:.2}",
        metrics.bmi, metrics.bmr, metrics.tdee
    );

    let daily = state.models.daily_targets(&profile, &metrics);
    let meal_plan = plan_meals(&state.catalog, &daily);
    info!(
        "plan assembled: {:.0} g protein / {:.0} g fat / {:.0} cal daily target",
        daily.protein_g, daily.fat_g, daily.calories
    );

    Ok(CalculateResponse {
        bmi: metrics.bmi,
        bmr: metrics.bmr,
        tdee: metrics.tdee,
        meal_plan,
    })
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Maps the error taxonomy onto HTTP responses: vocabulary errors are
/// the caller's fault (400), everything else is ours (500).
#[derive(Debug)]
pub struct ApiError(pub PlannerError);

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            PlannerError::InvalidGender(_)
            | PlannerError::InvalidActivityLevel(_)
            | PlannerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON payload for the response. Activity-level typos get a
    /// closest-label hint when one clears the similarity bar.
    fn body(&self) -> serde_json::Value {
        let mut body = json!({ "error": self.0.to_string() });

        if let PlannerError::InvalidActivityLevel(input) = &self.0 {
            if let Some(suggestion) = suggest_activity_level(input) {
                body["hint"] = json!(format!("did you mean '{}'?", suggestion));
            }
        }

        body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
