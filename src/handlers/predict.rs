use axum::{extract::State, response::Json};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::ServiceError;
use crate::models::prediction::{PredictionOutcome, SalesInput, Season};
use crate::AppState;

/// Request body for `POST /predict`.
///
/// The 0-10 scores are deliberately unclamped; only the marketing budget is
/// rejected when negative.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SalesRequest {
    /// Quarterly marketing budget in dollars.
    #[validate(range(min = 0.0))]
    #[schema(example = 5000.0)]
    pub marketing_spend: f64,

    /// Social media strength on a 0-10 scale.
    #[schema(example = 7)]
    pub social_media_presence: i32,

    /// Competitor pressure on a 0-10 scale.
    #[schema(example = 4)]
    pub competitor_activity: i32,

    /// Season tag: spring, summer, fall, or winter (case-insensitive);
    /// anything else falls back to a neutral multiplier.
    #[schema(example = "summer")]
    pub seasonal_factor: String,

    /// Revenue booked in the previous quarter. May be zero or negative.
    #[schema(example = 50000.0)]
    pub previous_quarter_sales: f64,
}

impl SalesRequest {
    fn into_input(self) -> SalesInput {
        SalesInput {
            marketing_spend: self.marketing_spend,
            social_media_presence: self.social_media_presence,
            competitor_activity: self.competitor_activity,
            season: Season::from_tag(&self.seasonal_factor),
            previous_quarter_sales: self.previous_quarter_sales,
        }
    }
}

/// Score a sales input and return the estimate with its scenario and
/// forecast views.
#[utoipa::path(
    post,
    path = "/predict",
    request_body = SalesRequest,
    responses(
        (status = 200, description = "Prediction computed", body = PredictionOutcome),
        (status = 400, description = "Payload failed validation", body = crate::errors::ErrorResponse),
        (status = 500, description = "Prediction failed", body = crate::errors::ErrorResponse)
    ),
    tag = "Prediction"
)]
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<SalesRequest>,
) -> Result<Json<PredictionOutcome>, ServiceError> {
    payload.validate()?;

    let input = payload.into_input();
    debug!(?input, "scoring prediction request");

    let outcome = state.prediction.predict(&input)?;
    Ok(Json(outcome))
}
