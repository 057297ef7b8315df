//! Value types for the prediction core and its wire contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Season tag supplied by the caller.
///
/// Parsing is case-insensitive and total: anything outside the four known
/// tags maps to [`Season::Unknown`], which carries a neutral multiplier
/// rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    Unknown,
}

impl Season {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "spring" => Season::Spring,
            "summer" => Season::Summer,
            "fall" => Season::Fall,
            "winter" => Season::Winter,
            _ => Season::Unknown,
        }
    }

    /// Seasonal multiplier applied to the base estimate.
    pub fn multiplier(self) -> f64 {
        match self {
            Season::Spring => 1.05,
            Season::Summer => 1.15,
            Season::Fall => 1.10,
            Season::Winter => 0.90,
            Season::Unknown => 1.0,
        }
    }
}

/// Immutable estimator input, constructed fresh per request and per
/// scenario variant.
///
/// The 0-10 scales are expectations, not constraints: out-of-range and
/// negative values flow through the arithmetic unrejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesInput {
    pub marketing_spend: f64,
    pub social_media_presence: i32,
    pub competitor_activity: i32,
    pub season: Season,
    pub previous_quarter_sales: f64,
}

/// One named what-if perturbation, re-scored through the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScenarioOutcome {
    /// Scenario label, e.g. "Higher Marketing".
    #[schema(example = "Higher Marketing")]
    pub scenario: String,
    /// Estimated sales under the perturbed input.
    #[schema(example = 13245.87)]
    pub sales: f64,
}

/// One future quarter of the compounding forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastPoint {
    /// Calendar quarter label, e.g. "2026-Q3".
    #[schema(example = "2026-Q3")]
    pub quarter: String,
    /// Projected sales for the quarter, rounded to cents.
    #[schema(example = 11873.44)]
    pub sales: f64,
}

/// Full prediction produced for one request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictionOutcome {
    /// Headline estimate, rounded to 2 decimal places.
    #[schema(example = 12650.5)]
    pub predicted_sales: f64,
    /// Synthetic confidence score in [80, 95].
    #[schema(example = 88)]
    pub confidence: i64,
    /// Exactly five scenarios, in a fixed order clients rely on.
    pub similar_scenarios: Vec<ScenarioOutcome>,
    /// One entry per forecast period, labels strictly increasing.
    pub sales_forecast: Vec<ForecastPoint>,
}
