//! Sales prediction service: the headline estimate plus its scenario and
//! forecast views.
//!
//! The whole pipeline is a pure, synchronous computation over one
//! [`SalesInput`] and a [`NoiseSource`]; nothing here blocks, locks, or
//! outlives the request.

pub mod estimator;
pub mod forecast;
pub mod scenario;

use std::sync::Arc;

use chrono::Utc;

use crate::errors::ServiceError;
use crate::models::prediction::{PredictionOutcome, SalesInput};
use crate::noise::NoiseSource;

/// Inclusive bounds of the synthetic confidence draw.
const CONFIDENCE_LOW: i64 = 80;
const CONFIDENCE_HIGH: i64 = 95;

/// Composes the estimator, scenario generator, and forecast generator.
#[derive(Clone)]
pub struct PredictionService {
    noise: Arc<dyn NoiseSource>,
    forecast_periods: usize,
}

impl PredictionService {
    pub fn new(noise: Arc<dyn NoiseSource>, forecast_periods: usize) -> Self {
        Self {
            noise,
            forecast_periods,
        }
    }

    /// Score `input` and derive the scenario and forecast views.
    ///
    /// The draw order is fixed: headline estimate, confidence, scenarios,
    /// then one draw per forecast period. Only seeded sources can observe
    /// it, but they rely on it.
    pub fn predict(&self, input: &SalesInput) -> Result<PredictionOutcome, ServiceError> {
        let noise = self.noise.as_ref();

        let predicted_sales = estimator::estimate(input, noise);
        let confidence = noise.uniform_int(CONFIDENCE_LOW, CONFIDENCE_HIGH);
        let similar_scenarios = scenario::generate_scenarios(input, noise);
        let sales_forecast = forecast::generate_forecast(
            input,
            noise,
            self.forecast_periods,
            Utc::now().date_naive(),
        );

        Ok(PredictionOutcome {
            predicted_sales,
            confidence,
            similar_scenarios,
            sales_forecast,
        })
    }
}
