//! The deterministic estimation formula.

use crate::models::prediction::SalesInput;
use crate::noise::NoiseSource;

/// Assumed quarter-over-quarter baseline growth.
const BASE_GROWTH: f64 = 1.1;
/// Dollars of marketing spend that buy one full `MARKETING_WEIGHT` of lift.
const MARKETING_SPEND_UNIT: f64 = 10_000.0;
const MARKETING_WEIGHT: f64 = 0.2;
/// Social media and competitor scores are read against a 0-10 scale.
const PRESENCE_SCALE: f64 = 10.0;
const SOCIAL_WEIGHT: f64 = 0.15;
const COMPETITOR_WEIGHT: f64 = 0.1;
/// Demo-realism jitter applied to every estimate.
const NOISE_LOW: f64 = 0.95;
const NOISE_HIGH: f64 = 1.05;

/// Round a currency amount to cents.
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score one input. Consumes exactly one draw from `noise`.
///
/// Total over all finite inputs: zero or negative previous-quarter sales
/// produce zero or negative estimates, and a competitor score past the
/// expected scale pushes the competitor factor toward (or below) zero.
/// Neither case is an error.
pub fn estimate(input: &SalesInput, noise: &dyn NoiseSource) -> f64 {
    let base = input.previous_quarter_sales * BASE_GROWTH;
    let marketing_factor = 1.0 + (input.marketing_spend / MARKETING_SPEND_UNIT) * MARKETING_WEIGHT;
    let social_factor = 1.0 + (f64::from(input.social_media_presence) / PRESENCE_SCALE) * SOCIAL_WEIGHT;
    let competitor_factor =
        1.0 - (f64::from(input.competitor_activity) / PRESENCE_SCALE) * COMPETITOR_WEIGHT;

    let raw = base * marketing_factor * social_factor * competitor_factor * input.season.multiplier();
    round_to_cents(raw * noise.uniform(NOISE_LOW, NOISE_HIGH))
}
