//! Fixed what-if exploration policy.
//!
//! Five named perturbations of the original input, each re-scored through
//! the estimator except the literal previous-quarter pass-through. The
//! sequence and its order are part of the client contract; this is not a
//! general sensitivity-analysis engine.

use super::estimator;
use crate::models::prediction::{SalesInput, ScenarioOutcome, Season};
use crate::noise::NoiseSource;

/// Number of scenarios in every response.
pub const SCENARIO_COUNT: usize = 5;

const MARKETING_BOOST: f64 = 1.2;
const COMPETITION_RELIEF: i32 = 2;
const COMPETITION_FLOOR: i32 = 1;
const SOCIAL_BOOST: i32 = 2;
const SOCIAL_CAP: i32 = 10;

/// Build and score the five scenarios, in contract order.
///
/// Consumes one estimator draw per scenario except "Previous Quarter",
/// which reports the input value verbatim with no draw and no rounding.
pub fn generate_scenarios(input: &SalesInput, noise: &dyn NoiseSource) -> Vec<ScenarioOutcome> {
    let higher_marketing = SalesInput {
        marketing_spend: input.marketing_spend * MARKETING_BOOST,
        ..*input
    };
    let lower_competition = SalesInput {
        competitor_activity: (input.competitor_activity - COMPETITION_RELIEF).max(COMPETITION_FLOOR),
        ..*input
    };
    let higher_social = SalesInput {
        social_media_presence: (input.social_media_presence + SOCIAL_BOOST).min(SOCIAL_CAP),
        ..*input
    };
    let different_season = SalesInput {
        season: flip_season(input.season),
        ..*input
    };

    vec![
        ScenarioOutcome {
            scenario: "Higher Marketing".to_string(),
            sales: estimator::estimate(&higher_marketing, noise),
        },
        ScenarioOutcome {
            scenario: "Lower Competition".to_string(),
            sales: estimator::estimate(&lower_competition, noise),
        },
        ScenarioOutcome {
            scenario: "Higher Social Media".to_string(),
            sales: estimator::estimate(&higher_social, noise),
        },
        ScenarioOutcome {
            scenario: "Previous Quarter".to_string(),
            sales: input.previous_quarter_sales,
        },
        ScenarioOutcome {
            scenario: "Different Season".to_string(),
            sales: estimator::estimate(&different_season, noise),
        },
    ]
}

/// Summer unless the input is already summer, winter otherwise.
fn flip_season(season: Season) -> Season {
    if season == Season::Summer {
        Season::Winter
    } else {
        Season::Summer
    }
}
