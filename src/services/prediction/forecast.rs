//! Multi-quarter compounding forecast.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::estimator::round_to_cents;
use crate::models::prediction::{ForecastPoint, SalesInput};
use crate::noise::NoiseSource;

/// Periods projected when the caller does not configure otherwise.
pub const DEFAULT_PERIODS: usize = 6;

/// Per-period growth is `1 + uniform(GROWTH_LOW, GROWTH_HIGH)`.
const GROWTH_LOW: f64 = -0.05;
const GROWTH_HIGH: f64 = 0.15;

/// Calendar quarter used to label forecast periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quarter {
    year: i32,
    /// 1..=4
    quarter: u32,
}

impl Quarter {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: date.month0() / 3 + 1,
        }
    }

    /// The quarter `n` quarters later, with exact year rollover.
    pub fn advanced(self, n: u32) -> Self {
        let index = self.year * 4 + (self.quarter as i32 - 1) + n as i32;
        Self {
            year: index.div_euclid(4),
            quarter: index.rem_euclid(4) as u32 + 1,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter)
    }
}

/// Project `periods` quarters of sales starting from the quarter containing
/// `start`.
///
/// The running value begins at `previous_quarter_sales` and each period
/// compounds on the previous period's already-perturbed value, so the drift
/// is multiplicative rather than independent per-period noise. Consumes one
/// draw per period.
pub fn generate_forecast(
    input: &SalesInput,
    noise: &dyn NoiseSource,
    periods: usize,
    start: NaiveDate,
) -> Vec<ForecastPoint> {
    let start_quarter = Quarter::from_date(start);
    let mut running = input.previous_quarter_sales;

    (0..periods)
        .map(|i| {
            let growth = 1.0 + noise.uniform(GROWTH_LOW, GROWTH_HIGH);
            running *= growth;
            ForecastPoint {
                quarter: start_quarter.advanced(i as u32).to_string(),
                sales: round_to_cents(running),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prediction::Season;
    use crate::noise::{ScriptedNoise, ThreadRngNoise};

    fn sample_input() -> SalesInput {
        SalesInput {
            marketing_spend: 5_000.0,
            social_media_presence: 6,
            competitor_activity: 4,
            season: Season::Spring,
            previous_quarter_sales: 10_000.0,
        }
    }

    #[test]
    fn quarter_advancing_rolls_the_year() {
        let q4 = Quarter::from_date(NaiveDate::from_ymd_opt(2026, 11, 15).unwrap());
        assert_eq!(q4.to_string(), "2026-Q4");
        assert_eq!(q4.advanced(1).to_string(), "2027-Q1");
        assert_eq!(q4.advanced(5).to_string(), "2028-Q1");

        let q1 = Quarter::from_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(q1.to_string(), "2026-Q1");
        assert_eq!(q1.advanced(3).to_string(), "2026-Q4");
        assert_eq!(q1.advanced(4).to_string(), "2027-Q1");
    }

    #[test]
    fn labels_are_distinct_and_strictly_increasing() {
        let noise = ThreadRngNoise;
        let start = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let forecast = generate_forecast(&sample_input(), &noise, DEFAULT_PERIODS, start);

        assert_eq!(forecast.len(), DEFAULT_PERIODS);
        let quarters: Vec<Quarter> = (0..DEFAULT_PERIODS as u32)
            .map(|i| Quarter::from_date(start).advanced(i))
            .collect();
        for (point, quarter) in forecast.iter().zip(&quarters) {
            assert_eq!(point.quarter, quarter.to_string());
        }
        for pair in quarters.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn each_period_compounds_on_the_previous_perturbed_value() {
        let draws = [0.10, -0.05, 0.15, 0.0, 0.02, -0.01];
        let noise = ScriptedNoise::new(draws);
        let start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let input = sample_input();
        let forecast = generate_forecast(&input, &noise, draws.len(), start);

        let mut running = input.previous_quarter_sales;
        for (point, draw) in forecast.iter().zip(draws) {
            running *= 1.0 + draw;
            assert_eq!(point.sales, round_to_cents(running));
        }
    }

    #[test]
    fn zero_previous_sales_project_flat_zero() {
        let noise = ThreadRngNoise;
        let mut input = sample_input();
        input.previous_quarter_sales = 0.0;
        let start = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();

        for point in generate_forecast(&input, &noise, DEFAULT_PERIODS, start) {
            assert_eq!(point.sales, 0.0);
        }
    }
}
