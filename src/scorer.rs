//! Climate Justice Scorer
//!
//! Combines a normalized emissions component and an inverted readiness
//! component into one 0-100 score using their harmonic mean:
//!
//! ```text
//! C = 1 - (log10(MtCO2 + 1) - min_log) / range     (0 when range <= 0)
//! G = 1 - NDGainScore / 100
//! score = 100 * 2CG / (C + G)                      (0 when C + G == 0)
//! ```
//!
//! The harmonic mean stays low unless both components are high: a country
//! scores well only if it is a low emitter AND has low readiness.

use crate::data::Country;
use crate::utils::normalization::{log_co2_scaling, LogScaling};
use serde::Serialize;

/// Score breakdown for one country
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreComponents {
    /// Emissions component `C` in [0, 1]; high for low emitters
    pub emissions: f64,
    /// Readiness component `G`; high for low ND-GAIN scores
    pub readiness: f64,
    /// Final score, `100 * harmonic_mean(C, G)`
    pub score: f64,
}

/// Emissions component `C`
pub fn emissions_component(country: &Country, min_log: f64, range: f64) -> f64 {
    if range <= 0.0 {
        return 0.0;
    }
    1.0 - (country.log_co2() - min_log) / range
}

/// Readiness component `G`. Not clamped: scores outside [0, 100] propagate.
pub fn readiness_component(country: &Country) -> f64 {
    1.0 - country.nd_gain_score / 100.0
}

fn harmonic_score(c: f64, g: f64) -> f64 {
    let sum = c + g;
    if sum == 0.0 {
        return 0.0;
    }
    2.0 * c * g / sum * 100.0
}

/// Climate justice score of `country` against a collection's log-CO2 bounds
pub fn clima_justice_score(country: &Country, min_log: f64, range: f64) -> f64 {
    let c = emissions_component(country, min_log, range);
    let g = readiness_component(country);
    harmonic_score(c, g)
}

/// Full breakdown of the score
pub fn score_components(country: &Country, scaling: &LogScaling) -> ScoreComponents {
    let emissions = emissions_component(country, scaling.min_log, scaling.range);
    let readiness = readiness_component(country);

    ScoreComponents {
        emissions,
        readiness,
        score: harmonic_score(emissions, readiness),
    }
}

/// Scorer bound to one collection's scaling
///
/// Build one per collection version; scores from different collections are
/// not comparable.
#[derive(Debug, Clone, Copy)]
pub struct ClimaJusticeScorer {
    scaling: LogScaling,
}

impl ClimaJusticeScorer {
    pub fn new(countries: &[Country]) -> Self {
        Self::with_scaling(log_co2_scaling(countries))
    }

    pub fn with_scaling(scaling: LogScaling) -> Self {
        Self { scaling }
    }

    pub fn scaling(&self) -> LogScaling {
        self.scaling
    }

    pub fn score(&self, country: &Country) -> f64 {
        clima_justice_score(country, self.scaling.min_log, self.scaling.range)
    }

    pub fn components(&self, country: &Country) -> ScoreComponents {
        score_components(country, &self.scaling)
    }
}
