//! Displayed metrics
//!
//! The two raw dataset values plus the derived climate justice score.

use crate::data::Country;
use crate::scorer::ClimaJusticeScorer;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    ClimaJusticeScore,
    TerritorialMtCO2,
    NdGainScore,
}

impl Metric {
    /// Display order: justice score, readiness, then emissions
    pub const ALL: [Metric; 3] = [
        Metric::ClimaJusticeScore,
        Metric::NdGainScore,
        Metric::TerritorialMtCO2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::ClimaJusticeScore => "Clima Justice Score",
            Metric::TerritorialMtCO2 => "Territorial MtCO2",
            Metric::NdGainScore => "ND-Gain Score",
        }
    }

    /// Whether a larger value is the favourable side in a comparison
    pub fn higher_is_better(&self) -> bool {
        match self {
            Metric::ClimaJusticeScore | Metric::NdGainScore => true,
            Metric::TerritorialMtCO2 => false,
        }
    }

    /// Value of this metric for `country`; the justice score uses `scorer`'s collection
    pub fn value(&self, country: &Country, scorer: &ClimaJusticeScorer) -> f64 {
        match self {
            Metric::ClimaJusticeScore => scorer.score(country),
            Metric::TerritorialMtCO2 => country.territorial_mt_co2,
            Metric::NdGainScore => country.nd_gain_score,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
