//! Data Loading and Management
//!
//! Decodes the bundled country dataset (a JSON array) into an immutable
//! `CountryData` collection. The log-CO2 scaling for the collection is
//! computed once at construction and reused by every score, sort, and rank.

use crate::comparison::{self, CountryComparison};
use crate::region::{self, Region};
use crate::scorer::{self, ScoreComponents};
use crate::sorting::{self, SortOption};
use crate::utils::normalization::{log_co2_scaling, LogScaling};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One nation's identity and raw climate metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(rename = "territorialMtCO2")]
    pub territorial_mt_co2: f64,
    #[serde(rename = "NDGainScore", alias = "ndGainScore")]
    pub nd_gain_score: f64,
}

impl Country {
    pub fn new(id: &str, name: &str, territorial_mt_co2: f64, nd_gain_score: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            territorial_mt_co2,
            nd_gain_score,
        }
    }

    /// Builder-style coordinate setter
    pub fn with_coordinate(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// `log10(territorial_mt_co2 + 1)`
    pub fn log_co2(&self) -> f64 {
        (self.territorial_mt_co2 + 1.0).log10()
    }
}

/// Errors raised while decoding or validating a country dataset
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("country at index {index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate country id '{0}'")]
    DuplicateId(String),
    #[error("country '{id}' has invalid territorialMtCO2 {value} (must be finite and >= 0)")]
    InvalidEmissions { id: String, value: f64 },
    #[error("country '{id}' has non-finite NDGainScore {value}")]
    InvalidReadiness { id: String, value: f64 },
}

/// Immutable country collection for one session
///
/// Holds the decoded countries plus their collection-wide log-CO2 scaling.
#[derive(Debug, Clone)]
pub struct CountryData {
    countries: Vec<Country>,
    scaling: LogScaling,
    by_id: FxHashMap<String, usize>,
}

impl CountryData {
    /// Load and validate a dataset from a JSON file
    pub fn load(path: &Path) -> Result<Self, DataError> {
        tracing::info!("Loading country dataset from {:?}", path);

        let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&contents)
    }

    /// Decode and validate a dataset from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        Self::from_countries(countries)
    }

    /// Validate an already-decoded collection and precompute its scaling
    pub fn from_countries(countries: Vec<Country>) -> Result<Self, DataError> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut by_id = FxHashMap::default();

        for (index, country) in countries.iter().enumerate() {
            if country.id.trim().is_empty() {
                return Err(DataError::EmptyId { index });
            }

            let key = country.id.to_lowercase();
            if !seen.insert(key.clone()) {
                return Err(DataError::DuplicateId(country.id.clone()));
            }

            if !country.territorial_mt_co2.is_finite() || country.territorial_mt_co2 < 0.0 {
                return Err(DataError::InvalidEmissions {
                    id: country.id.clone(),
                    value: country.territorial_mt_co2,
                });
            }

            if !country.nd_gain_score.is_finite() {
                return Err(DataError::InvalidReadiness {
                    id: country.id.clone(),
                    value: country.nd_gain_score,
                });
            }

            // Out-of-range readiness is kept as-is; the scorer does not clamp.
            if !(0.0..=100.0).contains(&country.nd_gain_score) {
                tracing::warn!(
                    "Country '{}' has NDGainScore {} outside [0, 100]",
                    country.id,
                    country.nd_gain_score
                );
            }

            if !region::is_known_id(&country.id) {
                tracing::warn!(
                    "Country '{}' is not in the region table; classified as {}",
                    country.id,
                    Region::FALLBACK
                );
            }

            by_id.insert(key, index);
        }

        let scaling = log_co2_scaling(&countries);

        tracing::info!(
            "Loaded {} countries (min_log={:.4}, range={:.4})",
            countries.len(),
            scaling.min_log,
            scaling.range
        );

        Ok(Self { countries, scaling, by_id })
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Log-CO2 scaling of the whole collection
    pub fn scaling(&self) -> LogScaling {
        self.scaling
    }

    /// Look up a country by id (case-insensitive)
    pub fn get(&self, id: &str) -> Option<&Country> {
        self.by_id
            .get(&id.to_lowercase())
            .map(|&index| &self.countries[index])
    }

    /// Climate justice score of `country` relative to this collection
    pub fn score(&self, country: &Country) -> f64 {
        scorer::clima_justice_score(country, self.scaling.min_log, self.scaling.range)
    }

    /// Score breakdown of `country` relative to this collection
    pub fn components(&self, country: &Country) -> ScoreComponents {
        scorer::score_components(country, &self.scaling)
    }

    pub fn region_of(&self, country: &Country) -> Region {
        region::region_of(country)
    }

    /// Filtered and ordered view; justice scores use the full collection's scaling
    pub fn filter_and_sort(&self, name_prefix: &str, option: SortOption) -> Vec<&Country> {
        sorting::filter_and_sort_with_scaling(&self.countries, name_prefix, option, &self.scaling)
    }

    /// 1-based justice-score rank within the whole collection, 0 if absent
    pub fn rank_of(&self, country: &Country) -> usize {
        sorting::rank_with_scaling(&self.countries, country, &self.scaling)
    }

    /// Side-by-side comparison of two countries within this collection
    pub fn compare(&self, left: &Country, right: &Country) -> CountryComparison {
        comparison::compare_countries(self, left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = r#"[
        {"id": "us", "name": "United States", "latitude": 38.0, "longitude": -97.0,
         "territorialMtCO2": 5057.3, "NDGainScore": 71.2},
        {"id": "td", "name": "Chad", "latitude": 15.0, "longitude": 19.0,
         "territorialMtCO2": 1.9, "NDGainScore": 27.0}
    ]"#;

    #[test]
    fn test_decodes_bundle_field_names() {
        let data = CountryData::from_json_str(SAMPLE).unwrap();
        assert_eq!(data.len(), 2);

        let us = data.get("US").unwrap();
        assert_eq!(us.name, "United States");
        assert_relative_eq!(us.territorial_mt_co2, 5057.3);
        assert_relative_eq!(us.nd_gain_score, 71.2);
        assert_relative_eq!(us.latitude, 38.0);
    }

    #[test]
    fn test_decoded_record_equals_built_record() {
        let data = CountryData::from_json_str(SAMPLE).unwrap();
        let chad = Country::new("td", "Chad", 1.9, 27.0).with_coordinate(15.0, 19.0);
        assert_eq!(data.get("td"), Some(&chad));
    }

    #[test]
    fn test_accepts_camel_case_readiness_alias() {
        let json = r#"[{"id": "fj", "name": "Fiji", "latitude": -18.0, "longitude": 178.0,
                        "territorialMtCO2": 2.1, "ndGainScore": 48.5}]"#;
        let data = CountryData::from_json_str(json).unwrap();
        assert_relative_eq!(data.countries()[0].nd_gain_score, 48.5);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let countries = vec![
            Country::new("fr", "France", 300.0, 70.0),
            Country::new("FR", "France again", 1.0, 1.0),
        ];
        let err = CountryData::from_countries(countries).unwrap_err();
        assert!(matches!(err, DataError::DuplicateId(id) if id == "FR"));
    }

    #[test]
    fn test_rejects_negative_emissions() {
        let countries = vec![Country::new("xx", "Nowhere", -1.0, 50.0)];
        let err = CountryData::from_countries(countries).unwrap_err();
        assert!(matches!(err, DataError::InvalidEmissions { .. }));
    }

    #[test]
    fn test_rejects_empty_id() {
        let countries = vec![Country::new(" ", "Blank", 1.0, 50.0)];
        let err = CountryData::from_countries(countries).unwrap_err();
        assert!(matches!(err, DataError::EmptyId { index: 0 }));
    }

    #[test]
    fn test_keeps_out_of_range_readiness() {
        let countries = vec![Country::new("aa", "Over", 10.0, 120.0)];
        let data = CountryData::from_countries(countries).unwrap();
        assert_relative_eq!(data.countries()[0].nd_gain_score, 120.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = CountryData::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CountryData::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
