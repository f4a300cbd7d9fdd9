//! Clima Scorer
//!
//! Climate justice scoring over a bundled dataset of country climate statistics.
//!
//! Structure:
//! - `data`: Country records and the immutable `CountryData` collection
//! - `utils/`: Log-CO2 scaling and name folding for search
//! - `scorer`: Harmonic-mean climate justice score
//! - `region`: Static identifier-to-region table
//! - `sorting`: Prefix filter, sort options, and justice-score rank
//! - `charts`, `comparison`: Series and comparisons derived from the above
//! - `config`: Environment-driven settings for the report binary

pub mod charts;
pub mod comparison;
pub mod config;
pub mod data;
pub mod metric;
pub mod region;
pub mod scorer;
pub mod sorting;
pub mod utils;

// Re-export commonly used types
pub use charts::{ChartSeries, ChartType};
pub use comparison::{CountryComparison, MetricComparison, Outcome};
pub use config::ClimaConfig;
pub use data::{Country, CountryData, DataError};
pub use metric::Metric;
pub use region::{region_for_id, region_of, Region};
pub use scorer::{clima_justice_score, ClimaJusticeScorer, ScoreComponents};
pub use sorting::{filter_and_sort, rank_by_justice_score, SortOption};
pub use utils::{log_co2_scaling, LogScaling};
