//! Normalization Utilities
//!
//! Computes the log-transformed emissions bounds of a country collection.
//! The climate justice score normalizes each country's `log10(MtCO2 + 1)`
//! against these bounds, so they must be recomputed whenever the collection
//! changes.

use crate::data::Country;
use serde::Serialize;

/// Minimum and spread of `log10(territorial_mt_co2 + 1)` across a collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogScaling {
    pub min_log: f64,
    pub range: f64,
}

impl LogScaling {
    /// Bounds used for an empty collection
    pub const EMPTY: LogScaling = LogScaling { min_log: 0.0, range: 1.0 };

    /// Position of `log_value` within the bounds, 0 at the minimum and 1 at the maximum
    ///
    /// Returns `None` when the range is degenerate (single country or all equal).
    pub fn position(&self, log_value: f64) -> Option<f64> {
        if self.range <= 0.0 {
            None
        } else {
            Some((log_value - self.min_log) / self.range)
        }
    }
}

impl Default for LogScaling {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Compute `(min_log, range)` over `countries`
///
/// An empty slice yields `(0, 1)` so downstream division never sees zero.
pub fn log_co2_scaling(countries: &[Country]) -> LogScaling {
    let mut logs = countries.iter().map(Country::log_co2);

    let Some(first) = logs.next() else {
        return LogScaling::EMPTY;
    };

    let (min_log, max_log) = logs.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

    LogScaling {
        min_log,
        range: max_log - min_log,
    }
}
