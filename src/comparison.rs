//! Side-by-side country comparison
//!
//! For each metric, reports which side is favourable and a delta label such
//! as `↑ 12.3 (45.6%)`. The arrow shows the raw direction of the difference
//! only; whether that direction is good depends on the metric.

use crate::data::{Country, CountryData};
use crate::metric::Metric;
use crate::region::{region_of, Region};
use crate::scorer::ClimaJusticeScorer;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Better,
    Worse,
    Equal,
}

/// Comparison of one metric between two values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricComparison {
    pub metric: Option<Metric>,
    pub left: f64,
    pub right: f64,
    /// `|left - right|`
    pub difference: f64,
    /// Difference relative to the smaller value, in percent. `None` when the
    /// smaller value is not positive.
    pub percent_difference: Option<f64>,
    pub left_outcome: Outcome,
    pub right_outcome: Outcome,
}

impl MetricComparison {
    /// Delta label shown under the left value, `None` when both sides are equal
    pub fn left_label(&self) -> Option<String> {
        self.delta_label(self.left, self.right)
    }

    /// Delta label shown under the right value, `None` when both sides are equal
    pub fn right_label(&self) -> Option<String> {
        self.delta_label(self.right, self.left)
    }

    fn delta_label(&self, value: f64, other: f64) -> Option<String> {
        if value == other {
            return None;
        }

        let symbol = if value > other { "↑" } else { "↓" };
        let label = match self.percent_difference {
            Some(percent) => format!("{} {:.1} ({:.1}%)", symbol, self.difference, percent),
            None => format!("{} {:.1}", symbol, self.difference),
        };
        Some(label)
    }
}

fn outcome(value: f64, other: f64, higher_is_better: bool) -> Outcome {
    if value == other {
        Outcome::Equal
    } else if (value > other) == higher_is_better {
        Outcome::Better
    } else {
        Outcome::Worse
    }
}

/// Compare two raw values
pub fn compare_values(left: f64, right: f64, higher_is_better: bool) -> MetricComparison {
    let difference = (left - right).abs();
    let smaller = left.min(right);
    let percent_difference = if smaller > 0.0 {
        Some(difference / smaller * 100.0)
    } else {
        None
    };

    MetricComparison {
        metric: None,
        left,
        right,
        difference,
        percent_difference,
        left_outcome: outcome(left, right, higher_is_better),
        right_outcome: outcome(right, left, higher_is_better),
    }
}

/// Full comparison of two countries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryComparison {
    pub left_id: String,
    pub right_id: String,
    pub left_region: Region,
    pub right_region: Region,
    /// Justice score, ND-GAIN, and CO2, in that order
    pub metrics: Vec<MetricComparison>,
}

/// Compare `left` and `right`; justice scores are taken against `data`'s scaling
pub fn compare_countries(data: &CountryData, left: &Country, right: &Country) -> CountryComparison {
    let scorer = ClimaJusticeScorer::with_scaling(data.scaling());

    let metrics = Metric::ALL
        .iter()
        .map(|&metric| {
            let mut comparison = compare_values(
                metric.value(left, &scorer),
                metric.value(right, &scorer),
                metric.higher_is_better(),
            );
            comparison.metric = Some(metric);
            comparison
        })
        .collect();

    CountryComparison {
        left_id: left.id.clone(),
        right_id: right.id.clone(),
        left_region: region_of(left),
        right_region: region_of(right),
        metrics,
    }
}
