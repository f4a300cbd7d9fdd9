//! Chart series
//!
//! Turns a `CountryData` collection into the series the chart screens draw:
//! top-N bars, per-region aggregates, metric-vs-metric scatters, and the
//! bubble chart. Rendering itself happens elsewhere.

use crate::data::{Country, CountryData};
use crate::metric::Metric;
use crate::region::{region_of, Region};
use crate::scorer::ClimaJusticeScorer;
use serde::Serialize;
use std::fmt::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// Default number of bars in a top-N chart
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    TopByTerritorialMtCO2,
    TerritorialMtCO2ByRegion,
    TopByNdGainScore,
    NdGainScoreByRegion,
    TopByClimaJusticeScore,
    ClimaJusticeScoreByRegion,
    TerritorialMtCO2VsNdGainScore,
    TerritorialMtCO2VsClimaJusticeScore,
    NdGainScoreVsClimaJusticeScore,
    Bubble,
}

impl ChartType {
    pub const ALL: [ChartType; 10] = [
        ChartType::TopByTerritorialMtCO2,
        ChartType::TerritorialMtCO2ByRegion,
        ChartType::TopByNdGainScore,
        ChartType::NdGainScoreByRegion,
        ChartType::TopByClimaJusticeScore,
        ChartType::ClimaJusticeScoreByRegion,
        ChartType::TerritorialMtCO2VsNdGainScore,
        ChartType::TerritorialMtCO2VsClimaJusticeScore,
        ChartType::NdGainScoreVsClimaJusticeScore,
        ChartType::Bubble,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ChartType::TopByTerritorialMtCO2 => "top-co2",
            ChartType::TerritorialMtCO2ByRegion => "co2-by-region",
            ChartType::TopByNdGainScore => "top-nd-gain",
            ChartType::NdGainScoreByRegion => "nd-gain-by-region",
            ChartType::TopByClimaJusticeScore => "top-justice",
            ChartType::ClimaJusticeScoreByRegion => "justice-by-region",
            ChartType::TerritorialMtCO2VsNdGainScore => "co2-vs-nd-gain",
            ChartType::TerritorialMtCO2VsClimaJusticeScore => "co2-vs-justice",
            ChartType::NdGainScoreVsClimaJusticeScore => "nd-gain-vs-justice",
            ChartType::Bubble => "bubble",
        }
    }

    /// Chart title; top-N titles include `top_n`
    pub fn title(&self, top_n: usize) -> String {
        match self {
            ChartType::TopByTerritorialMtCO2 => format!("Top {} Countries by Territorial MtCO2", top_n),
            ChartType::TerritorialMtCO2ByRegion => "Territorial MtCO2 by Region".to_string(),
            ChartType::TopByNdGainScore => format!("Top {} Countries by ND Gain Score", top_n),
            ChartType::NdGainScoreByRegion => "ND Gain Score by Region".to_string(),
            ChartType::TopByClimaJusticeScore => format!("Top {} Countries by Clima Justice Score", top_n),
            ChartType::ClimaJusticeScoreByRegion => "Clima Justice Score by Region".to_string(),
            ChartType::TerritorialMtCO2VsNdGainScore => "Territorial MtCO2 vs ND Gain Score".to_string(),
            ChartType::TerritorialMtCO2VsClimaJusticeScore => {
                "Territorial MtCO2 vs Clima Justice Score".to_string()
            }
            ChartType::NdGainScoreVsClimaJusticeScore => "ND Gain Score vs Clima Justice Score".to_string(),
            ChartType::Bubble => "Climate Justice Bubble Chart".to_string(),
        }
    }

    /// Build the series for this chart
    pub fn build(&self, data: &CountryData, top_n: usize) -> ChartSeries {
        match *self {
            ChartType::TopByTerritorialMtCO2 => top_series(data, Metric::TerritorialMtCO2, top_n),
            ChartType::TopByNdGainScore => top_series(data, Metric::NdGainScore, top_n),
            ChartType::TopByClimaJusticeScore => top_series(data, Metric::ClimaJusticeScore, top_n),
            ChartType::TerritorialMtCO2ByRegion => region_series(data, Metric::TerritorialMtCO2),
            ChartType::NdGainScoreByRegion => region_series(data, Metric::NdGainScore),
            ChartType::ClimaJusticeScoreByRegion => region_series(data, Metric::ClimaJusticeScore),
            ChartType::TerritorialMtCO2VsNdGainScore => {
                scatter_series(data, Metric::TerritorialMtCO2, Metric::NdGainScore)
            }
            ChartType::TerritorialMtCO2VsClimaJusticeScore => {
                scatter_series(data, Metric::TerritorialMtCO2, Metric::ClimaJusticeScore)
            }
            ChartType::NdGainScoreVsClimaJusticeScore => {
                scatter_series(data, Metric::NdGainScore, Metric::ClimaJusticeScore)
            }
            ChartType::Bubble => ChartSeries::Bubble { points: bubble(data) },
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown chart '{0}'")]
pub struct ParseChartTypeError(String);

impl FromStr for ChartType {
    type Err = ParseChartTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ChartType::ALL
            .into_iter()
            .find(|chart| chart.slug() == wanted)
            .ok_or_else(|| ParseChartTypeError(s.to_string()))
    }
}

/// One bar of a top-N chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarEntry {
    pub id: String,
    pub name: String,
    pub value: f64,
}

/// Aggregate of one metric over one region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionStat {
    pub region: Region,
    pub count: usize,
    pub total: f64,
    pub mean: f64,
    /// Value the chart draws: `total` for emissions, `mean` for scores
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubblePoint {
    pub id: String,
    pub name: String,
    pub territorial_mt_co2: f64,
    pub nd_gain_score: f64,
    pub clima_justice_score: f64,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSeries {
    Bar { metric: Metric, entries: Vec<BarEntry> },
    Region { metric: Metric, stats: Vec<RegionStat> },
    Scatter { x: Metric, y: Metric, points: Vec<ScatterPoint> },
    Bubble { points: Vec<BubblePoint> },
}

impl ChartSeries {
    /// Plain-text table, one row per bar, region, or point
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_table(&mut out);
        out
    }

    fn write_table(&self, out: &mut String) -> fmt::Result {
        match self {
            ChartSeries::Bar { metric, entries } => {
                writeln!(out, "{:<4} {:<32} {:>12}", "ID", "Country", metric.label())?;
                for entry in entries {
                    writeln!(out, "{:<4} {:<32} {:>12.1}", entry.id, entry.name, entry.value)?;
                }
            }
            ChartSeries::Region { metric, stats } => {
                let heading = match metric {
                    Metric::TerritorialMtCO2 => "Total",
                    Metric::NdGainScore | Metric::ClimaJusticeScore => "Mean",
                };
                writeln!(out, "{:<16} {:>5} {:>12}", "Region", "Count", heading)?;
                for stat in stats {
                    writeln!(out, "{:<16} {:>5} {:>12.1}", stat.region.label(), stat.count, stat.value)?;
                }
            }
            ChartSeries::Scatter { x, y, points } => {
                writeln!(out, "{:<4} {:>20} {:>20}", "ID", x.label(), y.label())?;
                for point in points {
                    writeln!(out, "{:<4} {:>20.1} {:>20.1}", point.id, point.x, point.y)?;
                }
            }
            ChartSeries::Bubble { points } => {
                writeln!(
                    out,
                    "{:<4} {:<32} {:>10} {:>8} {:>8} {:<14}",
                    "ID", "Country", "MtCO2", "ND-GAIN", "CJS", "Region"
                )?;
                for point in points {
                    writeln!(
                        out,
                        "{:<4} {:<32} {:>10.1} {:>8.1} {:>8.1} {:<14}",
                        point.id,
                        point.name,
                        point.territorial_mt_co2,
                        point.nd_gain_score,
                        point.clima_justice_score,
                        point.region.label()
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn top_series(data: &CountryData, metric: Metric, n: usize) -> ChartSeries {
    let scorer = ClimaJusticeScorer::with_scaling(data.scaling());
    let entries = top_countries(data, metric, n)
        .into_iter()
        .map(|country| BarEntry {
            id: country.id.clone(),
            name: country.name.clone(),
            value: metric.value(country, &scorer),
        })
        .collect();

    ChartSeries::Bar { metric, entries }
}

fn region_series(data: &CountryData, metric: Metric) -> ChartSeries {
    ChartSeries::Region {
        metric,
        stats: region_breakdown(data, metric),
    }
}

fn scatter_series(data: &CountryData, x: Metric, y: Metric) -> ChartSeries {
    ChartSeries::Scatter {
        x,
        y,
        points: scatter(data, x, y),
    }
}

/// The `n` countries with the highest `metric`, descending; ties keep collection order
pub fn top_countries(data: &CountryData, metric: Metric, n: usize) -> Vec<&Country> {
    let scorer = ClimaJusticeScorer::with_scaling(data.scaling());

    let mut ranked: Vec<(&Country, f64)> = data
        .countries()
        .iter()
        .map(|country| (country, metric.value(country, &scorer)))
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);

    ranked.into_iter().map(|(country, _)| country).collect()
}

/// Per-region count, total, and mean of `metric`, in `Region::ALL` order
pub fn region_breakdown(data: &CountryData, metric: Metric) -> Vec<RegionStat> {
    let scorer = ClimaJusticeScorer::with_scaling(data.scaling());
    let mut sums = [(0usize, 0.0f64); 6];

    for country in data.countries() {
        // Declaration order of `Region` matches `Region::ALL`
        let slot = region_of(country) as usize;
        sums[slot].0 += 1;
        sums[slot].1 += metric.value(country, &scorer);
    }

    Region::ALL
        .iter()
        .zip(sums.iter())
        .map(|(&region, &(count, total))| {
            let mean = if count == 0 { 0.0 } else { total / count as f64 };
            let value = match metric {
                Metric::TerritorialMtCO2 => total,
                Metric::NdGainScore | Metric::ClimaJusticeScore => mean,
            };
            RegionStat { region, count, total, mean, value }
        })
        .collect()
}

/// One (x, y) point per country, in collection order
pub fn scatter(data: &CountryData, x: Metric, y: Metric) -> Vec<ScatterPoint> {
    let scorer = ClimaJusticeScorer::with_scaling(data.scaling());

    data.countries()
        .iter()
        .map(|country| ScatterPoint {
            id: country.id.clone(),
            x: x.value(country, &scorer),
            y: y.value(country, &scorer),
        })
        .collect()
}

/// Emissions, readiness, and score for every country, in collection order
pub fn bubble(data: &CountryData) -> Vec<BubblePoint> {
    data.countries()
        .iter()
        .map(|country| BubblePoint {
            id: country.id.clone(),
            name: country.name.clone(),
            territorial_mt_co2: country.territorial_mt_co2,
            nd_gain_score: country.nd_gain_score,
            clima_justice_score: data.score(country),
            region: region_of(country),
        })
        .collect()
}
