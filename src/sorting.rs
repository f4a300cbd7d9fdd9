//! Sort, filter, and rank over a country collection
//!
//! Every ordering is a stable sort: countries that compare equal keep the
//! order they had in the input slice. Justice-score orderings always use the
//! log-CO2 scaling of the full collection, never of the filtered subset.

use crate::data::Country;
use crate::scorer::ClimaJusticeScorer;
use crate::utils::normalization::{log_co2_scaling, LogScaling};
use crate::utils::search_key::fold_name;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// List ordering offered by the country lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    #[serde(rename = "name-a-z")]
    NameAtoZ,
    #[serde(rename = "name-z-a")]
    NameZtoA,
    #[serde(rename = "justice-high-low")]
    ClimaJusticeScoreHighToLow,
    #[serde(rename = "justice-low-high")]
    ClimaJusticeScoreLowToHigh,
    #[serde(rename = "nd-gain-high-low")]
    NdGainScoreHighToLow,
    #[serde(rename = "nd-gain-low-high")]
    NdGainScoreLowToHigh,
    #[serde(rename = "co2-high-low")]
    TerritorialMtCO2HighToLow,
    #[serde(rename = "co2-low-high")]
    TerritorialMtCO2LowToHigh,
}

impl SortOption {
    pub const ALL: [SortOption; 8] = [
        SortOption::NameAtoZ,
        SortOption::NameZtoA,
        SortOption::ClimaJusticeScoreHighToLow,
        SortOption::ClimaJusticeScoreLowToHigh,
        SortOption::NdGainScoreHighToLow,
        SortOption::NdGainScoreLowToHigh,
        SortOption::TerritorialMtCO2HighToLow,
        SortOption::TerritorialMtCO2LowToHigh,
    ];

    /// Short identifier used by configuration and the CLI
    pub fn slug(&self) -> &'static str {
        match self {
            SortOption::NameAtoZ => "name-a-z",
            SortOption::NameZtoA => "name-z-a",
            SortOption::ClimaJusticeScoreHighToLow => "justice-high-low",
            SortOption::ClimaJusticeScoreLowToHigh => "justice-low-high",
            SortOption::NdGainScoreHighToLow => "nd-gain-high-low",
            SortOption::NdGainScoreLowToHigh => "nd-gain-low-high",
            SortOption::TerritorialMtCO2HighToLow => "co2-high-low",
            SortOption::TerritorialMtCO2LowToHigh => "co2-low-high",
        }
    }

    pub fn uses_justice_score(&self) -> bool {
        matches!(
            self,
            SortOption::ClimaJusticeScoreHighToLow | SortOption::ClimaJusticeScoreLowToHigh
        )
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown sort option '{0}' (expected one of: name-a-z, name-z-a, justice-high-low, justice-low-high, nd-gain-high-low, nd-gain-low-high, co2-high-low, co2-low-high)")]
pub struct ParseSortOptionError(String);

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortOption::ALL
            .into_iter()
            .find(|option| option.slug() == wanted)
            .ok_or_else(|| ParseSortOptionError(s.to_string()))
    }
}

// Compare functions here. Scores are precomputed, so the comparators work
// on (country, justice score) pairs.

type Scored<'a> = (&'a Country, f64);
type CmpFunc = fn(&Scored<'_>, &Scored<'_>) -> Ordering;

fn compare_name_asc(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    a.0.name.cmp(&b.0.name)
}

fn compare_name_desc(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    b.0.name.cmp(&a.0.name)
}

fn compare_score_desc(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    b.1.total_cmp(&a.1)
}

fn compare_score_asc(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    a.1.total_cmp(&b.1)
}

fn compare_nd_gain_desc(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    b.0.nd_gain_score.total_cmp(&a.0.nd_gain_score)
}

fn compare_nd_gain_asc(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    a.0.nd_gain_score.total_cmp(&b.0.nd_gain_score)
}

fn compare_co2_desc(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    b.0.territorial_mt_co2.total_cmp(&a.0.territorial_mt_co2)
}

fn compare_co2_asc(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    a.0.territorial_mt_co2.total_cmp(&b.0.territorial_mt_co2)
}

fn comparator(option: SortOption) -> CmpFunc {
    match option {
        SortOption::NameAtoZ => compare_name_asc,
        SortOption::NameZtoA => compare_name_desc,
        SortOption::ClimaJusticeScoreHighToLow => compare_score_desc,
        SortOption::ClimaJusticeScoreLowToHigh => compare_score_asc,
        SortOption::NdGainScoreHighToLow => compare_nd_gain_desc,
        SortOption::NdGainScoreLowToHigh => compare_nd_gain_asc,
        SortOption::TerritorialMtCO2HighToLow => compare_co2_desc,
        SortOption::TerritorialMtCO2LowToHigh => compare_co2_asc,
    }
}

/// Filter `countries` by name prefix and order them by `option`
///
/// The scaling for justice scores is computed from the whole `countries` slice.
pub fn filter_and_sort<'a>(
    countries: &'a [Country],
    name_prefix: &str,
    option: SortOption,
) -> Vec<&'a Country> {
    let scaling = log_co2_scaling(countries);
    filter_and_sort_with_scaling(countries, name_prefix, option, &scaling)
}

/// Same as [`filter_and_sort`] with a precomputed collection scaling
pub fn filter_and_sort_with_scaling<'a>(
    countries: &'a [Country],
    name_prefix: &str,
    option: SortOption,
    scaling: &LogScaling,
) -> Vec<&'a Country> {
    let prefix = fold_name(name_prefix);
    let scorer = ClimaJusticeScorer::with_scaling(*scaling);

    let mut scored: Vec<Scored<'a>> = countries
        .iter()
        .filter(|country| prefix.is_empty() || fold_name(&country.name).starts_with(&prefix))
        .map(|country| {
            let score = if option.uses_justice_score() { scorer.score(country) } else { 0.0 };
            (country, score)
        })
        .collect();

    scored.sort_by(comparator(option));

    tracing::debug!(
        "filter_and_sort: prefix={:?} option={} kept {}/{}",
        name_prefix,
        option,
        scored.len(),
        countries.len()
    );

    scored.into_iter().map(|(country, _)| country).collect()
}

/// 1-based justice-score rank of `target` within `countries`; 0 when absent
pub fn rank_by_justice_score(countries: &[Country], target: &Country) -> usize {
    let scaling = log_co2_scaling(countries);
    rank_with_scaling(countries, target, &scaling)
}

/// Same as [`rank_by_justice_score`] with a precomputed collection scaling
pub fn rank_with_scaling(countries: &[Country], target: &Country, scaling: &LogScaling) -> usize {
    let ordered = filter_and_sort_with_scaling(
        countries,
        "",
        SortOption::ClimaJusticeScoreHighToLow,
        scaling,
    );

    let target_key = target.id.to_lowercase();
    ordered
        .iter()
        .position(|country| country.id.to_lowercase() == target_key)
        .map_or(0, |index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Country> {
        vec![
            Country::new("de", "Germany", 673.0, 69.4),
            Country::new("td", "Chad", 1.9, 27.0),
            Country::new("tr", "Türkiye", 446.0, 52.7),
            Country::new("tm", "Turkmenistan", 78.0, 44.3),
            Country::new("bd", "Bangladesh", 106.0, 38.1),
        ]
    }

    fn ids(list: &[&Country]) -> Vec<String> {
        list.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_parse_sort_option() {
        for option in SortOption::ALL {
            assert_eq!(option.slug().parse::<SortOption>().unwrap(), option);
        }
        assert_eq!(" CO2-High-Low ".parse::<SortOption>().unwrap(), SortOption::TerritorialMtCO2HighToLow);
        assert!("alphabetical".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_serde_slug_matches_display() {
        for option in SortOption::ALL {
            let json = serde_json::to_string(&option).unwrap();
            assert_eq!(json, format!("\"{}\"", option));
        }
    }

    #[test]
    fn test_prefix_filter_folds_umlaut() {
        let countries = sample();
        let result = filter_and_sort(&countries, "tur", SortOption::NameAtoZ);
        assert_eq!(ids(&result), vec!["tm", "tr"]);

        let result = filter_and_sort(&countries, "TÜR", SortOption::NameAtoZ);
        assert_eq!(ids(&result), vec!["tm", "tr"]);
    }

    #[test]
    fn test_prefix_only() {
        let countries = sample();
        assert!(filter_and_sort(&countries, "many", SortOption::NameAtoZ).is_empty());
    }

    #[test]
    fn test_empty_prefix_keeps_everything() {
        let countries = sample();
        for option in SortOption::ALL {
            let result = filter_and_sort(&countries, "", option);
            assert_eq!(result.len(), countries.len());
            let mut got = ids(&result);
            got.sort();
            let mut want: Vec<String> = countries.iter().map(|c| c.id.clone()).collect();
            want.sort();
            assert_eq!(got, want);
        }
    }

    #[test]
    fn test_name_orders_are_reverses() {
        let countries = sample();
        let asc = ids(&filter_and_sort(&countries, "", SortOption::NameAtoZ));
        let mut desc = ids(&filter_and_sort(&countries, "", SortOption::NameZtoA));
        desc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(asc, vec!["bd", "td", "de", "tm", "tr"]);
    }

    #[test]
    fn test_raw_metric_orders() {
        let countries = sample();
        assert_eq!(
            ids(&filter_and_sort(&countries, "", SortOption::TerritorialMtCO2HighToLow)),
            vec!["de", "tr", "bd", "tm", "td"]
        );
        assert_eq!(
            ids(&filter_and_sort(&countries, "", SortOption::NdGainScoreLowToHigh)),
            vec!["td", "bd", "tm", "tr", "de"]
        );
    }

    #[test]
    fn test_justice_order_uses_full_collection_scaling() {
        let countries = sample();
        let scaling = log_co2_scaling(&countries);
        let scorer = ClimaJusticeScorer::with_scaling(scaling);

        let filtered = filter_and_sort(&countries, "tur", SortOption::ClimaJusticeScoreHighToLow);
        assert_eq!(ids(&filtered), vec!["tm", "tr"]);

        let scores: Vec<f64> = filtered.iter().map(|c| scorer.score(c)).collect();
        assert!(scores[0] >= scores[1]);

        let ascending = filter_and_sort(&countries, "", SortOption::ClimaJusticeScoreLowToHigh);
        assert_eq!(ascending.first().unwrap().id, "de");
        assert_eq!(ascending.last().unwrap().id, "td");
    }

    #[test]
    fn test_filtered_justice_order_flips_under_subset_scaling() {
        // Scaled against "aa" and "ab" alone, "aa" would lead; "zz" widens the
        // range so "ab" keeps a high emissions component and wins.
        let countries = vec![
            Country::new("aa", "Aaland", 0.0, 50.0),
            Country::new("ab", "Abbeland", 9.0, 10.0),
            Country::new("zz", "Zedland", 999.0, 50.0),
        ];

        let filtered = filter_and_sort(&countries, "a", SortOption::ClimaJusticeScoreHighToLow);
        assert_eq!(ids(&filtered), vec!["ab", "aa"]);

        let filtered = filter_and_sort(&countries, "a", SortOption::ClimaJusticeScoreLowToHigh);
        assert_eq!(ids(&filtered), vec!["aa", "ab"]);

        let subset: Vec<Country> = countries[..2].to_vec();
        let alone = filter_and_sort(&subset, "a", SortOption::ClimaJusticeScoreHighToLow);
        assert_eq!(ids(&alone), vec!["aa", "ab"]);
    }

    #[test]
    fn test_rank_matches_id_with_unicode_fold() {
        let countries = vec![
            Country::new("ÅL", "Åland", 0.1, 40.0),
            Country::new("de", "Germany", 673.0, 69.4),
        ];
        let lowercase_twin = Country::new("ål", "Åland", 0.1, 40.0);
        assert_eq!(rank_by_justice_score(&countries, &lowercase_twin), 1);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let countries = vec![
            Country::new("b", "Twin", 10.0, 50.0),
            Country::new("a", "Twin", 10.0, 50.0),
            Country::new("c", "Twin", 10.0, 50.0),
        ];
        for option in SortOption::ALL {
            assert_eq!(
                ids(&filter_and_sort(&countries, "", option)),
                vec!["b", "a", "c"],
                "{}",
                option
            );
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let countries = sample();
        let before = countries.clone();
        let _ = filter_and_sort(&countries, "", SortOption::NameZtoA);
        assert_eq!(countries, before);
    }

    #[test]
    fn test_rank() {
        let countries = sample();
        assert_eq!(rank_by_justice_score(&countries, &countries[1]), 1);
        assert_eq!(rank_by_justice_score(&countries, &countries[0]), countries.len());

        let stranger = Country::new("zz", "Nowhere", 5.0, 50.0);
        assert_eq!(rank_by_justice_score(&countries, &stranger), 0);
        assert_eq!(rank_by_justice_score(&[], &stranger), 0);
    }
}
