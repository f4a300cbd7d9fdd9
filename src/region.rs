//! Region Classifier
//!
//! Maps a country identifier to one of six fixed regions through a single
//! static membership table. Identifiers missing from the table fall back to
//! `Region::Asia`; that fallback is a default, not a geographic claim.

use crate::data::Country;
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic grouping used for aggregate charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Africa,
        Region::Asia,
        Region::Europe,
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Oceania,
    ];

    /// Region assigned to identifiers missing from the membership table
    pub const FALLBACK: Region = Region::Asia;

    pub fn label(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// MEMBERSHIP TABLE
// ISO-3166 alpha-2 codes, lowercase. Transcontinental placement is a chosen
// convention: Russia in Europe, Türkiye and the Caucasus in Asia.
// ============================================================================

static REGION_MEMBERS: &[(Region, &[&str])] = &[
    (Region::Africa, &[
        "dz", "ao", "bj", "bw", "bf", "bi", "cv", "cm", "cf", "td", "km", "cg",
        "cd", "ci", "dj", "eg", "gq", "er", "sz", "et", "ga", "gm", "gh", "gn",
        "gw", "ke", "ls", "lr", "ly", "mg", "mw", "ml", "mr", "mu", "ma", "mz",
        "na", "ne", "ng", "rw", "st", "sn", "sc", "sl", "so", "za", "ss", "sd",
        "tz", "tg", "tn", "ug", "zm", "zw", "eh", "re", "yt", "sh",
    ]),
    (Region::Asia, &[
        "af", "am", "az", "bh", "bd", "bt", "bn", "kh", "cn", "ge", "hk", "in",
        "id", "ir", "iq", "il", "jp", "jo", "kz", "kw", "kg", "la", "lb", "mo",
        "my", "mv", "mn", "mm", "np", "kp", "om", "pk", "ps", "ph", "qa", "sa",
        "sg", "kr", "lk", "sy", "tw", "tj", "th", "tl", "tr", "tm", "ae", "uz",
        "vn", "ye",
    ]),
    (Region::Europe, &[
        "al", "ad", "at", "by", "be", "ba", "bg", "hr", "cy", "cz", "dk", "ee",
        "fi", "fr", "de", "gr", "hu", "is", "ie", "it", "xk", "lv", "li", "lt",
        "lu", "mt", "md", "mc", "me", "nl", "mk", "no", "pl", "pt", "ro", "ru",
        "sm", "rs", "sk", "si", "es", "se", "ch", "ua", "gb", "va", "fo", "gi",
        "im", "je", "gg",
    ]),
    (Region::NorthAmerica, &[
        "ag", "bs", "bb", "bz", "ca", "cr", "cu", "dm", "do", "sv", "gd", "gt",
        "ht", "hn", "jm", "mx", "ni", "pa", "kn", "lc", "vc", "tt", "us", "gl",
        "pr", "bm", "aw", "cw", "ky", "tc", "vg", "vi", "ai", "ms", "bl", "mf",
        "sx", "pm", "gp", "mq", "bq",
    ]),
    (Region::SouthAmerica, &[
        "ar", "bo", "br", "cl", "co", "ec", "gy", "py", "pe", "sr", "uy", "ve",
        "fk", "gf",
    ]),
    (Region::Oceania, &[
        "au", "fj", "ki", "mh", "fm", "nr", "nz", "pw", "pg", "ws", "sb", "to",
        "tv", "vu", "nc", "pf", "gu", "as", "mp", "ck", "nu", "tk", "wf", "nf",
    ]),
];

lazy_static! {
    static ref REGION_INDEX: FxHashMap<&'static str, Region> = {
        let mut index = FxHashMap::default();
        for (region, ids) in REGION_MEMBERS {
            for id in *ids {
                index.insert(*id, *region);
            }
        }
        index
    };
}

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Region for a raw identifier (case-insensitive); unknown ids map to Asia
pub fn region_for_id(id: &str) -> Region {
    REGION_INDEX
        .get(id.to_lowercase().as_str())
        .copied()
        .unwrap_or(Region::FALLBACK)
}

pub fn region_of(country: &Country) -> Region {
    region_for_id(&country.id)
}

/// Whether `id` is listed in the membership table
pub fn is_known_id(id: &str) -> bool {
    REGION_INDEX.contains_key(id.to_lowercase().as_str())
}

/// Member identifiers of `region` as listed in the table
pub fn members(region: Region) -> &'static [&'static str] {
    REGION_MEMBERS
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, ids)| *ids)
        .unwrap_or(&[])
}
