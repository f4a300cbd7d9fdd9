//! Runtime configuration
//!
//! Read from environment variables, falling back to defaults:
//! - `CLIMA_DATA_PATH`: dataset location (default `data/clima_countries_data.json`)
//! - `CLIMA_DEFAULT_SORT`: initial list ordering (default `name-a-z`)
//! - `CLIMA_TOP_N`: bars in top-N charts (default 10)

use crate::charts::DEFAULT_TOP_N;
use crate::sorting::SortOption;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DATA_PATH_VAR: &str = "CLIMA_DATA_PATH";
pub const DEFAULT_SORT_VAR: &str = "CLIMA_DEFAULT_SORT";
pub const TOP_N_VAR: &str = "CLIMA_TOP_N";

pub const DEFAULT_DATA_PATH: &str = "data/clima_countries_data.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ClimaConfig {
    pub data_path: PathBuf,
    pub default_sort: SortOption,
    pub top_n: usize,
}

impl Default for ClimaConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_sort: SortOption::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ClimaConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_PATH_VAR) {
            if path.trim().is_empty() {
                anyhow::bail!("{} is set but empty", DATA_PATH_VAR);
            }
            config.data_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(DEFAULT_SORT_VAR) {
            config.default_sort = raw
                .parse()
                .with_context(|| format!("Invalid {}", DEFAULT_SORT_VAR))?;
        }

        if let Some(raw) = lookup(TOP_N_VAR) {
            let top_n: usize = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: '{}'", TOP_N_VAR, raw))?;
            if top_n == 0 {
                anyhow::bail!("{} must be at least 1", TOP_N_VAR);
            }
            config.top_n = top_n;
        }

        tracing::debug!("Configuration: {:?}", config);
        Ok(config)
    }
}
