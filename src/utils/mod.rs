//! Utility modules for climate scoring
//!
//! Contains shared functionality used across the scorer and the list views:
//! - Normalization: Log-CO2 scaling over a country collection
//! - Search keys: Name folding for prefix search

pub mod normalization;
pub mod search_key;

// Re-export commonly used types
pub use normalization::{log_co2_scaling, LogScaling};
pub use search_key::{fold_name, matches_prefix};
