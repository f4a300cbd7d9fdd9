//! Country name folding for prefix search
//!
//! Names are compared lowercased with "ü" folded to "u", so "Turkiye" finds
//! "Türkiye". Only prefix matching is supported.

/// Lowercase `name` and fold "ü" to "u"
pub fn fold_name(name: &str) -> String {
    name.to_lowercase().replace('ü', "u")
}

/// Whether `name` starts with `prefix` after folding both
///
/// An empty prefix matches every name.
pub fn matches_prefix(name: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    fold_name(name).starts_with(&fold_name(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_name() {
        assert_eq!(fold_name("Türkiye"), "turkiye");
        assert_eq!(fold_name("ÜBER"), "uber");
        assert_eq!(fold_name("Côte d'Ivoire"), "côte d'ivoire");
    }

    #[test]
    fn test_matches_prefix() {
        assert!(matches_prefix("Türkiye", "tur"));
        assert!(matches_prefix("Turkmenistan", "Tür"));
        assert!(matches_prefix("Chad", ""));
        assert!(!matches_prefix("Chad", "had"));
        assert!(!matches_prefix("Chad", "chad "));
    }
}
