//! Keyword matching against normalized token sets.

use std::collections::{BTreeSet, HashSet};

use crate::screening::keywords::Category;
use crate::screening::ScreeningConfig;

/// Returns the canonical names of every category with at least one variant
/// whose stemmed words are all present in `tokens`.
///
/// Word presence anywhere in the document counts; variants are not matched as
/// adjacent phrases. "problem solving" therefore matches a document where
/// "problem" and "solving" appear in unrelated sentences. That permissiveness
/// is deliberate and load-bearing for the score.
pub fn match_keywords(
    tokens: &[String],
    table: &[Category],
    config: &ScreeningConfig,
) -> BTreeSet<String> {
    let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let mut matched = BTreeSet::new();
    for category in table {
        for variant in &category.variants {
            let all_present = variant
                .to_lowercase()
                .split_whitespace()
                .all(|word| token_set.contains(config.stem(word).as_str()));
            if all_present {
                matched.insert(category.name.clone());
                break; // first matching variant wins
            }
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::preprocess::preprocess;

    fn matches(text: &str, config: &ScreeningConfig) -> BTreeSet<String> {
        let tokens = preprocess(text, config);
        match_keywords(&tokens, &config.required, config)
    }

    #[test]
    fn test_primary_variant_matches() {
        let config = ScreeningConfig::default();
        let matched = matches("I write Python every day", &config);
        assert!(matched.contains("python"));
    }

    #[test]
    fn test_synonym_variant_maps_to_canonical_name() {
        let config = ScreeningConfig::default();
        // "postgresql" is a variant of the "sql" category
        let matched = matches("postgresql administration", &config);
        assert!(matched.contains("sql"));
        assert!(!matched.contains("postgresql"));
    }

    #[test]
    fn test_stemmed_inflection_matches() {
        let config = ScreeningConfig::default();
        // "communicating" stems to the same root as the "communication" variant
        let matched = matches("communicating with stakeholders", &config);
        assert!(matched.contains("communication"));
    }

    #[test]
    fn test_multi_word_variant_matches_words_anywhere() {
        let config = ScreeningConfig::default();
        // "problem" and "solving" appear far apart, in the wrong order
        let matched = matches("solving puzzles is fun. another problem entirely", &config);
        assert!(matched.contains("problem solving"));
    }

    #[test]
    fn test_multi_word_variant_needs_every_word() {
        let config = ScreeningConfig::default();
        let matched = matches("I enjoy a good problem", &config);
        assert!(!matched.contains("problem solving"));
    }

    #[test]
    fn test_no_match_on_unrelated_text() {
        let config = ScreeningConfig::default();
        assert!(matches("gardening and carpentry", &config).is_empty());
    }

    #[test]
    fn test_adding_matching_text_only_grows_the_set() {
        let config = ScreeningConfig::default();
        let base = "Python and MySQL experience";
        let before = matches(base, &config);
        let after = matches(&format!("{base} plus troubleshooting"), &config);
        assert!(after.is_superset(&before));
        assert!(after.contains("problem solving"));
    }

    #[test]
    fn test_bonus_table_matches_independently() {
        let config = ScreeningConfig::default();
        let tokens = preprocess("team lead with ml background", &config);
        let matched = match_keywords(&tokens, &config.bonus, &config);
        assert!(matched.contains("leadership"));
        assert!(matched.contains("machine learning"));
    }
}
