//! Fixed keyword tables and scoring policy, assembled into one immutable
//! `ScreeningConfig` at startup.

use rust_stemmers::{Algorithm, Stemmer};

/// A canonical keyword category grouping synonymous phrase variants.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    /// Phrase variants, tried in order; the first whose words are all present
    /// in the document marks the category as matched.
    pub variants: Vec<String>,
}

impl Category {
    fn new(name: &str, variants: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Scoring policy: weight split between the required and bonus tables and the
/// qualification threshold. Fixed per deployment, never per request.
#[derive(Debug, Clone)]
pub struct ScreeningPolicy {
    pub required_weight: f64,
    pub bonus_weight: f64,
    pub qualify_threshold: u32,
}

impl Default for ScreeningPolicy {
    fn default() -> Self {
        Self {
            required_weight: 80.0,
            bonus_weight: 20.0,
            qualify_threshold: 60,
        }
    }
}

/// Immutable screening configuration built once at startup and carried in
/// `AppState` behind an `Arc`. Holds both keyword tables, the scoring policy,
/// and the stemmer.
pub struct ScreeningConfig {
    pub required: Vec<Category>,
    pub bonus: Vec<Category>,
    pub policy: ScreeningPolicy,
    stemmer: Stemmer,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            required: vec![
                Category::new("python", &["python", "py"]),
                Category::new("sql", &["sql", "mysql", "postgresql", "sqlite"]),
                Category::new(
                    "communication",
                    &["communication", "interpersonal", "presentation"],
                ),
                Category::new(
                    "problem solving",
                    &["problem solving", "critical thinking", "troubleshooting"],
                ),
            ],
            bonus: vec![
                Category::new("machine learning", &["machine learning", "ml", "ai"]),
                Category::new("leadership", &["leadership", "team lead", "mentorship"]),
            ],
            policy: ScreeningPolicy::default(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl ScreeningConfig {
    /// Stems a single lowercased word. The tokenizer and the matcher both go
    /// through here, so the two sides can never disagree on stem forms.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_sizes() {
        let config = ScreeningConfig::default();
        assert_eq!(config.required.len(), 4);
        assert_eq!(config.bonus.len(), 2);
    }

    #[test]
    fn test_default_policy_constants() {
        let policy = ScreeningPolicy::default();
        assert_eq!(policy.required_weight, 80.0);
        assert_eq!(policy.bonus_weight, 20.0);
        assert_eq!(policy.qualify_threshold, 60);
    }

    #[test]
    fn test_stemmer_reduces_to_root() {
        let config = ScreeningConfig::default();
        assert_eq!(config.stem("solving"), "solv");
        assert_eq!(config.stem("troubleshooting"), "troubleshoot");
    }

    #[test]
    fn test_inflections_share_a_stem() {
        // The matcher depends on variants and document words collapsing to
        // the same root, whatever its exact spelling.
        let config = ScreeningConfig::default();
        assert_eq!(config.stem("communicating"), config.stem("communication"));
        assert_eq!(config.stem("presenting"), config.stem("presentation"));
    }

    #[test]
    fn test_stemmer_deterministic() {
        let config = ScreeningConfig::default();
        assert_eq!(config.stem("troubleshooting"), config.stem("troubleshooting"));
    }
}
