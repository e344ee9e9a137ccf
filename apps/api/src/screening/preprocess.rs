//! Tokenization and normalization of raw resume text.

use crate::screening::ScreeningConfig;

/// Punctuation stripped from token edges before stemming. Interior
/// punctuation is kept, so hyphenated and dotted terms survive as one token.
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Lowercases the text, splits it on whitespace, strips edge punctuation from
/// each token, and stems the remainder. Order-preserving and deterministic.
pub fn preprocess(text: &str, config: &ScreeningConfig) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|token| config.stem(token.trim_matches(EDGE_PUNCTUATION)))
        .collect()
}
