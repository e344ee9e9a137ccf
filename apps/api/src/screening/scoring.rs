//! Combines match sets into a 0-100 score and a qualification verdict.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::screening::keywords::{Category, ScreeningPolicy};

/// Qualification verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Qualified,
    Rejected,
}

/// Full screening result returned to callers. Sets serialize as sorted JSON
/// arrays, so responses are deterministic for a given input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub status: Verdict,
    pub total_score: u32,
    pub required_matched: BTreeSet<String>,
    pub bonus_matched: BTreeSet<String>,
    pub missing_required: BTreeSet<String>,
}

/// Required categories split `required_weight` points evenly, bonus
/// categories `bonus_weight`. The sum is rounded to the nearest integer and
/// compared against `qualify_threshold`.
pub fn score(
    required_table: &[Category],
    bonus_table: &[Category],
    required_matched: BTreeSet<String>,
    bonus_matched: BTreeSet<String>,
    policy: &ScreeningPolicy,
) -> ScoreReport {
    let required_score = if required_table.is_empty() {
        0.0
    } else {
        required_matched.len() as f64 / required_table.len() as f64 * policy.required_weight
    };
    let bonus_score = if bonus_table.is_empty() {
        0.0
    } else {
        bonus_matched.len() as f64 / bonus_table.len() as f64 * policy.bonus_weight
    };
    let total_score = (required_score + bonus_score).round() as u32;

    let missing_required = required_table
        .iter()
        .filter(|c| !required_matched.contains(&c.name))
        .map(|c| c.name.clone())
        .collect();

    let status = if total_score >= policy.qualify_threshold {
        Verdict::Qualified
    } else {
        Verdict::Rejected
    };

    ScoreReport {
        status,
        total_score,
        required_matched,
        bonus_matched,
        missing_required,
    }
}
