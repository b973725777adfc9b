//! Keyword matching: red-flag detection and condition ranking.
//!
//! Matching is plain lower-case substring containment. There is no
//! tokenization, so "fever" also matches inside "high fever" and both count
//! when an entry lists both phrases.

use crate::catalog::{Catalog, ConditionEntry};

/// A catalog condition that matched the input, with its keyword score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub name: String,
    pub explanation: String,
    pub advice: String,
    pub score: usize,
}

impl MatchResult {
    fn from_entry(entry: &ConditionEntry, score: usize) -> Self {
        Self {
            name: entry.name.clone(),
            explanation: entry.explanation.clone(),
            advice: entry.advice.clone(),
            score,
        }
    }
}

/// Number of `keywords` contained in the already lower-cased `text`.
pub fn keyword_score(text: &str, keywords: &[String]) -> usize {
    keywords.iter().filter(|k| text.contains(k.as_str())).count()
}

/// Distinct red-flag messages triggered by `input`, in first-match order.
pub fn detect_red_flags(catalog: &Catalog, input: &str) -> Vec<String> {
    let text = input.to_lowercase();
    let mut messages: Vec<String> = Vec::new();

    for flag in &catalog.red_flags {
        if !flag.keywords.iter().any(|k| text.contains(k.as_str())) {
            continue;
        }
        if !messages.iter().any(|m| m == &flag.message) {
            messages.push(flag.message.clone());
        }
    }

    messages
}

/// Conditions with at least one keyword in `input`, best score first.
///
/// Equal scores keep catalog order (`sort_by` is stable).
pub fn match_conditions(catalog: &Catalog, input: &str) -> Vec<MatchResult> {
    let text = input.to_lowercase();

    let mut results: Vec<MatchResult> = catalog
        .conditions
        .iter()
        .filter_map(|entry| {
            let score = keyword_score(&text, &entry.keywords);
            (score > 0).then(|| MatchResult::from_entry(entry, score))
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
