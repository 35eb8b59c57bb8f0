//! Autocomplete suggestions over the term dictionary.
//!
//! A simpler, single-pass sibling of the fuzzy matcher with its own
//! acceptance rules: prefix matches always outrank substring matches, so
//! this is intentionally not unified with `FuzzyMatcher::find_matches`.

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::TermDictionary;
use crate::spelling::levenshtein::{levenshtein_distance, similarity};
use crate::spelling::matcher::Match;

/// Configuration for autocomplete suggestion generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteConfig {
    /// Inputs shorter than this produce no suggestions.
    pub min_prefix_len: usize,
    /// Minimum similarity for a non-prefix substring match to qualify.
    pub min_similarity: f64,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            min_prefix_len: 2,
            min_similarity: 0.7,
        }
    }
}

/// Get autocomplete suggestions for a partial input.
///
/// Prefix matches score 1.0 regardless of term length; other substring
/// matches are kept when their normalized similarity clears the
/// configured threshold. Results are sorted by descending score and
/// capped at `max_results`.
pub fn autocomplete_suggestions(
    dictionary: &TermDictionary,
    partial: &str,
    max_results: usize,
) -> Vec<String> {
    autocomplete_suggestions_with_config(
        dictionary,
        partial,
        max_results,
        &AutocompleteConfig::default(),
    )
}

/// Autocomplete with explicit configuration.
pub fn autocomplete_suggestions_with_config(
    dictionary: &TermDictionary,
    partial: &str,
    max_results: usize,
    config: &AutocompleteConfig,
) -> Vec<String> {
    if partial.chars().count() < config.min_prefix_len {
        return Vec::new();
    }

    let partial_lower = partial.to_lowercase();
    let mut suggestions: Vec<Match> = Vec::new();

    for term in dictionary.terms() {
        if term.starts_with(&partial_lower) {
            suggestions.push(Match::new(term.clone(), 1.0, 0));
        } else if term.contains(&partial_lower) {
            let score = similarity(&partial_lower, term);
            if score >= config.min_similarity {
                suggestions.push(Match::new(
                    term.clone(),
                    score,
                    levenshtein_distance(&partial_lower, term),
                ));
            }
        }
    }

    suggestions.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions.truncate(max_results);
    suggestions.into_iter().map(|m| m.text).collect()
}
