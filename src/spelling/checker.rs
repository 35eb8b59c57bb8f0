//! Query spell checking with per-token confidence aggregation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::spelling::matcher::FuzzyMatcher;

/// Result of spell-checking a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellCheckResult {
    /// The query as given.
    pub original: String,
    /// The corrected query. Equal to `original` when nothing changed, so
    /// unchanged queries are detectable by plain equality.
    pub corrected: String,
    /// Mean per-token confidence, in [0.0, 1.0].
    pub confidence: f64,
    /// Alternate corrections pooled across tokens, deduplicated and
    /// capped.
    pub suggestions: Vec<String>,
}

impl SpellCheckResult {
    /// Create a pass-through result for a query that needed no work.
    pub fn passthrough(query: &str) -> Self {
        SpellCheckResult {
            original: query.to_string(),
            corrected: query.to_string(),
            confidence: 1.0,
            suggestions: Vec::new(),
        }
    }

    /// Whether the checker changed the query text.
    pub fn was_corrected(&self) -> bool {
        self.corrected != self.original
    }
}

/// Configuration for the spell checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Tokens shorter than this pass through unchanged with full
    /// confidence; they are too short to correct meaningfully.
    pub min_token_len: usize,
    /// Minimum top-candidate score required to accept a correction.
    pub accept_score: f64,
    /// Confidence contributed by a token with no acceptable candidate.
    /// Deliberately above zero: an uncorrectable token is a penalty, not
    /// a failure.
    pub unknown_confidence: f64,
    /// Matcher cap used per token.
    pub candidates_per_token: usize,
    /// Maximum number of pooled suggestions to report.
    pub max_suggestions: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            min_token_len: 3,
            accept_score: 0.8,
            unknown_confidence: 0.5,
            candidates_per_token: 3,
            max_suggestions: 3,
        }
    }
}

/// Spell checker that corrects whitespace-delimited query tokens through
/// the fuzzy matcher.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    matcher: FuzzyMatcher,
    config: CheckerConfig,
}

impl SpellChecker {
    /// Create a new spell checker over the given matcher.
    pub fn new(matcher: FuzzyMatcher) -> Self {
        SpellChecker {
            matcher,
            config: CheckerConfig::default(),
        }
    }

    /// Create a new spell checker with custom configuration.
    pub fn with_config(matcher: FuzzyMatcher, config: CheckerConfig) -> Self {
        SpellChecker { matcher, config }
    }

    /// Get the underlying matcher.
    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    /// Get the checker configuration.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Spell-check a free-text query.
    ///
    /// Each whitespace-delimited token is corrected independently; the
    /// overall confidence is the mean of the per-token contributions.
    /// Never fails: queries with no correctable content pass through at
    /// full confidence.
    pub fn check(&self, query: &str) -> SpellCheckResult {
        let tokens: Vec<&str> = query.split_whitespace().collect();

        // Empty or whitespace-only input has nothing to correct.
        if tokens.is_empty() {
            return SpellCheckResult::passthrough(query);
        }

        let mut corrected_tokens: Vec<String> = Vec::with_capacity(tokens.len());
        let mut total_confidence = 0.0;
        let mut suggestion_pool: Vec<String> = Vec::new();

        for token in &tokens {
            if token.chars().count() < self.config.min_token_len {
                corrected_tokens.push((*token).to_string());
                total_confidence += 1.0;
                continue;
            }

            let matches = self
                .matcher
                .find_matches_limit(token, self.config.candidates_per_token);

            match matches.first() {
                Some(best) if best.score >= self.config.accept_score => {
                    corrected_tokens.push(best.text.clone());
                    total_confidence += best.score;

                    for alternate in matches.iter().skip(1) {
                        suggestion_pool.push(alternate.text.clone());
                    }
                }
                _ => {
                    corrected_tokens.push((*token).to_string());
                    total_confidence += self.config.unknown_confidence;
                }
            }
        }

        let rejoined = corrected_tokens.join(" ");
        let corrected = if rejoined == query {
            query.to_string()
        } else {
            rejoined
        };
        let confidence = total_confidence / tokens.len() as f64;

        // Deduplicate suggestions in first-seen order, then cap.
        let mut seen = HashSet::new();
        let mut suggestions: Vec<String> = suggestion_pool
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .collect();
        suggestions.truncate(self.config.max_suggestions);

        SpellCheckResult {
            original: query.to_string(),
            corrected,
            confidence,
            suggestions,
        }
    }
}
