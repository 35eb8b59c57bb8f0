//! Fuzzy term matching against the term dictionary.

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::TermDictionary;
use crate::spelling::levenshtein::{levenshtein_distance, similarity};

/// A single fuzzy match against the dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The matched dictionary term (or typo-table correction).
    pub text: String,
    /// Normalized similarity score in [0.0, 1.0]; 1.0 is an exact match.
    pub score: f64,
    /// Edit distance from the query to the matched text.
    pub distance: usize,
}

impl Match {
    /// Create a new match.
    pub fn new(text: String, score: f64, distance: usize) -> Self {
        Match {
            text,
            score,
            distance,
        }
    }
}

/// Configuration for the fuzzy matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Default maximum number of matches to return.
    pub max_results: usize,
    /// Minimum similarity for a scanned term to qualify.
    pub min_similarity: f64,
    /// Maximum edit distance for a scanned term to qualify. A term
    /// qualifies on either criterion, which matters for short terms where
    /// small distances still yield low normalized similarity.
    pub max_distance: usize,
    /// Fixed score assigned to typo-table hits, weighted just below an
    /// exact dictionary hit.
    pub typo_score: f64,
    /// Scores closer than this are treated as tied and ranked by
    /// ascending distance instead, to keep floating-point noise from
    /// reordering near-equal candidates.
    pub score_tie_epsilon: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            max_results: 5,
            min_similarity: 0.6,
            max_distance: 2,
            typo_score: 0.9,
            score_tie_epsilon: 0.1,
        }
    }
}

/// Fuzzy matcher that ranks dictionary terms against a query.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    dictionary: TermDictionary,
    config: MatcherConfig,
}

impl FuzzyMatcher {
    /// Create a new matcher over the given dictionary.
    pub fn new(dictionary: TermDictionary) -> Self {
        FuzzyMatcher {
            dictionary,
            config: MatcherConfig::default(),
        }
    }

    /// Create a new matcher with custom configuration.
    pub fn with_config(dictionary: TermDictionary, config: MatcherConfig) -> Self {
        FuzzyMatcher { dictionary, config }
    }

    /// Get the underlying dictionary.
    pub fn dictionary(&self) -> &TermDictionary {
        &self.dictionary
    }

    /// Get the matcher configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Find fuzzy matches for a query, capped at the configured default.
    pub fn find_matches(&self, query: &str) -> Vec<Match> {
        self.find_matches_limit(query, self.config.max_results)
    }

    /// Find fuzzy matches for a query, capped at `max_results`.
    ///
    /// Exact dictionary hits and known-typo hits short-circuit to a single
    /// match; otherwise the whole dictionary is scanned and ranked. Never
    /// fails; returns an empty vec when nothing qualifies.
    pub fn find_matches_limit(&self, query: &str, max_results: usize) -> Vec<Match> {
        let query_lower = query.to_lowercase();

        // Exact dictionary hit. The query is echoed back as given so that
        // already-correct input stays equal to itself downstream.
        if self.dictionary.contains(&query_lower) {
            return vec![Match::new(query.to_string(), 1.0, 0)];
        }

        // Trusted typo-table hit.
        if let Some(correction) = self.dictionary.correction_for(&query_lower) {
            let distance = levenshtein_distance(&query_lower, correction);
            return vec![Match::new(
                correction.to_string(),
                self.config.typo_score,
                distance,
            )];
        }

        // Full dictionary scan.
        let mut matches = Vec::new();
        for term in self.dictionary.terms() {
            let score = similarity(&query_lower, term);
            let distance = levenshtein_distance(&query_lower, term);

            if score >= self.config.min_similarity || distance <= self.config.max_distance {
                matches.push(Match::new(term.clone(), score, distance));
            }
        }

        // Descending score, with ascending distance breaking near-ties.
        let epsilon = self.config.score_tie_epsilon;
        matches.sort_by(|a, b| {
            if (a.score - b.score).abs() > epsilon {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            } else {
                a.distance.cmp(&b.distance)
            }
        });

        matches.truncate(max_results);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::dictionary::ProductTerms;

    fn small_dictionary() -> TermDictionary {
        let mut dict = TermDictionary::new();
        for term in ["phone", "smartphone", "laptop", "watch", "watches"] {
            dict.add_term(term);
        }
        dict.add_typo("fone", "phone");
        dict
    }

    #[test]
    fn test_exact_match_short_circuits() {
        let matcher = FuzzyMatcher::new(small_dictionary());

        let matches = matcher.find_matches("phone");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "phone");
        assert!((matches[0].score - 1.0).abs() < 1e-9);
        assert_eq!(matches[0].distance, 0);
    }

    #[test]
    fn test_exact_match_preserves_caller_casing() {
        let matcher = FuzzyMatcher::new(small_dictionary());

        let matches = matcher.find_matches("Phone");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "Phone");
        assert_eq!(matches[0].distance, 0);
    }

    #[test]
    fn test_typo_table_hit() {
        let matcher = FuzzyMatcher::new(small_dictionary());

        let matches = matcher.find_matches("fone");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "phone");
        assert!((matches[0].score - 0.9).abs() < 1e-9);
        assert_eq!(matches[0].distance, 2); // fone -> phone
    }

    #[test]
    fn test_fuzzy_scan_qualifies_on_similarity_or_distance() {
        let matcher = FuzzyMatcher::new(small_dictionary());

        // "watcj" is distance 1 from "watch" and similar enough on both
        // criteria.
        let matches = matcher.find_matches("watcj");
        assert!(!matches.is_empty());
        assert_eq!(matches[0].text, "watch");

        // Short query against a short term: distance <= 2 admits it even
        // when normalized similarity falls below the threshold
        // ("yo" vs "go": similarity 0.5, distance 1).
        let mut dict = TermDictionary::new();
        dict.add_term("go");
        let matcher = FuzzyMatcher::new(dict);
        let matches = matcher.find_matches("yo");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "go");
    }

    #[test]
    fn test_no_qualifying_terms_returns_empty() {
        let matcher = FuzzyMatcher::new(small_dictionary());

        let matches = matcher.find_matches("xylophone-concerto");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_ranking_is_non_increasing_modulo_tie_rule() {
        let matcher = FuzzyMatcher::new(small_dictionary());
        let config = matcher.config().clone();

        let matches = matcher.find_matches("watchs");
        assert!(matches.len() >= 2);
        for pair in matches.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if (a.score - b.score).abs() > config.score_tie_epsilon {
                assert!(a.score > b.score);
            } else {
                assert!(a.distance <= b.distance);
            }
        }
    }

    #[test]
    fn test_tied_scores_break_by_distance() {
        let mut dict = TermDictionary::new();
        dict.add_term("watch");
        dict.add_term("watches");
        let matcher = FuzzyMatcher::new(dict);

        // "watche": watch has distance 1 (score 5/6), watches distance 1
        // (score 6/7); scores differ by less than 0.1, so the tie holds
        // and both distances are equal, preserving scan order.
        let matches = matcher.find_matches("watche");
        assert_eq!(matches.len(), 2);
        assert!(matches[0].distance <= matches[1].distance);
    }

    #[test]
    fn test_result_cap() {
        let matcher = FuzzyMatcher::new(ProductTerms::storefront());

        let matches = matcher.find_matches_limit("wat", 2);
        assert!(matches.len() <= 2);

        let matches = matcher.find_matches("wat");
        assert!(matches.len() <= matcher.config().max_results);
    }

    #[test]
    fn test_arabic_typo_end_to_end() {
        let matcher = FuzzyMatcher::new(ProductTerms::storefront());

        let matches = matcher.find_matches("هاتاف");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "هاتف");
        assert!((matches[0].score - 0.9).abs() < 1e-9);
        assert_eq!(matches[0].distance, 1); // one-character deletion
    }

    #[test]
    fn test_empty_dictionary() {
        let matcher = FuzzyMatcher::new(TermDictionary::new());
        assert!(matcher.find_matches("phone").is_empty());
    }
}
