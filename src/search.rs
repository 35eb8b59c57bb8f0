//! Correction-fallback search orchestration.
//!
//! Wraps a caller-supplied search function with spell correction: the
//! original query always runs first, and the corrected query is tried
//! only when the original found nothing and the checker was unconfident
//! about the input. This keeps legitimate zero-result exact searches from
//! being silently rewritten.

use serde::{Deserialize, Serialize};

use crate::spelling::checker::{SpellCheckResult, SpellChecker};

/// Search results wrapped with spelling-correction information.
#[derive(Debug, Clone)]
pub struct CorrectedSearchResults<T> {
    /// The result list produced by the caller's search function.
    pub results: Vec<T>,
    /// Spell-check outcome for the raw query.
    pub spell_check: SpellCheckResult,
    /// Whether the corrected query's results were actually used.
    pub used_correction: bool,
}

impl<T> CorrectedSearchResults<T> {
    /// The query whose results are being returned.
    pub fn effective_query(&self) -> &str {
        if self.used_correction {
            &self.spell_check.corrected
        } else {
            &self.spell_check.original
        }
    }
}

/// Configuration for the correcting searcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Spell-check confidence at or above which the input is assumed
    /// correct and no corrected retry is attempted.
    pub high_confidence: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            high_confidence: 0.8,
        }
    }
}

/// Orchestrates a caller-supplied search function with correction
/// fallback.
///
/// The search function is treated as opaque: Tashih places no constraint
/// on the result type and performs no error handling around it, so any
/// panic it raises propagates to the caller unmodified.
#[derive(Debug, Clone)]
pub struct CorrectingSearcher {
    checker: SpellChecker,
    config: SearchConfig,
}

impl CorrectingSearcher {
    /// Create a new correcting searcher over the given spell checker.
    pub fn new(checker: SpellChecker) -> Self {
        CorrectingSearcher {
            checker,
            config: SearchConfig::default(),
        }
    }

    /// Create a new correcting searcher with custom configuration.
    pub fn with_config(checker: SpellChecker, config: SearchConfig) -> Self {
        CorrectingSearcher { checker, config }
    }

    /// Get the underlying spell checker.
    pub fn checker(&self) -> &SpellChecker {
        &self.checker
    }

    /// Run a search with spell-correction fallback.
    ///
    /// The original query is searched first and wins whenever it returns
    /// anything, or whenever the spell checker is confident the input was
    /// already correct. Otherwise the corrected query is searched, and
    /// its results are used only if non-empty.
    pub fn search_with_correction<T, F>(
        &self,
        query: &str,
        search_fn: F,
    ) -> CorrectedSearchResults<T>
    where
        F: Fn(&str) -> Vec<T>,
    {
        let spell_check = self.checker.check(query);

        // Always try the original query first.
        let original_results = search_fn(query);

        if !original_results.is_empty() || spell_check.confidence >= self.config.high_confidence {
            return CorrectedSearchResults {
                results: original_results,
                spell_check,
                used_correction: false,
            };
        }

        // Retry with the corrected query.
        let corrected_results = search_fn(&spell_check.corrected);
        let used_correction = !corrected_results.is_empty();

        CorrectedSearchResults {
            results: if used_correction {
                corrected_results
            } else {
                original_results
            },
            spell_check,
            used_correction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::dictionary::{ProductTerms, TermDictionary};
    use crate::spelling::matcher::FuzzyMatcher;

    fn searcher() -> CorrectingSearcher {
        CorrectingSearcher::new(SpellChecker::new(FuzzyMatcher::new(
            ProductTerms::storefront(),
        )))
    }

    #[test]
    fn test_original_results_short_circuit() {
        let searcher = searcher();

        let outcome = searcher.search_with_correction("هاتاف", |q| {
            if q == "هاتاف" {
                vec!["X"]
            } else {
                vec![]
            }
        });

        assert_eq!(outcome.results, vec!["X"]);
        assert!(!outcome.used_correction);
        assert_eq!(outcome.effective_query(), "هاتاف");
    }

    #[test]
    fn test_high_confidence_skips_retry() {
        let searcher = searcher();
        let calls = std::cell::RefCell::new(Vec::new());

        // "phone" is an exact dictionary term, so confidence is 1.0 and
        // the empty original result is returned without a retry.
        let outcome = searcher.search_with_correction("phone", |q| {
            calls.borrow_mut().push(q.to_string());
            Vec::<&str>::new()
        });

        assert!(outcome.results.is_empty());
        assert!(!outcome.used_correction);
        assert_eq!(calls.borrow().as_slice(), ["phone"]);
    }

    #[test]
    fn test_fallback_to_corrected_query() {
        let searcher = searcher();

        // "هاتاف" corrects at 0.9 and "ققق" is uncorrectable at 0.5, so
        // overall confidence is 0.7 and the corrected query is retried.
        let outcome = searcher.search_with_correction("هاتاف ققق", |q| {
            if q == "هاتف ققق" {
                vec!["smart phone"]
            } else {
                vec![]
            }
        });

        assert!(outcome.used_correction);
        assert_eq!(outcome.results, vec!["smart phone"]);
        assert_eq!(outcome.effective_query(), "هاتف ققق");
    }

    #[test]
    fn test_fallback_keeps_empty_originals_when_retry_fails() {
        let searcher = searcher();

        let outcome =
            searcher.search_with_correction("هاتاف ققق", |_| Vec::<&str>::new());

        assert!(outcome.results.is_empty());
        assert!(!outcome.used_correction);
    }

    #[test]
    fn test_generic_result_type() {
        let mut dict = TermDictionary::new();
        dict.add_term("phone");
        let searcher = CorrectingSearcher::new(SpellChecker::new(FuzzyMatcher::new(dict)));

        let outcome = searcher.search_with_correction("phone", |_| vec![1u32, 2, 3]);
        assert_eq!(outcome.results, vec![1, 2, 3]);
    }
}
