//! End-to-end correction flow scenarios over the built-in storefront
//! vocabulary.

use tashih::search::CorrectingSearcher;
use tashih::spelling::autocomplete::autocomplete_suggestions;
use tashih::spelling::checker::SpellChecker;
use tashih::spelling::dictionary::{ProductTerms, TermDictionary};
use tashih::spelling::matcher::FuzzyMatcher;

fn product_catalog() -> Vec<&'static str> {
    vec![
        "هاتف ذكي سامسونج",
        "هاتف ذكي آيفون",
        "حاسوب محمول",
        "ساعة ذكية",
        "smartphone case",
        "laptop stand",
    ]
}

fn searcher() -> CorrectingSearcher {
    CorrectingSearcher::new(SpellChecker::new(FuzzyMatcher::new(
        ProductTerms::storefront(),
    )))
}

fn substring_search<'a>(catalog: &'a [&'static str]) -> impl Fn(&str) -> Vec<&'static str> + 'a {
    move |query: &str| {
        let query_lower = query.to_lowercase();
        catalog
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&query_lower))
            .copied()
            .collect()
    }
}

#[test]
fn misspelled_arabic_query_is_matched_through_typo_table() {
    let matcher = FuzzyMatcher::new(ProductTerms::storefront());

    let matches = matcher.find_matches("هاتاف");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "هاتف");
    assert!((matches[0].score - 0.9).abs() < 1e-9);
    assert_eq!(matches[0].distance, 1);
}

#[test]
fn short_arabic_token_passes_spell_check_unchanged() {
    let checker = SpellChecker::new(FuzzyMatcher::new(ProductTerms::storefront()));

    let result = checker.check("ال");
    assert_eq!(result.corrected, "ال");
    assert!((result.confidence - 1.0).abs() < 1e-9);
    assert!(result.suggestions.is_empty());
}

#[test]
fn search_uses_original_results_when_available() {
    let catalog = product_catalog();
    let searcher = searcher();

    let outcome = searcher.search_with_correction("ساعة", substring_search(&catalog));

    assert!(!outcome.used_correction);
    assert_eq!(outcome.results, vec!["ساعة ذكية"]);
}

#[test]
fn search_falls_back_to_corrected_query() {
    let searcher = searcher();

    // "هاتاف ققق": the first token corrects through the typo table at
    // 0.9, the second is uncorrectable at 0.5, so overall confidence is
    // 0.7 and the corrected query is retried. The per-token catalog
    // search finds nothing for the original spelling but matches the
    // corrected one.
    let searcher_fn = |query: &str| {
        let query_lower = query.to_lowercase();
        product_catalog()
            .into_iter()
            .filter(|entry| {
                query_lower
                    .split_whitespace()
                    .any(|token| entry.contains(token))
            })
            .collect::<Vec<_>>()
    };

    let outcome = searcher.search_with_correction("هاتاف ققق", searcher_fn);

    assert!(outcome.used_correction);
    assert!(outcome.spell_check.confidence < 0.8);
    assert!(
        outcome
            .results
            .iter()
            .all(|entry| entry.contains("هاتف"))
    );
    assert!(!outcome.results.is_empty());
}

#[test]
fn zero_result_exact_query_is_not_rewritten() {
    let catalog = product_catalog();
    let searcher = searcher();

    // "phone" is a dictionary term, so spell-check confidence is 1.0 and
    // the empty original result is returned as-is.
    let outcome = searcher.search_with_correction("phone", substring_search(&catalog));

    assert!(outcome.results.is_empty());
    assert!(!outcome.used_correction);
}

#[test]
fn autocomplete_respects_minimum_length() {
    let dict = ProductTerms::storefront();

    assert!(autocomplete_suggestions(&dict, "s", 5).is_empty());
    assert!(autocomplete_suggestions(&dict, "", 5).is_empty());
    assert!(!autocomplete_suggestions(&dict, "sm", 5).is_empty());
}

#[test]
fn custom_dictionary_end_to_end() {
    let mut dict = TermDictionary::new();
    dict.add_term("هاتف");
    dict.add_term("ذكي");
    dict.add_typo("هاتاف", "هاتف");

    let matcher = FuzzyMatcher::new(dict);
    let matches = matcher.find_matches("هاتاف");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].text, "هاتف");
    assert!((matches[0].score - 0.9).abs() < 1e-9);
    assert_eq!(matches[0].distance, 1);
}
