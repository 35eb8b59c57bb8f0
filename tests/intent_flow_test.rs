//! Intent classification feeding the correcting searcher, mirroring how
//! a storefront chat assistant routes product questions into search.

use tashih::intent::{Intent, IntentClassifier, Language, extract_keywords};
use tashih::search::CorrectingSearcher;
use tashih::spelling::checker::SpellChecker;
use tashih::spelling::dictionary::ProductTerms;
use tashih::spelling::matcher::FuzzyMatcher;

#[test]
fn product_question_routes_to_search() {
    let classifier = IntentClassifier::builtin(Language::Arabic);
    let message = "أريد هاتف ذكي";

    assert_eq!(classifier.classify(message), Intent::ProductSearch);

    let keywords = extract_keywords(message, Language::Arabic);
    assert_eq!(keywords, ["هاتف", "ذكي"]);

    let searcher = CorrectingSearcher::new(SpellChecker::new(FuzzyMatcher::new(
        ProductTerms::storefront(),
    )));
    let catalog = ["هاتف ذكي سامسونج", "حاسوب محمول"];

    let outcome = searcher.search_with_correction(&keywords.join(" "), |query| {
        catalog
            .iter()
            .filter(|entry| {
                query
                    .split_whitespace()
                    .all(|token| entry.contains(token))
            })
            .copied()
            .collect::<Vec<_>>()
    });

    assert!(!outcome.used_correction);
    assert_eq!(outcome.results, vec!["هاتف ذكي سامسونج"]);
}

#[test]
fn non_product_messages_keep_their_intent() {
    let classifier = IntentClassifier::builtin(Language::English);

    assert_eq!(classifier.classify("good morning"), Intent::Greeting);
    assert_eq!(classifier.classify("refund please"), Intent::Returns);
    assert_eq!(classifier.classify("total gibberish xqz"), Intent::Unknown);
}

#[test]
fn misspelled_keywords_still_reach_the_catalog() {
    let searcher = CorrectingSearcher::new(SpellChecker::new(FuzzyMatcher::new(
        ProductTerms::storefront(),
    )));
    let catalog = ["هاتف ذكي سامسونج"];

    // A misspelling plus an unknown token keeps confidence below the
    // retry threshold, so the corrected query reaches the catalog.
    let outcome = searcher.search_with_correction("هاتاف ببببب", |query| {
        catalog
            .iter()
            .filter(|entry| {
                query
                    .split_whitespace()
                    .any(|token| entry.contains(token))
            })
            .copied()
            .collect::<Vec<_>>()
    });

    assert!(outcome.used_correction);
    assert_eq!(outcome.results, vec!["هاتف ذكي سامسونج"]);
}
