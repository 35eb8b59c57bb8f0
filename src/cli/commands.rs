//! Command implementations for the Tashih CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::intent::{IntentClassifier, extract_keywords};
use crate::search::CorrectingSearcher;
use crate::spelling::autocomplete::autocomplete_suggestions;
use crate::spelling::checker::SpellChecker;
use crate::spelling::dictionary::{ProductTerms, TermDictionary};
use crate::spelling::matcher::FuzzyMatcher;

/// Execute a CLI command.
pub fn execute_command(args: TashihArgs) -> Result<()> {
    match &args.command {
        Command::Match(match_args) => run_match(match_args.clone(), &args),
        Command::Check(check_args) => run_check(check_args.clone(), &args),
        Command::Complete(complete_args) => run_complete(complete_args.clone(), &args),
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Intent(intent_args) => run_intent(intent_args.clone(), &args),
    }
}

/// Build the term dictionary from CLI options, defaulting to the built-in
/// storefront vocabulary.
fn load_dictionary(args: &TashihArgs) -> Result<TermDictionary> {
    let mut dictionary = match &args.dictionary {
        Some(path) => {
            debug!("loading dictionary from {}", path.display());
            TermDictionary::load_from_file(path)?
        }
        None => ProductTerms::storefront(),
    };

    if let Some(path) = &args.typos {
        debug!("loading typo table from {}", path.display());
        dictionary.load_typos_from_file(path)?;
    }

    debug!(
        "dictionary ready: {} terms, {} typos",
        dictionary.len(),
        dictionary.typo_count()
    );
    Ok(dictionary)
}

/// Find fuzzy matches for a term.
fn run_match(args: MatchArgs, cli_args: &TashihArgs) -> Result<()> {
    let matcher = FuzzyMatcher::new(load_dictionary(cli_args)?);
    let matches = matcher.find_matches_limit(&args.query, args.max_results);

    output_result(
        &MatchReport {
            query: args.query,
            matches,
        },
        cli_args,
    )
}

/// Spell-check a query.
fn run_check(args: CheckArgs, cli_args: &TashihArgs) -> Result<()> {
    let checker = SpellChecker::new(FuzzyMatcher::new(load_dictionary(cli_args)?));
    let spell_check = checker.check(&args.query);

    output_result(&CheckReport { spell_check }, cli_args)
}

/// Autocomplete a partial input.
fn run_complete(args: CompleteArgs, cli_args: &TashihArgs) -> Result<()> {
    let dictionary = load_dictionary(cli_args)?;
    let suggestions = autocomplete_suggestions(&dictionary, &args.partial, args.max_results);

    output_result(
        &CompleteReport {
            partial: args.partial,
            suggestions,
        },
        cli_args,
    )
}

/// Search a catalog file with correction fallback.
fn run_search(args: SearchArgs, cli_args: &TashihArgs) -> Result<()> {
    let checker = SpellChecker::new(FuzzyMatcher::new(load_dictionary(cli_args)?));
    let searcher = CorrectingSearcher::new(checker);

    let catalog = load_catalog(&args)?;
    debug!("catalog loaded: {} entries", catalog.len());

    let outcome = searcher.search_with_correction(&args.query, |query| {
        let query_lower = query.to_lowercase();
        catalog
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&query_lower))
            .cloned()
            .collect()
    });

    output_result(
        &SearchReport {
            query: args.query,
            effective_query: outcome.effective_query().to_string(),
            used_correction: outcome.used_correction,
            results: outcome.results,
            spell_check: outcome.spell_check,
        },
        cli_args,
    )
}

/// Load catalog entries, one per line.
fn load_catalog(args: &SearchArgs) -> Result<Vec<String>> {
    let file = File::open(&args.catalog)?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();
        if !entry.is_empty() {
            entries.push(entry.to_string());
        }
    }

    Ok(entries)
}

/// Classify the intent of a chat message.
fn run_intent(args: IntentArgs, cli_args: &TashihArgs) -> Result<()> {
    let language = args.language.into();
    let classifier = IntentClassifier::builtin(language);
    let intent = classifier.classify(&args.message);
    let keywords = extract_keywords(&args.message, language);

    output_result(
        &IntentReport {
            message: args.message,
            intent,
            keywords,
        },
        cli_args,
    )
}
