//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TashihArgs};
use crate::error::Result;
use crate::intent::Intent;
use crate::spelling::checker::SpellCheckResult;
use crate::spelling::matcher::Match;

/// Result structure for fuzzy matching.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchReport {
    pub query: String,
    pub matches: Vec<Match>,
}

/// Result structure for spell checking.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    #[serde(flatten)]
    pub spell_check: SpellCheckResult,
}

/// Result structure for autocomplete.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompleteReport {
    pub partial: String,
    pub suggestions: Vec<String>,
}

/// Result structure for correcting search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchReport {
    pub query: String,
    pub effective_query: String,
    pub used_correction: bool,
    pub results: Vec<String>,
    pub spell_check: SpellCheckResult,
}

/// Result structure for intent classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentReport {
    pub message: String,
    pub intent: Intent,
    pub keywords: Vec<String>,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanReport>(result: &T, args: &TashihArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output a result as JSON.
fn output_json<T: Serialize>(result: &T, args: &TashihArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Human-readable rendering for a CLI report.
pub trait HumanReport {
    fn print_human(&self, args: &TashihArgs);
}

impl HumanReport for MatchReport {
    fn print_human(&self, args: &TashihArgs) {
        if self.matches.is_empty() {
            println!("No matches for \"{}\"", self.query);
            return;
        }

        if args.verbosity() > 0 {
            println!("Matches for \"{}\":", self.query);
        }
        for (i, m) in self.matches.iter().enumerate() {
            println!(
                "{}. {} (score: {:.3}, distance: {})",
                i + 1,
                m.text,
                m.score,
                m.distance
            );
        }
    }
}

impl HumanReport for CheckReport {
    fn print_human(&self, _args: &TashihArgs) {
        let result = &self.spell_check;
        println!("Original:   {}", result.original);
        println!("Corrected:  {}", result.corrected);
        println!("Confidence: {:.3}", result.confidence);
        if !result.suggestions.is_empty() {
            println!("Suggestions: {}", result.suggestions.join(", "));
        }
    }
}

impl HumanReport for CompleteReport {
    fn print_human(&self, _args: &TashihArgs) {
        if self.suggestions.is_empty() {
            println!("No suggestions for \"{}\"", self.partial);
            return;
        }

        for suggestion in &self.suggestions {
            println!("{suggestion}");
        }
    }
}

impl HumanReport for SearchReport {
    fn print_human(&self, args: &TashihArgs) {
        if args.verbosity() > 0 {
            println!("Query: {}", self.query);
            if self.used_correction {
                println!("Did you mean: \"{}\"?", self.effective_query);
            }
            println!();
        }

        if self.results.is_empty() {
            println!("No results");
        } else {
            for result in &self.results {
                println!("{result}");
            }
        }

        if args.verbosity() > 1 {
            println!();
            println!("Spell-check confidence: {:.3}", self.spell_check.confidence);
        }
    }
}

impl HumanReport for IntentReport {
    fn print_human(&self, args: &TashihArgs) {
        let label = match self.intent {
            Intent::Greeting => "greeting",
            Intent::ProductSearch => "product_search",
            Intent::PriceInquiry => "price_inquiry",
            Intent::OrderStatus => "order_status",
            Intent::Returns => "returns",
            Intent::Shipping => "shipping",
            Intent::Payment => "payment",
            Intent::Contact => "contact",
            Intent::Unknown => "unknown",
        };
        println!("Intent: {label}");

        if args.verbosity() > 1 && !self.keywords.is_empty() {
            println!("Keywords: {}", self.keywords.join(", "));
        }
    }
}
