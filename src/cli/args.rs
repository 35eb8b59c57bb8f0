//! Command line argument parsing for the Tashih CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::intent::Language;

/// Tashih - fuzzy search and spell correction for storefront queries
#[derive(Parser, Debug, Clone)]
#[command(name = "tashih")]
#[command(about = "Fuzzy search, spell correction, and intent matching for storefront queries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TashihArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Term dictionary file (one term per line); defaults to the built-in
    /// storefront vocabulary
    #[arg(short, long, value_name = "TERM_FILE")]
    pub dictionary: Option<PathBuf>,

    /// Known-typo file ("misspelling correction" per line)
    #[arg(short, long, value_name = "TYPO_FILE")]
    pub typos: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TashihArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Message language option.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageOpt {
    /// Arabic
    Ar,
    /// English
    En,
}

impl From<LanguageOpt> for Language {
    fn from(opt: LanguageOpt) -> Self {
        match opt {
            LanguageOpt::Ar => Language::Arabic,
            LanguageOpt::En => Language::English,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find fuzzy matches for a single term
    #[command(name = "match")]
    Match(MatchArgs),

    /// Spell-check a query
    Check(CheckArgs),

    /// Autocomplete a partial input
    Complete(CompleteArgs),

    /// Search a catalog file with spell-correction fallback
    Search(SearchArgs),

    /// Classify the intent of a chat message
    Intent(IntentArgs),
}

/// Arguments for fuzzy matching
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// The term to match
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of matches to return
    #[arg(short, long, default_value = "5")]
    pub max_results: usize,
}

/// Arguments for spell checking
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// The query to spell-check
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for autocomplete
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// The partial input to complete
    #[arg(value_name = "PARTIAL")]
    pub partial: String,

    /// Maximum number of suggestions to return
    #[arg(short, long, default_value = "5")]
    pub max_results: usize,
}

/// Arguments for correcting search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// The query to search for
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Catalog file with one entry per line, searched by case-insensitive
    /// substring match
    #[arg(value_name = "CATALOG_FILE")]
    pub catalog: PathBuf,
}

/// Arguments for intent classification
#[derive(Parser, Debug, Clone)]
pub struct IntentArgs {
    /// The chat message to classify
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Message language
    #[arg(short, long, default_value = "ar")]
    pub language: LanguageOpt,
}
