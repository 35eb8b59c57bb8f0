//! Spelling correction and fuzzy matching for Tashih.
//!
//! This module provides functionality for matching query terms against a
//! static product-term dictionary, correcting typos in user queries, and
//! generating autocomplete suggestions.

pub mod autocomplete;
pub mod checker;
pub mod dictionary;
pub mod levenshtein;
pub mod matcher;

// Re-export commonly used types
pub use autocomplete::*;
pub use checker::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use matcher::*;
