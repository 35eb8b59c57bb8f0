//! # Tashih
//!
//! A fuzzy-search, spell-correction, and intent-matching engine for
//! storefront product search.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Levenshtein-based fuzzy term matching over a static term dictionary
//! - Known-typo table lookups for trusted one-shot corrections
//! - Query spell checking with per-token confidence aggregation
//! - Correction-fallback search orchestration over caller-supplied search
//!   functions
//! - Prefix/substring autocomplete suggestions
//! - Rule-based, first-match-wins intent classification for Arabic and
//!   English messages

pub mod cli;
pub mod error;
pub mod intent;
pub mod search;
pub mod spelling;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
