//! Rule-based intent classification for storefront chat messages.
//!
//! Intents are detected by a priority-ordered list of (pattern, intent)
//! rules evaluated first-match-wins, falling back to [`Intent::Unknown`].
//! There is no multi-turn state: classification depends only on the
//! message text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TashihError};

/// Message language for pattern selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic.
    #[serde(rename = "ar")]
    Arabic,
    /// English.
    #[serde(rename = "en")]
    English,
}

/// Classified message intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    ProductSearch,
    PriceInquiry,
    OrderStatus,
    Returns,
    Shipping,
    Payment,
    Contact,
    Unknown,
}

/// A single classification rule: pattern plus the intent it signals.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pattern: Regex,
    intent: Intent,
}

impl IntentRule {
    /// Compile a rule from a pattern string.
    pub fn new(pattern: &str, intent: Intent) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| TashihError::intent(format!("invalid pattern: {e}")))?;
        Ok(IntentRule { pattern, intent })
    }
}

lazy_static! {
    static ref ARABIC_RULES: Vec<(Regex, Intent)> = compile_builtin(&[
        (r"(مرحبا|اهلا|صباح|مساء|هاي|هلو)", Intent::Greeting),
        (r"(ابحث|أريد|أبحث|أشتري|منتج|سلعة)", Intent::ProductSearch),
        (r"(سعر|كم|كلفة|غلاء|رخيص|غالي)", Intent::PriceInquiry),
        (r"(طلب|حالة|وصل|توصيل|شحن)", Intent::OrderStatus),
        (r"(إرجاع|استبدال|رد|ترجيع)", Intent::Returns),
        (r"(شحن|توصيل|إرسال|ترسل)", Intent::Shipping),
        (r"(دفع|أدفع|طريقة)", Intent::Payment),
        (r"(اتصل|هاتف|بريد|تواصل|مساعدة)", Intent::Contact),
    ]);
    static ref ENGLISH_RULES: Vec<(Regex, Intent)> = compile_builtin(&[
        (r"(hello|hi|hey|good|morning|evening)", Intent::Greeting),
        (r"(search|find|looking|buy|product|item)", Intent::ProductSearch),
        (r"(price|cost|expensive|cheap|how much)", Intent::PriceInquiry),
        (r"(order|status|delivery|shipping)", Intent::OrderStatus),
        (r"(return|exchange|refund)", Intent::Returns),
        (r"(shipping|delivery|send)", Intent::Shipping),
        (r"(payment|pay|method)", Intent::Payment),
        (r"(contact|call|email|help|support)", Intent::Contact),
    ]);
    static ref ARABIC_STOP_WORDS: Vec<&'static str> = vec![
        "أريد", "أبحث", "عن", "منتج", "سعر", "كم", "هل", "ما", "كيف", "متى", "أين",
    ];
    static ref ENGLISH_STOP_WORDS: Vec<&'static str> = vec![
        "i", "want", "search", "for", "product", "price", "how", "much", "is", "the", "a", "an",
    ];
}

// Builtin patterns are literals and always compile.
fn compile_builtin(rules: &[(&str, Intent)]) -> Vec<(Regex, Intent)> {
    rules
        .iter()
        .filter_map(|(pattern, intent)| Regex::new(pattern).ok().map(|r| (r, *intent)))
        .collect()
}

/// First-match-wins intent classifier.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<(Regex, Intent)>,
}

impl IntentClassifier {
    /// Create a classifier with the built-in rules for a language.
    pub fn builtin(language: Language) -> Self {
        let rules = match language {
            Language::Arabic => ARABIC_RULES.clone(),
            Language::English => ENGLISH_RULES.clone(),
        };
        IntentClassifier { rules }
    }

    /// Create a classifier from custom rules, evaluated in order.
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        IntentClassifier {
            rules: rules.into_iter().map(|r| (r.pattern, r.intent)).collect(),
        }
    }

    /// Classify a message: the first rule whose pattern matches wins,
    /// and a message matching nothing is [`Intent::Unknown`].
    pub fn classify(&self, message: &str) -> Intent {
        let message = message.to_lowercase();
        let message = message.trim();

        for (pattern, intent) in &self.rules {
            if pattern.is_match(message) {
                return *intent;
            }
        }

        Intent::Unknown
    }
}

/// Extract up to three meaningful keywords from a message, dropping
/// per-language stop words and single-character tokens. The result feeds
/// the correcting searcher as a product query.
pub fn extract_keywords(message: &str, language: Language) -> Vec<String> {
    let stop_words: &[&str] = match language {
        Language::Arabic => &ARABIC_STOP_WORDS,
        Language::English => &ENGLISH_STOP_WORDS,
    };

    message
        .split_whitespace()
        .filter(|word| word.chars().count() > 1 && !stop_words.contains(&word.to_lowercase().as_str()))
        .map(str::to_string)
        .take(3)
        .collect()
}
