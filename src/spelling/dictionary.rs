//! Term dictionary and known-typo table for fuzzy matching.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TashihError};

/// A dictionary of known-good terms plus a table of known misspellings.
///
/// Both tables are populated at construction time and never mutated while
/// the engine is running. Terms are normalized to lowercase on insertion
/// and lookup. Insertion order is preserved so full-dictionary scans are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    /// Terms in insertion order, for scanning.
    terms: Vec<String>,
    /// Set of all terms for fast membership checks.
    term_set: HashSet<String>,
    /// Known misspellings mapped to their canonical terms.
    typos: HashMap<String, String>,
}

impl TermDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        TermDictionary {
            terms: Vec::new(),
            term_set: HashSet::new(),
            typos: HashMap::new(),
        }
    }

    /// Add a term to the dictionary. Duplicates are ignored.
    pub fn add_term<S: Into<String>>(&mut self, term: S) {
        let normalized = term.into().to_lowercase();
        if normalized.is_empty() {
            return;
        }
        if self.term_set.insert(normalized.clone()) {
            self.terms.push(normalized);
        }
    }

    /// Register a known misspelling and its canonical correction.
    pub fn add_typo<S: Into<String>, T: Into<String>>(&mut self, typo: S, correction: T) {
        let typo = typo.into().to_lowercase();
        let correction = correction.into().to_lowercase();
        if typo.is_empty() || correction.is_empty() {
            return;
        }
        self.typos.insert(typo, correction);
    }

    /// Check whether a term exists in the dictionary.
    pub fn contains(&self, term: &str) -> bool {
        self.term_set.contains(&term.to_lowercase())
    }

    /// Look up the canonical correction for a known misspelling.
    pub fn correction_for(&self, typo: &str) -> Option<&str> {
        self.typos.get(&typo.to_lowercase()).map(String::as_str)
    }

    /// All terms, in insertion order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of unique terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the dictionary holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of registered misspellings.
    pub fn typo_count(&self) -> usize {
        self.typos.len()
    }

    /// Load terms from a text file with one term per line.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = TermDictionary::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let term = line.trim();
            if !term.is_empty() && !term.starts_with('#') {
                dictionary.add_term(term);
            }
        }

        Ok(dictionary)
    }

    /// Load known typos from a file with `misspelling correction` pairs,
    /// whitespace-separated, one pair per line. Blank lines and `#`
    /// comments are skipped.
    pub fn load_typos_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(typo), Some(correction)) => self.add_typo(typo, correction),
                _ => {
                    return Err(TashihError::dictionary(format!(
                        "line {}: expected 'misspelling correction'",
                        line_num + 1
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Built-in storefront vocabulary: Arabic and English product terms plus
/// a table of common Arabic misspellings.
pub struct ProductTerms;

impl ProductTerms {
    /// Create a dictionary seeded with the storefront product vocabulary.
    pub fn storefront() -> TermDictionary {
        let mut dict = TermDictionary::new();

        let arabic_terms = [
            "هاتف",
            "ذكي",
            "حاسوب",
            "محمول",
            "ساعة",
            "أحذية",
            "ملابس",
            "رياضية",
            "ألعاب",
            "كتب",
            "أثاث",
            "عطور",
            "تجميل",
            "إلكترونيات",
            "أجهزة",
            "نسائية",
            "رجالية",
            "أطفال",
            "منزل",
            "مطبخ",
            "غرفة",
            "نوم",
            "صالة",
            "حمام",
            "مكتب",
            "دراسة",
            "لعبة",
            "ترفيه",
            "رياضة",
            "صحة",
            "جمال",
            "عناية",
            "بشرة",
            "شعر",
            "أظافر",
            "ماكياج",
            "ساعات",
            "مجوهرات",
            "حقائب",
            "شنط",
            "أحزمة",
            "نظارات",
            "قبعات",
            "قفازات",
            "جوارب",
            "داخلية",
            "سباحة",
            "جري",
            "كرة",
            "قدم",
            "سلة",
            "تنس",
            "اسكواش",
            "يوغا",
            "تاي",
            "تشي",
            "زومبا",
            "رقص",
            "موسيقى",
            "أفلام",
            "مسلسلات",
            "روايات",
            "قصص",
            "تاريخ",
            "علوم",
            "طبخ",
            "خبز",
            "حلويات",
            "مشروبات",
            "قهوة",
            "شاي",
            "عصير",
            "ماء",
            "غازية",
            "طبيعية",
            "عضوية",
            "بيولوجية",
            "صديقة",
            "البيئة",
            "أخضر",
            "أزرق",
            "أحمر",
            "أصفر",
            "وردي",
            "رمادي",
            "أسود",
            "أبيض",
            "بني",
            "برتقالي",
            "أرجواني",
            "ذهبي",
            "فضي",
            "نحاسي",
            "خشبي",
            "معدني",
            "بلاستيكي",
            "زجاجي",
            "قطني",
            "صوفي",
            "حريري",
            "جلدي",
            "مطاطي",
            "نايلون",
            "بوليستر",
            "صغير",
            "متوسط",
            "كبير",
            "عملاق",
            "مصغر",
        ];

        let english_terms = [
            "phone",
            "smartphone",
            "computer",
            "laptop",
            "watch",
            "shoes",
            "clothes",
            "sports",
            "games",
            "books",
            "furniture",
            "perfume",
            "cosmetics",
            "electronics",
            "devices",
            "women",
            "men",
            "kids",
            "home",
            "kitchen",
            "bedroom",
            "living",
            "bathroom",
            "office",
            "study",
            "toy",
            "entertainment",
            "sport",
            "health",
            "beauty",
            "care",
            "skin",
            "hair",
            "nails",
            "makeup",
            "watches",
            "jewelry",
            "bags",
            "belts",
            "glasses",
            "hats",
            "gloves",
            "socks",
            "underwear",
            "swim",
            "run",
            "football",
            "basketball",
            "tennis",
            "squash",
            "yoga",
            "tai",
            "chi",
            "zumba",
            "dance",
            "music",
            "movies",
            "series",
            "novels",
            "stories",
            "poetry",
            "history",
            "science",
            "cooking",
            "baking",
            "desserts",
            "drinks",
            "coffee",
            "tea",
            "juice",
            "water",
            "soda",
            "natural",
            "organic",
            "biological",
            "eco",
            "green",
            "blue",
            "red",
            "yellow",
            "pink",
            "gray",
            "black",
            "white",
            "brown",
            "orange",
            "purple",
            "gold",
            "silver",
            "copper",
            "wooden",
            "metal",
            "plastic",
            "glass",
            "cotton",
            "wool",
            "silk",
            "leather",
            "rubber",
            "nylon",
            "polyester",
            "small",
            "medium",
            "large",
            "extra",
            "mini",
        ];

        for term in arabic_terms.iter().chain(english_terms.iter()) {
            dict.add_term(*term);
        }

        // Common Arabic misspellings and their corrections.
        let arabic_typos = [
            ("هاتاف", "هاتف"),
            ("هاتيف", "هاتف"),
            ("هاثف", "هاتف"),
            ("ذكى", "ذكي"),
            ("ذكاي", "ذكي"),
            ("ذكعي", "ذكي"),
            ("حاسب", "حاسوب"),
            ("حاسيب", "حاسوب"),
            ("حاسبب", "حاسوب"),
            ("ساعه", "ساعة"),
            ("احذية", "أحذية"),
            ("أحذيه", "أحذية"),
            ("احذيه", "أحذية"),
            ("رياضيه", "رياضية"),
            ("العاب", "ألعاب"),
            ("اثاث", "أثاث"),
            ("الكترونيات", "إلكترونيات"),
            ("اجهزة", "أجهزة"),
        ];

        for (typo, correction) in arabic_typos {
            dict.add_typo(typo, correction);
        }

        dict
    }
}
