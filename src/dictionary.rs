//! Per-language word, phrase and rule tables.
//!
//! A [`Dictionary`] is parsed once from JSON, its keys canonicalized with
//! [`lookup_key`], and never mutated afterwards. Both languages are bundled
//! as embedded documents; if one of them fails to parse the whole language
//! falls back to the small table in [`builtin`].

pub mod builtin;

use crate::diacritics::lookup_key;
use crate::lang::Language;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use thiserror::Error;

static ARABIC_JSON: &str = include_str!("../data/arabic_dictionary.json");
static PERSIAN_JSON: &str = include_str!("../data/persian_dictionary.json");

/// Inserted between consonants when nothing better is known.
pub const DEFAULT_VOWEL: &str = "a";

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dictionary table `{0}` is empty")]
    EmptyTable(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub transliteration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

impl WordEntry {
    pub fn new(transliteration: impl Into<String>) -> Self {
        Self {
            transliteration: transliteration.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_owned());
        self
    }
}

/// A literal (never regex) source sequence and its Latin rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub pattern: String,
    pub transliteration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A declarative rewrite applied by the normalizer.
///
/// Rules of one table are applied by ascending `order`, then by key. A rule
/// without an `order` runs after every ordered one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub examples: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Rule {
    pub fn new(pattern: &str, transliteration: &str, order: u32) -> Self {
        Self {
            pattern: pattern.to_owned(),
            transliteration: transliteration.to_owned(),
            order: Some(order),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub common_words: HashMap<String, WordEntry>,
    #[serde(default)]
    pub divine_names: HashMap<String, WordEntry>,
    #[serde(default)]
    pub common_phrases: HashMap<String, WordEntry>,
    #[serde(default)]
    pub vowel_patterns: HashMap<String, Pattern>,
    #[serde(default)]
    pub article_rules: HashMap<String, Rule>,
    #[serde(default)]
    pub ezafe_rules: HashMap<String, Rule>,
    #[serde(default)]
    pub heuristics: HashMap<String, Rule>,
    #[serde(default)]
    pub verbal_prefixes: HashMap<String, WordEntry>,
    #[serde(default)]
    pub suffixes: HashMap<String, WordEntry>,
}

impl Dictionary {
    /// Parses a dictionary document and canonicalizes its keys.
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let dict: Dictionary = serde_json::from_str(json)?;
        if dict.common_words.is_empty() {
            return Err(DictionaryError::EmptyTable("common_words"));
        }
        Ok(dict.canonicalized())
    }

    /// The bundled dictionary for `lang`, or the built-in table if the
    /// bundled document is unusable.
    pub fn load(lang: Language) -> Self {
        let json = match lang {
            Language::Arabic => ARABIC_JSON,
            Language::Persian => PERSIAN_JSON,
        };
        match Self::from_json(json) {
            Ok(dict) => {
                debug!(
                    "loaded {lang} dictionary v{}: {} words, {} divine names, {} phrases",
                    dict.metadata.version,
                    dict.common_words.len(),
                    dict.divine_names.len(),
                    dict.common_phrases.len()
                );
                dict
            }
            Err(e) => {
                warn!("{lang} dictionary unusable ({e}); using built-in table");
                Self::builtin(lang)
            }
        }
    }

    pub fn builtin(lang: Language) -> Self {
        builtin::builtin(lang).canonicalized()
    }

    /// Re-keys every word-like table by [`lookup_key`]. When two source keys
    /// collapse onto one, the lexicographically first source key wins.
    pub fn canonicalized(mut self) -> Self {
        self.common_words = canonical_table("common_words", self.common_words);
        self.divine_names = canonical_table("divine_names", self.divine_names);
        self.common_phrases = canonical_table("common_phrases", self.common_phrases);
        self.verbal_prefixes = canonical_table("verbal_prefixes", self.verbal_prefixes);
        self.suffixes = canonical_table("suffixes", self.suffixes);
        self
    }

    #[inline]
    pub fn common_word(&self, key: &str) -> Option<&WordEntry> {
        self.common_words.get(key)
    }

    #[inline]
    pub fn divine_name(&self, key: &str) -> Option<&WordEntry> {
        self.divine_names.get(key)
    }

    /// CommonWords first, then DivineNames.
    #[inline]
    pub fn word(&self, key: &str) -> Option<&WordEntry> {
        self.common_word(key).or_else(|| self.divine_name(key))
    }

    pub fn default_vowel(&self) -> &str {
        self.heuristics
            .get("default_vowel")
            .map(|r| r.transliteration.as_str())
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VOWEL)
    }

    /// Vowel patterns, longest source sequence first.
    pub fn vowel_patterns_longest_first(&self) -> Vec<&Pattern> {
        let mut patterns: Vec<&Pattern> = self
            .vowel_patterns
            .values()
            .filter(|p| !p.pattern.is_empty())
            .collect();
        patterns.sort_by(|a, b| {
            b.pattern
                .chars()
                .count()
                .cmp(&a.pattern.chars().count())
                .then_with(|| a.pattern.cmp(&b.pattern))
        });
        patterns
    }
}

/// Rules of one table in applied order: `(order, key)`.
pub fn ordered_rules(table: &HashMap<String, Rule>) -> Vec<(&str, &Rule)> {
    let mut rules: Vec<(&str, &Rule)> = table.iter().map(|(k, r)| (k.as_str(), r)).collect();
    rules.sort_by(|(ka, a), (kb, b)| {
        a.order
            .unwrap_or(u32::MAX)
            .cmp(&b.order.unwrap_or(u32::MAX))
            .then_with(|| ka.cmp(kb))
    });
    rules
}

fn canonical_table(name: &str, table: HashMap<String, WordEntry>) -> HashMap<String, WordEntry> {
    let mut entries: Vec<(String, WordEntry)> = table.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    let mut out = HashMap::with_capacity(entries.len());
    for (source, entry) in entries {
        let key = lookup_key(&source);
        if key.is_empty() {
            continue;
        }
        if out.contains_key(&key) {
            debug!("{name}: `{source}` collapses onto existing key `{key}`, keeping the first");
            continue;
        }
        out.insert(key, entry);
    }
    out
}

/// Read-only dictionaries for every language, shared across threads.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    dictionaries: Vec<Arc<Dictionary>>,
}

impl DictionaryStore {
    /// Loads the bundled dictionary of every language.
    pub fn load() -> Self {
        Self {
            dictionaries: Language::ALL
                .iter()
                .map(|&lang| Arc::new(Dictionary::load(lang)))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self {
            dictionaries: Language::ALL
                .iter()
                .map(|&lang| Arc::new(Dictionary::builtin(lang)))
                .collect(),
        }
    }

    /// Replaces the dictionary of one language.
    pub fn with(mut self, lang: Language, dictionary: Dictionary) -> Self {
        self.dictionaries[lang as usize] = Arc::new(dictionary.canonicalized());
        self
    }

    #[inline]
    pub fn get(&self, lang: Language) -> &Dictionary {
        &self.dictionaries[lang as usize]
    }
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::load()
    }
}
