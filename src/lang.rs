pub mod data;

use std::{collections::HashMap, sync::LazyLock};

pub use data::Language;
use data::{BASE_LETTERS, LANG_TABLE};

/// Language assumed when detection finds no Persian evidence.
pub const DEFAULT_LANGUAGE: Language = Language::Arabic;

#[derive(Clone, Copy, Debug)]
pub struct LetterOverride {
    pub from: char,
    pub to: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    pub overrides: &'static [LetterOverride],
    pub exclusive_letters: &'static [char],
    pub function_words: &'static [&'static str],
    pub canonical_phrases: &'static [(&'static str, &'static str)],
}

/// Letter → Latin table for one language.
pub type LetterMap = HashMap<char, &'static str>;

// Indexed by `Language as usize`. Each entry is an owned copy of the shared
// base table so an override never leaks into another language.
static LETTER_MAPS: LazyLock<Vec<LetterMap>> = LazyLock::new(|| {
    Language::ALL
        .iter()
        .map(|lang| {
            let mut map: LetterMap = BASE_LETTERS.entries().map(|(k, v)| (*k, *v)).collect();
            for o in lang.entry().overrides {
                map.insert(o.from, o.to);
            }
            map
        })
        .collect()
});

impl Language {
    /// Looks up a language by ISO code or common alias, case-insensitively.
    pub fn from_code(code: &str) -> Option<Language> {
        let upper = code.trim().to_ascii_uppercase();
        LANG_TABLE.get(upper.as_str()).copied()
    }

    #[inline]
    pub fn letters(self) -> &'static LetterMap {
        &LETTER_MAPS[self as usize]
    }

    #[inline]
    pub fn is_exclusive_letter(self, c: char) -> bool {
        self.entry().exclusive_letters.contains(&c)
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
