//! Arabic and Persian to Latin transliteration in the Bahá'í scheme.
//!
//! ```ignore
//! use bahai_translit::{Language, transliterate};
//!
//! assert_eq!(transliterate("لا إله إلا الله", Language::Arabic), "lá iláha illá'lláh");
//! assert_eq!(transliterate("پروردگار", Language::Persian), "Parvardigár");
//! ```
//!
//! The free functions use one shared [`Transliterator`] over the bundled
//! dictionaries. Build your own with [`Transliterator::builder`] to swap
//! dictionaries, resolution stages or normalization rules.

pub mod context;
pub mod diacritics;
pub mod dictionary;
pub mod heuristic;
pub mod lang;
pub mod normalizer;
pub mod phrase;
pub mod process;
pub mod resolver;
pub mod script;
pub mod stage;
pub mod transliterator;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use context::Context;
pub use dictionary::{Dictionary, DictionaryError, DictionaryStore, Pattern, Rule, WordEntry};
pub use lang::Language;
pub use normalizer::Normalizer;
pub use resolver::{ResolveStage, WordResolver};
pub use script::{ScriptChar, classify_language, contains_target_script, find_script_characters};
pub use stage::Stage;
pub use transliterator::{Transliterator, TransliteratorBuilder};

use std::sync::LazyLock;

static DEFAULT: LazyLock<Transliterator> = LazyLock::new(Transliterator::new);

/// Transliterates `text` as `lang` with the bundled dictionaries.
pub fn transliterate(text: &str, lang: Language) -> String {
    DEFAULT.transliterate(text, lang)
}

/// Arabic or Persian, by the letters and function words of `text`.
#[inline]
pub fn auto_detect_language(text: &str) -> Language {
    classify_language(text)
}

/// Arabic-script text that does not read as Persian.
pub fn is_arabic(text: &str) -> bool {
    contains_target_script(text) && classify_language(text) == Language::Arabic
}

/// True when `text` carries a Persian-only letter or function word.
pub fn is_persian(text: &str) -> bool {
    classify_language(text) == Language::Persian
}
