use crate::{
    context::Context,
    diacritics::nfc,
    dictionary::{Dictionary, DictionaryStore},
    lang::Language,
    normalizer::Normalizer,
    phrase::replace_phrases,
    resolver::{ResolveStage, WordResolver},
    script::classify_language,
    stage::{ScrubResidualScript, Stage},
    unicode::is_horizontal_ws,
};
use log::debug;
use std::borrow::Cow;

/// The full pipeline: phrases, word resolution, normalization.
///
/// A `Transliterator` is immutable once built and can be shared freely
/// between threads.
///
/// ```ignore
/// let t = Transliterator::new();
/// assert_eq!(t.transliterate("والله", Language::Arabic), "wa'lláh");
/// ```
#[derive(Debug, Clone)]
pub struct Transliterator {
    store: DictionaryStore,
    resolver: WordResolver,
    normalizer: Normalizer,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator {
    /// Bundled dictionaries, the standard resolution chain and the
    /// standard normalizer.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TransliteratorBuilder {
        TransliteratorBuilder::default()
    }

    #[inline]
    pub fn dictionary(&self, lang: Language) -> &Dictionary {
        self.store.get(lang)
    }

    #[inline]
    pub fn context(&self, lang: Language) -> Context<'_> {
        Context::new(lang, self.store.get(lang))
    }

    /// Transliterates `text` as `lang`. Never fails: anything the tables do
    /// not know passes through unchanged.
    pub fn transliterate(&self, text: &str, lang: Language) -> String {
        let ctx = self.context(lang);
        let composed = nfc(text);
        let phrased = replace_phrases(&composed, &ctx);

        let mut joined = String::with_capacity(phrased.len() * 2);
        for (i, line) in phrased.split('\n').enumerate() {
            if i > 0 {
                joined.push('\n');
            }
            let tokens = line.split(is_horizontal_ws).filter(|t| !t.is_empty());
            for (j, token) in tokens.enumerate() {
                if j > 0 {
                    joined.push(' ');
                }
                joined.push_str(&self.resolver.resolve_token(token, &ctx));
            }
        }

        self.normalizer.normalize(&joined, &ctx).into_owned()
    }

    /// Classifies `text` first, then transliterates it.
    pub fn transliterate_auto(&self, text: &str) -> (Language, String) {
        let lang = classify_language(text);
        debug!("auto-detected {lang} for {} bytes", text.len());
        (lang, self.transliterate(text, lang))
    }

    /// Runs only the normalizer over already-Latin text.
    pub fn normalize<'a>(&self, text: &'a str, lang: Language) -> Cow<'a, str> {
        self.normalizer.normalize(text, &self.context(lang))
    }

    /// Resolves a single token without phrase matching or normalization.
    pub fn resolve_word(&self, token: &str, lang: Language) -> String {
        self.resolver.resolve_token(&nfc(token), &self.context(lang))
    }
}

#[derive(Debug, Clone)]
pub struct TransliteratorBuilder {
    store: DictionaryStore,
    resolver: WordResolver,
    normalizer: Normalizer,
}

impl Default for TransliteratorBuilder {
    fn default() -> Self {
        Self {
            store: DictionaryStore::load(),
            resolver: WordResolver::standard(),
            normalizer: Normalizer::standard(),
        }
    }
}

impl TransliteratorBuilder {
    /// Replaces the dictionary of one language. Keys are canonicalized on
    /// the way in.
    pub fn dictionary(mut self, lang: Language, dictionary: Dictionary) -> Self {
        self.store = self.store.with(lang, dictionary);
        self
    }

    pub fn resolver(mut self, resolver: WordResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Appends a stage to the resolution chain.
    pub fn add_resolve_stage<T: ResolveStage + 'static>(mut self, stage: T) -> Self {
        self.resolver = self.resolver.push(stage);
        self
    }

    pub fn normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Appends a stage to the normalizer.
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.normalizer = self.normalizer.push(stage);
        self
    }

    /// Scrubs Arabic-script residue from the output as the last step.
    pub fn scrub_residual_script(self) -> Self {
        self.add_stage(ScrubResidualScript)
    }

    pub fn build(self) -> Transliterator {
        Transliterator {
            store: self.store,
            resolver: self.resolver,
            normalizer: self.normalizer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordEntry;
    use crate::resolver::{Lookup, PassThrough, Placeholder};

    #[test]
    fn custom_dictionary_takes_effect() {
        let mut dict = Dictionary::builtin(Language::Arabic);
        dict.common_words
            .insert("نور".into(), WordEntry::new("Núr"));
        let t = Transliterator::builder()
            .dictionary(Language::Arabic, dict)
            .build();
        assert_eq!(t.transliterate("نُورٌ", Language::Arabic), "Núr");
        assert_eq!(t.transliterate("الله", Language::Arabic), "Alláh");
    }

    #[test]
    fn resolver_without_heuristic_keeps_unknown_words() {
        let t = Transliterator::builder()
            .resolver(
                WordResolver::new()
                    .push(Placeholder)
                    .push(PassThrough)
                    .push(Lookup),
            )
            .build();
        assert_eq!(t.transliterate("الله كتب", Language::Arabic), "Alláh كتب");
    }

    #[test]
    fn scrub_removes_residue() {
        let t = Transliterator::builder()
            .resolver(WordResolver::new().push(Lookup))
            .scrub_residual_script()
            .build();
        assert_eq!(t.transliterate("الله خدا", Language::Arabic), "Alláh khda");
    }

    #[test]
    fn empty_normalizer_keeps_raw_join() {
        let t = Transliterator::builder()
            .normalizer(Normalizer::empty())
            .build();
        assert_eq!(t.transliterate("والله", Language::Arabic), "wa-Alláh");
    }

    #[test]
    fn auto_detection_picks_the_tables() {
        let t = Transliterator::new();
        let (lang, out) = t.transliterate_auto("خدا");
        assert_eq!(lang, Language::Persian);
        assert_eq!(out, "Khudá");
    }

    #[test]
    fn single_word_resolution() {
        let t = Transliterator::new();
        assert_eq!(t.resolve_word("(الله)", Language::Arabic), "(Alláh)");
    }
}
