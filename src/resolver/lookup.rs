use crate::context::Context;
use crate::diacritics::lookup_key;
use crate::resolver::{ResolveStage, WordResolver, attach_ezafe};

/// Exact dictionary hit on the stripped, folded word: CommonWords first,
/// then DivineNames.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lookup;

impl ResolveStage for Lookup {
    fn name(&self) -> &'static str {
        "lookup"
    }

    fn resolve(&self, word: &str, ctx: &Context, _chain: &WordResolver) -> Option<String> {
        let key = lookup_key(word);
        let entry = ctx.dictionary.word(&key)?;
        Some(attach_ezafe(word, entry.transliteration.clone(), ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, WordEntry};
    use crate::lang::Language;

    #[test]
    fn diacritics_do_not_matter() {
        let dict = Dictionary::load(Language::Arabic);
        let ctx = Context::new(Language::Arabic, &dict);
        let chain = WordResolver::new();
        assert_eq!(Lookup.resolve("اللّٰهُ", &ctx, &chain).as_deref(), Some("Alláh"));
        assert_eq!(Lookup.resolve("ذِكْرُكَ", &ctx, &chain).as_deref(), Some("dhikruka"));
        assert_eq!(Lookup.resolve("كتبتم", &ctx, &chain), None);
    }

    #[test]
    fn common_words_shadow_divine_names() {
        let mut dict = Dictionary::builtin(Language::Arabic);
        dict.divine_names.insert("الله".into(), WordEntry::new("ALLÁH"));
        dict.divine_names.insert("القیوم".into(), WordEntry::new("al-Qayyúm"));
        let ctx = Context::new(Language::Arabic, &dict);
        let chain = WordResolver::new();
        assert_eq!(Lookup.resolve("الله", &ctx, &chain).as_deref(), Some("Alláh"));
        assert_eq!(Lookup.resolve("القيوم", &ctx, &chain).as_deref(), Some("al-Qayyúm"));
    }

    #[test]
    fn persian_kasra_adds_ezafe() {
        let dict = Dictionary::load(Language::Persian);
        let ctx = Context::new(Language::Persian, &dict);
        let chain = WordResolver::new();
        assert_eq!(
            Lookup.resolve("پروردگارِ", &ctx, &chain).as_deref(),
            Some("Parvardigár-i")
        );
    }
}
