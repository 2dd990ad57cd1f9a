use crate::context::Context;
use crate::diacritics::lookup_key;
use crate::dictionary::WordEntry;
use crate::lang::Language;
use crate::resolver::{ResolveStage, WordResolver, attach_ezafe};
use crate::unicode::ZWNJ;
use std::collections::HashMap;

/// A prefix or stem must leave at least this many letters behind.
const MIN_REMAINDER: usize = 2;

/// Shallow morphology.
///
/// * A word joined with ZWNJ is split and every segment goes through the
///   whole chain again; the results are joined with hyphens.
/// * A known verbal prefix followed by a known word becomes
///   `prefix-word`.
/// * A known stem followed by a known suffix becomes `stemsuffix`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Compound;

impl ResolveStage for Compound {
    fn name(&self) -> &'static str {
        "compound"
    }

    fn resolve(&self, word: &str, ctx: &Context, chain: &WordResolver) -> Option<String> {
        if word.contains(ZWNJ) {
            let parts: Vec<String> = word
                .split(ZWNJ)
                .filter(|s| !s.is_empty())
                .map(|s| chain.resolve_word(s, ctx))
                .collect();
            return (!parts.is_empty()).then(|| parts.join("-"));
        }

        let key = lookup_key(word);
        let found = split_prefix(&key, ctx).or_else(|| split_suffix(&key, ctx))?;
        Some(attach_ezafe(word, found, ctx))
    }
}

/// Affixes of a table, longest first.
fn longest_first(table: &HashMap<String, WordEntry>) -> Vec<(&str, &WordEntry)> {
    let mut list: Vec<(&str, &WordEntry)> = table.iter().map(|(k, e)| (k.as_str(), e)).collect();
    list.sort_by(|(a, _), (b, _)| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    list
}

fn split_prefix(key: &str, ctx: &Context) -> Option<String> {
    let dict = ctx.dictionary;
    longest_first(&dict.verbal_prefixes)
        .into_iter()
        .find_map(|(prefix, entry)| {
            let rest = key.strip_prefix(prefix)?;
            if rest.chars().count() < MIN_REMAINDER {
                return None;
            }
            let known = dict.word(rest)?;
            Some(format!("{}-{}", entry.transliteration, known.transliteration))
        })
}

fn split_suffix(key: &str, ctx: &Context) -> Option<String> {
    let dict = ctx.dictionary;
    longest_first(&dict.suffixes)
        .into_iter()
        .find_map(|(suffix, entry)| {
            let stem = key.strip_suffix(suffix)?;
            if stem.chars().count() < MIN_REMAINDER {
                return None;
            }
            let known = dict.common_word(stem)?;
            Some(join_suffix(&known.transliteration, &entry.transliteration, ctx.lang))
        })
}

/// Glues a suffix onto its stem. A vowel-initial suffix replaces the stem's
/// final short vowel (`iláha` + `uka` → `iláhuka`). After a long vowel,
/// Persian takes a `y` glide (`Khudá` + `í` → `Khudáy`) and Arabic drops the
/// suffix's own short vowel.
fn join_suffix(stem: &str, suffix: &str, lang: Language) -> String {
    let Some(first) = suffix.chars().next() else {
        return stem.to_owned();
    };
    if !matches!(first, 'a' | 'i' | 'u' | 'á' | 'í' | 'ú') {
        return format!("{stem}{suffix}");
    }
    match (stem.chars().next_back(), lang) {
        (Some('a' | 'i' | 'u'), _) => format!("{}{suffix}", &stem[..stem.len() - 1]),
        (Some('á' | 'í' | 'ú'), Language::Persian) if suffix == "í" => format!("{stem}y"),
        (Some('á' | 'í' | 'ú'), Language::Persian) => format!("{stem}y{suffix}"),
        (Some('á' | 'í' | 'ú'), Language::Arabic) if matches!(first, 'a' | 'i' | 'u') => {
            format!("{stem}{}", &suffix[1..])
        }
        _ => format!("{stem}{suffix}"),
    }
}
