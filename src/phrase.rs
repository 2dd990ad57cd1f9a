//! Multi-word idiom replacement.
//!
//! Phrases are matched before tokenization so that a fixed formula is never
//! broken into independently resolved words. Matching runs over a *view* of
//! the text in which harakat and tatweel are invisible, kaf/yeh variants are
//! folded and whitespace runs read as one space; every view character keeps
//! the byte span it covers in the source, so the replacement cuts the source
//! text exactly, marks included.
//!
//! A matched span becomes a placeholder token carrying the final
//! transliteration verbatim. The word resolver emits it unchanged.

use crate::context::Context;
use crate::diacritics::{fold_letter, lookup_key};
use crate::unicode::{
    PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN, PLACEHOLDER_SPACE, TATWEEL, is_arabic_letter,
    is_arabic_mark, is_arabic_script, is_horizontal_ws,
};
use log::trace;
use memchr::memmem;
use std::borrow::Cow;
use std::collections::HashMap;

/// Wraps a transliteration so that it survives whitespace tokenization as one
/// token.
pub fn encode_placeholder(transliteration: &str) -> String {
    let mut out = String::with_capacity(transliteration.len() + 9);
    out.push(PLACEHOLDER_OPEN);
    out.extend(
        transliteration
            .chars()
            .map(|c| if c == ' ' { PLACEHOLDER_SPACE } else { c }),
    );
    out.push(PLACEHOLDER_CLOSE);
    out
}

/// The carried transliteration, if `token` is a placeholder.
pub fn decode_placeholder(token: &str) -> Option<String> {
    let inner = token
        .strip_prefix(PLACEHOLDER_OPEN)?
        .strip_suffix(PLACEHOLDER_CLOSE)?;
    Some(
        inner
            .chars()
            .map(|c| if c == PLACEHOLDER_SPACE { ' ' } else { c })
            .collect(),
    )
}

#[derive(Debug, Clone, Copy)]
struct ViewChar {
    view_byte: usize,
    src_start: usize,
    src_end: usize,
    letter: bool,
}

/// The searchable projection of the source text.
struct View {
    text: String,
    chars: Vec<ViewChar>,
}

impl View {
    fn build(src: &str) -> Self {
        let mut text = String::with_capacity(src.len());
        let mut chars: Vec<ViewChar> = Vec::with_capacity(src.len() / 2);
        for (i, c) in src.char_indices() {
            let end = i + c.len_utf8();
            if is_arabic_mark(c) || c == TATWEEL {
                if let Some(last) = chars.last_mut() {
                    last.src_end = end;
                }
                continue;
            }
            if is_horizontal_ws(c) {
                if let Some(last) = chars.last_mut()
                    && text.ends_with(' ')
                {
                    last.src_end = end;
                    continue;
                }
                chars.push(ViewChar {
                    view_byte: text.len(),
                    src_start: i,
                    src_end: end,
                    letter: false,
                });
                text.push(' ');
                continue;
            }
            chars.push(ViewChar {
                view_byte: text.len(),
                src_start: i,
                src_end: end,
                letter: is_arabic_letter(c) || c.is_alphanumeric(),
            });
            text.push(fold_letter(c));
        }
        Self { text, chars }
    }

    fn index_of_byte(&self, byte: usize) -> Option<usize> {
        self.chars.binary_search_by_key(&byte, |v| v.view_byte).ok()
    }
}

/// Phrase candidates for one dictionary: its `common_phrases` plus the fixed
/// canonical formulas of the language. A dictionary entry shadows a canonical
/// formula with the same key. Longest first, ties by key.
fn candidates<'d>(ctx: &Context<'d>) -> Vec<(String, Cow<'d, str>)> {
    let mut merged: HashMap<String, Cow<'d, str>> = HashMap::new();
    for &(phrase, translit) in ctx.lang.entry().canonical_phrases {
        merged.insert(canonical_phrase_key(phrase), Cow::Borrowed(translit));
    }
    for (key, entry) in &ctx.dictionary.common_phrases {
        merged.insert(
            canonical_phrase_key(key),
            Cow::Borrowed(entry.transliteration.as_str()),
        );
    }
    let mut list: Vec<(String, Cow<'d, str>)> = merged
        .into_iter()
        .filter(|(k, _)| !k.is_empty())
        .collect();
    list.sort_by(|(a, _), (b, _)| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    list
}

fn canonical_phrase_key(phrase: &str) -> String {
    lookup_key(phrase)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces every known phrase in `text` with a placeholder token.
///
/// Matches must sit on word boundaries and may not overlap an earlier, longer
/// match. Each placeholder is padded with spaces so it tokenizes alone.
pub fn replace_phrases<'a>(text: &'a str, ctx: &Context) -> Cow<'a, str> {
    if !text.chars().any(is_arabic_script) {
        return Cow::Borrowed(text);
    }
    let view = View::build(text);
    let mut claimed = vec![false; view.chars.len()];
    let mut matches: Vec<(usize, usize, String)> = Vec::new();

    for (key, translit) in candidates(ctx) {
        let key_chars = key.chars().count();
        let finder = memmem::Finder::new(key.as_bytes());
        for pos in finder.find_iter(view.text.as_bytes()) {
            let Some(first) = view.index_of_byte(pos) else {
                continue;
            };
            let last = first + key_chars - 1;
            let before_ok = first == 0 || !view.chars[first - 1].letter;
            let after_ok = view.chars.get(last + 1).is_none_or(|v| !v.letter);
            if !before_ok || !after_ok || claimed[first..=last].iter().any(|&c| c) {
                continue;
            }
            claimed[first..=last].iter_mut().for_each(|c| *c = true);
            trace!("phrase {key:?} -> {translit:?}");
            matches.push((
                view.chars[first].src_start,
                view.chars[last].src_end,
                encode_placeholder(&translit),
            ));
        }
    }

    if matches.is_empty() {
        return Cow::Borrowed(text);
    }
    matches.sort_by_key(|m| m.0);

    let mut out = String::with_capacity(text.len() + matches.len() * 16);
    let mut last = 0;
    for (start, end, placeholder) in matches {
        out.push_str(&text[last..start]);
        out.push(' ');
        out.push_str(&placeholder);
        out.push(' ');
        last = end;
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}
