//! Script detection and language classification.

use crate::diacritics::lookup_key;
use crate::lang::{DEFAULT_LANGUAGE, Language};
use crate::unicode::{ZWNJ, is_arabic_letter, is_arabic_mark, is_arabic_script};
use log::debug;

/// True if any code point of `text` belongs to an Arabic-script block.
#[inline]
pub fn contains_target_script(text: &str) -> bool {
    text.chars().any(is_arabic_script)
}

/// Decides between Arabic and Persian.
///
/// Persian wins on a Persian-only letter anywhere in the text, or on a
/// Persian function word standing as a whole word. Everything else,
/// including text with no Arabic script at all, is Arabic.
pub fn classify_language(text: &str) -> Language {
    for &lang in Language::ALL {
        let entry = lang.entry();
        if let Some(c) = text.chars().find(|c| entry.exclusive_letters.contains(c)) {
            debug!("classified as {lang}: exclusive letter {c:?}");
            return lang;
        }
        if entry.function_words.is_empty() {
            continue;
        }
        let hit = words(text).find(|w| {
            let key = lookup_key(w);
            entry.function_words.iter().any(|fw| lookup_key(fw) == key)
        });
        if let Some(w) = hit {
            debug!("classified as {lang}: function word {w:?}");
            return lang;
        }
    }
    DEFAULT_LANGUAGE
}

/// Arabic-script words of `text`, split on anything that is not a letter or
/// mark. ZWNJ also splits, so `می‌دهم` yields `می` and `دهم`.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ZWNJ || !(is_arabic_letter(c) || is_arabic_mark(c)))
        .filter(|w| !w.is_empty())
}

/// One Arabic-script code point found in supposedly Latin output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptChar {
    pub ch: char,
    /// Byte offset of the first occurrence.
    pub offset: usize,
    pub count: usize,
}

/// Distinct Arabic-script code points left in `text`, in order of first
/// appearance.
pub fn find_script_characters(text: &str) -> Vec<ScriptChar> {
    let mut found: Vec<ScriptChar> = Vec::new();
    for (offset, ch) in text.char_indices().filter(|(_, c)| is_arabic_script(*c)) {
        match found.iter_mut().find(|s| s.ch == ch) {
            Some(seen) => seen.count += 1,
            None => found.push(ScriptChar { ch, offset, count: 1 }),
        }
    }
    found
}
