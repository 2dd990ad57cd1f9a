//! Letter-by-letter fallback for words no dictionary knows.
//!
//! Two passes over every Arabic-script run of a word. [`emit_letters`] maps
//! every code point through the letter map and the vowel marks;
//! [`insert_vowels`] then fills vowel-less consonant clusters from a fixed
//! first-order table. The table is a best-effort default, not a model of
//! Arabic morphology. Anything outside the script is copied as is.

use crate::dictionary::Dictionary;
use crate::diacritics::{lookup_key, vowel_for_mark};
use crate::lang::LetterMap;
use crate::lang::data::PUNCTUATION;
use crate::unicode::{NO_VOWEL, SHADDA, SUKUN, is_arabic_letter, is_arabic_mark, is_arabic_script};
use std::borrow::Cow;

/// Letters the article assimilates to: `ash-shams`, not `al-shams`.
const SUN_LETTERS: &[char] = &[
    'ت', 'ث', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ل', 'ن',
];

/// Letters a word must keep after its article is split off.
const MIN_STEM: usize = 2;

/// Full heuristic transliteration of one word.
pub fn heuristic_transliterate(word: &str, letters: &LetterMap, dictionary: &Dictionary) -> String {
    let default_vowel = dictionary.default_vowel();
    let mut out = String::with_capacity(word.len() * 2);
    for (run, arabic) in script_runs(word) {
        if arabic {
            out.push_str(&insert_vowels(&emit_letters(run, letters, dictionary), default_vowel));
        } else {
            out.push_str(run);
        }
    }
    out
}

/// Maximal runs of Arabic-script and of other characters, in order.
fn script_runs(word: &str) -> Vec<(&str, bool)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (i, c) in word.char_indices() {
        let arabic = is_arabic_script(c);
        if current.is_some_and(|a| a != arabic) {
            runs.push((&word[start..i], !arabic));
            start = i;
        }
        current = Some(arabic);
    }
    if let Some(arabic) = current {
        runs.push((&word[start..], arabic));
    }
    runs
}

/// Splits a leading definite article off a word:
/// `الكتاب` → (`al-`, `كتاب`), `الشَّمس` → (`ash-`, `شَمس`).
///
/// The shadda marking assimilation is dropped from the stem. Divine forms
/// and stems shorter than two letters are left whole.
pub fn split_article<'w>(word: &'w str, letters: &LetterMap) -> Option<(String, Cow<'w, str>)> {
    if lookup_key(word).starts_with("الله") || is_divine_form(word) {
        return None;
    }
    let stem = strip_letter(word, &['ا', 'ٱ'])?;
    let stem = strip_letter(stem, &['ل'])?;
    if stem.chars().filter(|&c| is_arabic_letter(c)).count() < MIN_STEM {
        return None;
    }
    let first = stem.chars().next()?;
    if !SUN_LETTERS.contains(&first) {
        return Some(("al-".to_owned(), Cow::Borrowed(stem)));
    }
    let consonant = letters.get(&first)?;
    Some((format!("a{consonant}-"), drop_first_shadda(stem)))
}

/// Strips one of `options` and the marks riding on it.
fn strip_letter<'w>(s: &'w str, options: &[char]) -> Option<&'w str> {
    let rest = s.strip_prefix(|c: char| options.contains(&c))?;
    Some(rest.trim_start_matches(is_arabic_mark))
}

fn drop_first_shadda(stem: &str) -> Cow<'_, str> {
    let mut chars = stem.char_indices().skip(1);
    let at = chars
        .find(|&(_, c)| c == SHADDA || !is_arabic_mark(c))
        .filter(|&(_, c)| c == SHADDA);
    match at {
        Some((i, c)) => Cow::Owned(format!("{}{}", &stem[..i], &stem[i + c.len_utf8()..])),
        None => Cow::Borrowed(stem),
    }
}

/// Stripped forms whose initial alif is written as a capital "I".
fn is_divine_form(word: &str) -> bool {
    let key = lookup_key(word);
    // keys are folded, so إلهي is spelled with the Persian yeh here
    key == "إلهی" || key == "الله" || key.starts_with("إله")
}

/// First pass: letters, marks and vowel patterns to Latin, without inserted
/// vowels. A sukun leaves a [`NO_VOWEL`] marker for the second pass.
pub fn emit_letters(word: &str, letters: &LetterMap, dictionary: &Dictionary) -> String {
    let chars: Vec<char> = word.chars().collect();
    let patterns = dictionary.vowel_patterns_longest_first();
    let divine = is_divine_form(word);

    let mut out = String::with_capacity(word.len() * 2);
    let mut last_letter: Option<&str> = None;
    let mut i = 0;

    'outer: while i < chars.len() {
        for p in &patterns {
            let len = p.pattern.chars().count();
            if i + len <= chars.len() && p.pattern.chars().eq(chars[i..i + len].iter().copied()) {
                out.push_str(&p.transliteration);
                i += len;
                continue 'outer;
            }
        }

        let c = chars[i];
        i += 1;

        if is_arabic_mark(c) {
            match c {
                SHADDA => {
                    if let Some(prev) = last_letter {
                        out.push_str(prev);
                    }
                }
                SUKUN => out.push(NO_VOWEL),
                _ => out.push_str(vowel_for_mark(c).unwrap_or_default()),
            }
            continue;
        }

        let vowel_follows = chars.get(i).is_some_and(|&m| is_short_vowel(m));
        if i == 1 && divine && matches!(c, 'ا' | 'إ' | 'أ') {
            out.push('I');
            if vowel_follows {
                i += 1;
            }
            continue;
        }
        // a hamza seat takes its vowel from the mark: أَحَد → aḥad
        if vowel_follows && matches!(c, 'أ' | 'إ') {
            last_letter = None;
            continue;
        }

        if let Some(latin) = letters.get(&c) {
            out.push_str(latin);
            last_letter = Some(latin);
        } else if let Some(latin) = PUNCTUATION.get(&c) {
            out.push_str(latin);
        } else {
            out.push(c);
        }
    }
    out
}

/// Fathatan through kasra.
#[inline]
fn is_short_vowel(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0650}')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit<'s> {
    Consonant(&'s str),
    Vowel(&'s str),
    NoVowel,
    Other(&'s str),
}

const DIGRAPHS: &[&str] = &["sh", "kh", "th", "dh", "gh", "zh", "ch"];

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(
        c.to_lowercase().next().unwrap_or(c),
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú'
    )
}

fn units(text: &str) -> Vec<Unit<'_>> {
    let mut out = Vec::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if c == NO_VOWEL {
            out.push(Unit::NoVowel);
            rest = &rest[c.len_utf8()..];
            continue;
        }
        if rest.len() >= 2 && rest.is_char_boundary(2) {
            let pair = &rest[..2];
            if DIGRAPHS.iter().any(|d| d.eq_ignore_ascii_case(pair)) {
                out.push(Unit::Consonant(pair));
                rest = &rest[2..];
                continue;
            }
        }
        let (head, tail) = rest.split_at(c.len_utf8());
        out.push(if is_vowel(c) {
            Unit::Vowel(head)
        } else if (c.is_alphabetic() && !is_arabic_script(c)) || c == '\'' {
            Unit::Consonant(head)
        } else {
            Unit::Other(head)
        });
        rest = tail;
    }
    out
}

/// Vowel placed between two adjacent consonants.
fn vowel_between<'v>(current: &str, next: &str, default_vowel: &'v str) -> &'v str {
    match (current, next) {
        ("l", "k") => "i",
        (a, b) if a == b => "",
        ("n" | "r", _) => "a",
        (a, _) if a.len() == 2 && a.is_ascii() => "a",
        _ => default_vowel,
    }
}

/// Second pass: fills consonant clusters with vowels.
///
/// A consonant followed by another consonant receives a vowel from the
/// table; a consonant at the end of a word or before a non-letter receives
/// nothing; a consonant followed by the no-vowel marker receives nothing and
/// the marker is dropped.
pub fn insert_vowels(text: &str, default_vowel: &str) -> String {
    let units = units(text);
    let mut out = String::with_capacity(text.len() + units.len());
    for (idx, unit) in units.iter().enumerate() {
        match *unit {
            Unit::Consonant(c) => {
                out.push_str(c);
                if let Some(Unit::Consonant(next)) = units.get(idx + 1) {
                    out.push_str(vowel_between(
                        &c.to_lowercase(),
                        &next.to_lowercase(),
                        default_vowel,
                    ));
                }
            }
            Unit::Vowel(v) | Unit::Other(v) => out.push_str(v),
            Unit::NoVowel => {}
        }
    }
    out
}
