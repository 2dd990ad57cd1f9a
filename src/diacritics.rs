//! Diacritic handling for lookup keys and heuristic vowel emission.
//!
//! Dictionary keys are stored stripped of harakat, so every lookup goes
//! through [`lookup_key`]. The heuristic transliterator instead reads the
//! marks through [`vowel_for_mark`].

use crate::lang::data::VOWEL_MARKS;
use crate::unicode::{TATWEEL, is_arabic_mark};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};

static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Canonical composition. Decomposed `ا` + madda (U+0653) becomes `آ`, which
/// is how the dictionaries spell it.
#[inline]
pub fn nfc(text: &str) -> Cow<'_, str> {
    if ICU4X_NFC.is_normalized(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(ICU4X_NFC.normalize(text).into_owned())
}

#[inline(always)]
fn is_strippable(c: char) -> bool {
    is_arabic_mark(c) || c == TATWEEL
}

/// Removes harakat and tatweel. Letters are left untouched.
pub fn strip_marks(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(is_strippable) else {
        return Cow::Borrowed(text);
    };
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    out.extend(text[first..].chars().filter(|&c| !is_strippable(c)));
    Cow::Owned(out)
}

/// Folds Arabic kaf and yeh onto their Persian forms. Alef maqsura (ى) keeps
/// its identity since it reads as a long á.
#[inline(always)]
pub const fn fold_letter(c: char) -> char {
    match c {
        'ك' => 'ک',
        'ي' => 'ی',
        other => other,
    }
}

/// Key used for every dictionary lookup: NFC, marks stripped, letter
/// variants folded.
pub fn lookup_key(word: &str) -> String {
    let composed = nfc(word);
    composed
        .chars()
        .filter(|&c| !is_strippable(c))
        .map(fold_letter)
        .collect()
}

#[inline]
pub fn vowel_for_mark(c: char) -> Option<&'static str> {
    VOWEL_MARKS.get(&c).copied()
}
