// src/context.rs
// Tiny, Copy, borrowed view of the language configuration used in hot paths.

use crate::dictionary::Dictionary;
use crate::lang::{Language, LetterMap};

/// Runtime context passed to every resolution and normalization stage.
///
/// Contains:
/// - `lang`: selects the letter map and language-specific rules
/// - `dictionary`: the read-only tables of that language
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub lang: Language,
    pub dictionary: &'a Dictionary,
}

impl<'a> Context<'a> {
    #[inline(always)]
    pub fn new(lang: Language, dictionary: &'a Dictionary) -> Self {
        Self { lang, dictionary }
    }

    #[inline(always)]
    pub fn letters(&self) -> &'static LetterMap {
        self.lang.letters()
    }
}
