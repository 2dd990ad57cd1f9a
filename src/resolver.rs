//! Word resolution: one ordered chain of pluggable stages.
//!
//! The standard chain is
//!
//! 1. [`Placeholder`] – phrase placeholders, emitted verbatim
//! 2. [`PassThrough`] – tokens without Arabic script
//! 3. [`Lookup`] – exact dictionary hit, CommonWords then DivineNames
//! 4. [`Compound`] – ZWNJ segments, verbal prefixes, suffixes
//! 5. [`HeuristicFallback`] – letter-by-letter conversion
//!
//! The first stage that answers wins. Nothing is retried, so a dictionary
//! entry always beats the heuristic.

pub mod compound;
pub mod heuristic;
pub mod lookup;
pub mod pass_through;
pub mod placeholder;

pub use compound::Compound;
pub use heuristic::HeuristicFallback;
pub use lookup::Lookup;
pub use pass_through::PassThrough;
pub use placeholder::Placeholder;

use crate::context::Context;
use crate::lang::Language;
use crate::lang::data::PUNCTUATION;
use crate::unicode::is_token_core;
use log::trace;
use smallvec::SmallVec;
use std::sync::Arc;

/// One step of the resolution chain.
pub trait ResolveStage: Send + Sync {
    /// Human-readable name, used in trace logs.
    fn name(&self) -> &'static str;

    /// `Some` claims the word; `None` hands it to the next stage.
    ///
    /// `chain` is the whole resolver, for stages that resolve sub-words.
    fn resolve(&self, word: &str, ctx: &Context, chain: &WordResolver) -> Option<String>;
}

#[derive(Default, Clone)]
pub struct WordResolver {
    stages: SmallVec<[Arc<dyn ResolveStage>; 8]>,
}

impl std::fmt::Debug for WordResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.stages.iter().map(|s| s.name()))
            .finish()
    }
}

impl WordResolver {
    /// An empty chain. Every word resolves to itself.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self::new()
            .push(Placeholder)
            .push(PassThrough)
            .push(Lookup)
            .push(Compound)
            .push(HeuristicFallback)
    }

    #[inline(always)]
    pub fn push<T: ResolveStage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Runs the chain on a bare word (no surrounding punctuation).
    pub fn resolve_word(&self, word: &str, ctx: &Context) -> String {
        for stage in &self.stages {
            if let Some(out) = stage.resolve(word, ctx, self) {
                trace!("{word:?} resolved by {} -> {out:?}", stage.name());
                return out;
            }
        }
        word.to_owned()
    }

    /// Resolves a whitespace-delimited token. Leading and trailing
    /// punctuation is split off, mapped to Latin and re-attached.
    pub fn resolve_token(&self, token: &str, ctx: &Context) -> String {
        let Some(start) = token.find(is_token_core) else {
            return map_affix(token);
        };
        let end = token
            .char_indices()
            .rev()
            .find(|&(_, c)| is_token_core(c))
            .map_or(token.len(), |(i, c)| i + c.len_utf8());

        let mut out = map_affix(&token[..start]);
        out.push_str(&self.resolve_word(&token[start..end], ctx));
        out.push_str(&map_affix(&token[end..]));
        out
    }
}

fn map_affix(affix: &str) -> String {
    affix
        .chars()
        .map(|c| PUNCTUATION.get(&c).copied().map_or_else(|| c.to_string(), str::to_owned))
        .collect()
}

/// Ezafe connector for a Persian word written with a final kasra.
///
/// Applies to words resolved through the dictionary or a compound, whose
/// Latin form does not carry the kasra. After a long vowel the connector
/// takes a glide: `-yi`.
pub(crate) fn attach_ezafe(word: &str, translit: String, ctx: &Context) -> String {
    if ctx.lang != Language::Persian {
        return translit;
    }
    let Some(rule) = ctx.dictionary.ezafe_rules.get("final_kasra") else {
        return translit;
    };
    if rule.pattern.is_empty() || !word.ends_with(rule.pattern.as_str()) {
        return translit;
    }
    if translit.ends_with(rule.transliteration.as_str()) {
        return translit;
    }
    let long_vowel = translit.ends_with(['á', 'í', 'ú']);
    let connector = match rule.transliteration.strip_prefix('-') {
        Some(rest) if long_vowel => format!("-y{rest}"),
        _ => rule.transliteration.clone(),
    };
    translit + &connector
}
