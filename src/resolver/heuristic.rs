use crate::context::Context;
use crate::heuristic::{heuristic_transliterate, split_article};
use crate::lang::Language;
use crate::resolver::{ResolveStage, WordResolver};

/// Last resort: always answers.
///
/// An Arabic word opening with the definite article keeps it as `al-` (or
/// its assimilated form) so the normalizer can contract it after a particle.
/// The stem goes through the whole chain again.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicFallback;

impl ResolveStage for HeuristicFallback {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn resolve(&self, word: &str, ctx: &Context, chain: &WordResolver) -> Option<String> {
        let letters = ctx.letters();
        if ctx.lang == Language::Arabic {
            if let Some((article, stem)) = split_article(word, letters) {
                return Some(article + &chain.resolve_word(&stem, ctx));
            }
        }
        Some(heuristic_transliterate(word, letters, ctx.dictionary))
    }
}
