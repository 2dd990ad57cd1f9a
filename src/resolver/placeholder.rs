use crate::context::Context;
use crate::phrase::decode_placeholder;
use crate::resolver::{ResolveStage, WordResolver};

/// Emits the transliteration carried by a phrase placeholder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Placeholder;

impl ResolveStage for Placeholder {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    #[inline]
    fn resolve(&self, word: &str, _ctx: &Context, _chain: &WordResolver) -> Option<String> {
        decode_placeholder(word)
    }
}
