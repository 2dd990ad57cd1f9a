use crate::context::Context;
use crate::resolver::{ResolveStage, WordResolver};
use crate::script::contains_target_script;

/// Leaves tokens without Arabic script untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl ResolveStage for PassThrough {
    fn name(&self) -> &'static str {
        "pass_through"
    }

    #[inline]
    fn resolve(&self, word: &str, _ctx: &Context, _chain: &WordResolver) -> Option<String> {
        (!contains_target_script(word)).then(|| word.to_owned())
    }
}
