use crate::{
    context::Context,
    lang::data::SCRUB_LETTERS,
    script::contains_target_script,
    stage::Stage,
    unicode::is_arabic_script,
};
use std::borrow::Cow;

/// Replaces Arabic-script characters left in a finished transliteration
/// with rough ASCII stand-ins; characters without one are dropped.
///
/// Opt-in: the standard normalizer does not include it. Use
/// [`find_script_characters`](crate::script::find_script_characters) to
/// report residue instead of rewriting it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrubResidualScript;

impl Stage for ScrubResidualScript {
    fn name(&self) -> &'static str {
        "scrub_residual_script"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        contains_target_script(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if !contains_target_script(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if !is_arabic_script(c) {
                out.push(c);
            } else if let Some(latin) = SCRUB_LETTERS.get(&c) {
                out.push_str(latin);
            }
        }
        Cow::Owned(out)
    }
}
