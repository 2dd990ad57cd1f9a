//! Normalization stage abstraction.
//!
//! The normalizer is an ordered list of [`Stage`]s run over the joined
//! transliteration. Every stage is allocation-aware: `needs_apply` is an
//! exact predicate for "apply would change the text", and `apply` hands the
//! input back untouched (still `Cow::Borrowed` if it was) when nothing
//! changes.
//!
//! Rules with data (article contractions, ezafe connectors, divine-name
//! capitalization) read their tables from the dictionary in the
//! [`Context`]; the stages only hold the matching logic.

pub mod article_contraction;
pub mod capitalize;
pub mod ezafe_connector;
pub mod normalize_whitespace;
pub mod scrub_script;

pub use article_contraction::ArticleContraction;
pub use capitalize::Capitalize;
pub use ezafe_connector::EzafeConnector;
pub use normalize_whitespace::NormalizeWhitespace;
pub use scrub_script::ScrubResidualScript;

use crate::context::Context;
use std::borrow::Cow;

/// A single normalization step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used for logging and test messages.
    fn name(&self) -> &'static str;

    /// Returns `true` iff `apply` would change `text`.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without a preceding `needs_apply`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

/// Consonants a definite article assimilates to, longest first.
pub(crate) const ARTICLE_CONSONANTS: &[&str] = &[
    "th", "dh", "sh", "ṣ", "ḍ", "ṭ", "ẓ", "t", "d", "r", "z", "s", "n", "l",
];

/// Shared shape of the rule-driven stages: compute the rewritten text, or
/// `None` when it would equal the input.
pub(crate) fn changed(original: &str, rewritten: String) -> Option<String> {
    (rewritten != original).then_some(rewritten)
}
