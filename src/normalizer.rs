//! The orthographic pass run over every joined transliteration.

use crate::{
    context::Context,
    process::{DynamicProcess, Process},
    stage::{ArticleContraction, Capitalize, EzafeConnector, NormalizeWhitespace, Stage},
};
use std::borrow::Cow;

/// Ordered normalization rules.
///
/// [`Normalizer::standard`] runs article contraction, the ezafe
/// connector, whitespace and punctuation cleanup, then capitalization.
/// Custom pipelines start from [`Normalizer::empty`] or extend the
/// standard one with [`Normalizer::push`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    process: DynamicProcess,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::standard()
    }
}

impl Normalizer {
    pub fn standard() -> Self {
        Self::empty()
            .push(ArticleContraction)
            .push(EzafeConnector)
            .push(NormalizeWhitespace)
            .push(Capitalize)
    }

    /// A normalizer that leaves text untouched.
    pub fn empty() -> Self {
        Self {
            process: DynamicProcess::new(),
        }
    }

    /// Appends a stage after the existing ones.
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.process = self.process.push(stage);
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.process.stage_names()
    }

    /// Borrows `text` back when no rule changes it.
    pub fn normalize<'a>(&self, text: &'a str, ctx: &Context) -> Cow<'a, str> {
        self.process.process(Cow::Borrowed(text), ctx)
    }
}
