use crate::dictionary::DictionaryStore;
use crate::lang::Language;
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;
use std::sync::LazyLock;

static STORE: LazyLock<DictionaryStore> = LazyLock::new(DictionaryStore::load);

/// Context over the bundled dictionary of `lang`.
pub fn context(lang: Language) -> Context<'static> {
    Context::new(lang, STORE.get(lang))
}

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples(_lang: Language) -> &'static [&'static str] {
        &["Alláh-u-Abhá", " wa al-ḥamdu ", "yá Iláhí,, ", ""]
    }

    /// Samples that must pass through unchanged and borrowed.
    fn should_pass_through(_lang: Language) -> &'static [&'static str] {
        &[
            "hello",   // Simple lowercase
            "Alláh",   // Already canonical
            "test123", // Alphanumeric
            "abc def", // Simple phrase with space
            "",        // Empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform(_lang: Language) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal contracts:
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields the same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() changes text
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
///
/// `Send + Sync + 'static` is implied by the trait bounds.
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &lang in Language::ALL {
        let ctx = context(lang);

        for &input in S::samples(lang) {
            let mut text = Cow::Borrowed(input);

            if stage.needs_apply(&text, &ctx) {
                text = stage.apply(text, &ctx);
                assert_ne!(text.as_ref(), input, "needs_apply lied on `{input}` ({lang})");
            } else {
                assert_eq!(input as *const str, text.as_ref() as *const str);
            }

            // Second pass must never allocate again
            let old_ptr = text.as_ref() as *const str;
            if stage.needs_apply(&text, &ctx) {
                text = stage.apply(text, &ctx);
            }
            assert_eq!(
                old_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on second pass (lang: {lang}, input: `{input}`)"
            );
        }

        for &pass_through in S::should_pass_through(lang) {
            let original_ptr = pass_through as *const str;
            let text = stage.apply(Cow::Borrowed(pass_through), &ctx);
            assert!(!stage.needs_apply(pass_through, &ctx), "`{pass_through}` ({lang})");
            assert_eq!(text.as_ref(), pass_through);
            assert_eq!(
                original_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on pass-through sample (lang: {lang}, input: `{pass_through}`)"
            );
        }

        for &(input, expected) in S::should_transform(lang) {
            let text = stage.apply(Cow::Borrowed(input), &ctx);
            assert_eq!(text.as_ref(), expected, "{} in {lang}", stage.name());
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &lang in Language::ALL {
        let ctx = context(lang);
        let inputs = S::samples(lang)
            .iter()
            .copied()
            .chain(S::should_transform(lang).iter().map(|(i, _)| *i));
        for input in inputs {
            let once = stage.apply(Cow::Borrowed(input), &ctx);
            let twice = stage.apply(once.clone(), &ctx);
            assert_eq!(once, twice, "apply() not idempotent in {lang} on `{input}`");
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for &lang in Language::ALL {
        let ctx = context(lang);
        for &sample in S::samples(lang) {
            check_accuracy(&stage, sample, &ctx);
        }
        for &(sample, _) in S::should_transform(lang) {
            check_accuracy(&stage, sample, &ctx);
        }
        let must_not_touch = ["", "hello", "world123", " !@#"];
        for clean in must_not_touch {
            check_accuracy(&stage, clean, &ctx);
        }
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx);
    // Owned input, so stages that always allocate are not penalised
    let output = stage.apply(Cow::Owned(input.to_owned()), ctx);
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` in {lang} on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
        lang = ctx.lang
    );
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: S) {
    for &lang in Language::ALL {
        let ctx = context(lang);
        let result_empty = stage.apply(Cow::Borrowed(""), &ctx);
        assert_eq!(result_empty.as_ref(), "");
        // Plain ASCII prose must not be semantically altered
        let ascii = "hello world 123 (abc) @#";
        let result_ascii = stage.apply(Cow::Borrowed(ascii), &ctx);
        assert_eq!(result_ascii.as_ref(), ascii);
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    for &lang in Language::ALL {
        let ctx = context(lang);
        let _ = stage.apply(
            Cow::Borrowed("Hello 世界 русский Türkçe العربية\u{200C}فارسی 'l- wa al-"),
            &ctx,
        );
        let _ = stage.apply(Cow::Borrowed("\n\n - ' , . #"), &ctx);
    }
}
