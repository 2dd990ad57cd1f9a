use crate::{
    context::Context,
    dictionary::ordered_rules,
    stage::{Stage, changed},
    unicode::{is_arabic_script, replace_bounded},
};
use std::borrow::Cow;

/// Applies the dictionary's `ezafe_rules` to the joined Latin text: a
/// ZWNJ left between two words becomes a hyphen, and for Persian the
/// present-tense `mí ` is tied to its verb (`mí diham` → `mí-diham`).
///
/// Rules whose pattern is written in Arabic script (the final kasra) act on
/// words during resolution and are skipped here.
#[derive(Debug, Default, Clone, Copy)]
pub struct EzafeConnector;

impl EzafeConnector {
    fn rewrite(&self, text: &str, ctx: &Context) -> Option<String> {
        let mut current: Cow<'_, str> = Cow::Borrowed(text);
        let latin_rules = ordered_rules(&ctx.dictionary.ezafe_rules)
            .into_iter()
            .filter(|(_, r)| !r.pattern.is_empty() && !r.pattern.chars().any(is_arabic_script));
        for (_, rule) in latin_rules {
            current = replace_bounded(current, &rule.pattern, &rule.transliteration);
        }
        match current {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => changed(text, s),
        }
    }
}

impl Stage for EzafeConnector {
    fn name(&self) -> &'static str {
        "ezafe_connector"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        !ctx.dictionary.ezafe_rules.is_empty() && self.rewrite(text, ctx).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        match self.rewrite(&text, ctx) {
            Some(s) => Cow::Owned(s),
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;
    use crate::lang::Language;
    use crate::testing::stage_contract::{StageTestConfig, context};

    impl StageTestConfig for EzafeConnector {
        fn samples(_lang: Language) -> &'static [&'static str] {
            &[
                "Parvardigár\u{200C}i man",
                "mí diham",
                "Alláh-u-Abhá",
                "nimí dánam",
                "",
            ]
        }

        fn should_transform(lang: Language) -> &'static [(&'static str, &'static str)] {
            match lang {
                Language::Persian => &[
                    ("dil\u{200C}am", "dil-am"),
                    ("mí diham", "mí-diham"),
                    ("nimí diham", "nimí diham"),
                ],
                Language::Arabic => &[
                    ("dil\u{200C}am", "dil-am"),
                    ("mí diham", "mí diham"),
                ],
            }
        }
    }

    #[test]
    fn universal_contract() {
        assert_stage_contract!(EzafeConnector);
    }

    #[test]
    fn arabic_script_rules_are_skipped() {
        let ctx = context(Language::Persian);
        let text = "dil\u{0650}";
        assert!(!EzafeConnector.needs_apply(text, &ctx));
        assert_eq!(EzafeConnector.apply(Cow::Borrowed(text), &ctx), text);
    }

    #[test]
    fn every_zwnj_is_replaced() {
        let ctx = context(Language::Arabic);
        assert_eq!(
            EzafeConnector.apply(Cow::Borrowed("a\u{200C}b\u{200C}c"), &ctx),
            "a-b-c"
        );
    }
}
