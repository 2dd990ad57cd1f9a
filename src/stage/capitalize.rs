use crate::{
    context::Context,
    stage::{Stage, changed},
    unicode::replace_bounded,
};
use std::borrow::Cow;

/// Divine names whose capitalized form is fixed regardless of the
/// dictionary in use.
const FIXED_DIVINE_NAMES: &[&str] = &["al-Mu'ṭí", "al-'Alím", "al-Ḥakím"];

/// Characters skipped when looking for the letter to capitalize.
const OPENERS: &[char] = &['\'', '"', '*', '(', '«', '[', '#', ' '];

/// Sentence and divine-name capitalization.
///
/// * The first letter after `. `, `! ` or `? ` is uppercased.
/// * Every line after the first starts with a capital, and so does a
///   markdown heading on the first line. Quotes, brackets, emphasis and
///   heading markers in front of the letter are skipped.
/// * Divine names written in lowercase after their article are restored:
///   `al-mu'ṭí` → `al-Mu'ṭí`.
///
/// The very start of the text is left alone: a transliteration often
/// begins mid-sentence with a particle such as `lá` or `wa`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Capitalize;

impl Capitalize {
    fn rewrite(&self, text: &str, ctx: &Context) -> Option<String> {
        let mut out = String::with_capacity(text.len() + 4);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            capitalize_line(line, i > 0 || is_heading(line), &mut out);
        }

        let mut current = Cow::Owned(out);
        let names = ctx
            .dictionary
            .divine_names
            .values()
            .map(|e| e.transliteration.as_str())
            .chain(FIXED_DIVINE_NAMES.iter().copied());
        for name in names {
            let Some((_, body)) = name.split_once('-') else {
                continue;
            };
            let lower = body.to_lowercase();
            if lower != body {
                current = replace_bounded(current, &format!("-{lower}"), &format!("-{body}"));
            }
        }
        changed(text, current.into_owned())
    }
}

fn is_heading(line: &str) -> bool {
    let rest = line.trim_start_matches('#');
    rest.len() < line.len() && rest.starts_with(' ')
}

fn capitalize_line(line: &str, at_start: bool, out: &mut String) {
    let mut pending = at_start;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if pending {
            if c.is_lowercase() {
                out.extend(c.to_uppercase());
                pending = false;
                continue;
            }
            pending = OPENERS.contains(&c);
        }
        out.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek() == Some(&' ') {
            pending = true;
        }
    }
}

impl Stage for Capitalize {
    fn name(&self) -> &'static str {
        "capitalize"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        self.rewrite(text, ctx).is_some()
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

    impl StageTestConfig for Capitalize {
        fn samples(_lang: Language) -> &'static [&'static str] {
            &[
                "Alláh-u-Abhá",
                "lá iláha illá'lláh",
                "wa'l-ḥamdu. huwa'lláh",
                "first\nsecond",
                "",
            ]
        }

        fn should_transform(lang: Language) -> &'static [(&'static str, &'static str)] {
            match lang {
                Language::Arabic => &[
                    ("huwa. wa", "huwa. Wa"),
                    ("a! b? c", "a! B? C"),
                    ("a\nb", "a\nB"),
                    ("a\n'alá", "a\n'Alá"),
                    ("a\n* (wa)", "a\n* (Wa)"),
                    ("# title", "# Title"),
                    ("#tag", "#tag"),
                    ("a\n## title", "a\n## Title"),
                    ("anta'l-mu'ṭí", "anta'l-Mu'ṭí"),
                    ("wa'l-'alím wa'l-ḥakím", "wa'l-'Alím wa'l-Ḥakím"),
                    ("bi'r-raḥmán", "bi'r-Raḥmán"),
                    ("al-qayyúmi", "al-qayyúmi"),
                    ("1.5 b", "1.5 b"),
                ],
                Language::Persian => &[("a\nb", "a\nB"), ("bi'r-raḥím", "bi'r-Raḥím")],
            }
        }
    }

    fn run(text: &str) -> String {
        Capitalize
            .apply(Cow::Borrowed(text), &context(Language::Arabic))
            .into_owned()
    }

    #[test]
    fn universal_contract() {
        assert_stage_contract!(Capitalize);
    }

    #[test]
    fn text_start_is_left_alone() {
        assert_eq!(run("wa'lláh"), "wa'lláh");
        assert_eq!(run("yá Iláhí"), "yá Iláhí");
    }

    #[test]
    fn only_lowercase_letters_change() {
        assert_eq!(run("a\n12 b"), "a\n12 b");
        assert_eq!(run("a. -b"), "a. -b");
    }
}
