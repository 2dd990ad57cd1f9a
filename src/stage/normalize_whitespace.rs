use crate::{
    context::Context,
    stage::{ARTICLE_CONSONANTS, Stage, changed},
    unicode::is_horizontal_ws,
};
use std::borrow::Cow;

/// Spacing and punctuation cleanup over the joined Latin text.
///
/// Works line by line; line breaks are kept.
///
/// | Input              | Output            |
/// |--------------------|-------------------|
/// | `a \t  b`          | `a b`             |
/// | `Alláh - u - Abhá` | `Alláh-u-Abhá`    |
/// | `yá Iláhí ,, man`  | `yá Iláhí, man`   |
/// | `wa ' l-ḥamdu`     | `wa'l-ḥamdu`      |
/// | `##Title`          | `## Title`        |
/// | `* (note) *`       | `*(note)*`        |
///
/// A line-initial `- ` bullet keeps its space, and an apostrophe keeps its
/// neighbours unless it is an elision (`'l-`, `'ll`, `'d-`, …).
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeWhitespace;

const MAX_HEADING: usize = 6;

impl NormalizeWhitespace {
    fn rewrite(&self, text: &str) -> Option<String> {
        let mut out = String::with_capacity(text.len());
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            normalize_line(line, &mut out);
        }
        let trimmed = out.trim_matches(char::is_whitespace);
        if trimmed.len() != out.len() {
            out = trimmed.to_owned();
        }
        changed(text, out)
    }
}

fn normalize_line(line: &str, out: &mut String) {
    let collapsed: Vec<char> = collapse(line);
    let start = out.len();

    for (i, &c) in collapsed.iter().enumerate() {
        if c == ' ' && drop_space(&collapsed, i) {
            continue;
        }
        if c == ',' && out[start..].ends_with(',') {
            continue;
        }
        out.push(c);
    }

    if let Some(at) = heading_gap(&out[start..]) {
        out.insert(start + at, ' ');
    }
}

/// Single spaces between words, nothing at the edges.
fn collapse(line: &str) -> Vec<char> {
    let mut chars = Vec::with_capacity(line.len());
    for word in line.split(is_horizontal_ws).filter(|w| !w.is_empty()) {
        if !chars.is_empty() {
            chars.push(' ');
        }
        chars.extend(word.chars());
    }
    chars
}

/// `chars[i]` is a space with a non-space on each side.
fn drop_space(chars: &[char], i: usize) -> bool {
    let (prev, next) = (chars[i - 1], chars[i + 1]);
    match (prev, next) {
        (_, ',' | '.' | '!' | '?' | ';' | ':') => true,
        (_, '-') => true,
        ('-', _) => i != 1,
        ('*', '(') | (')', '*') => true,
        (_, '\'') => is_elision(chars, i + 1),
        ('\'', _) => is_elision(chars, i - 1),
        _ => false,
    }
}

/// An apostrophe standing for an elided article or alif: a letter before
/// it, and `l-`, `ll` or an assimilated consonant plus hyphen after it.
fn is_elision(chars: &[char], at: usize) -> bool {
    let before = chars[..at].iter().rev().find(|&&c| c != ' ');
    if !before.is_some_and(|c| c.is_alphabetic()) {
        return false;
    }
    let after: String = chars[at + 1..]
        .iter()
        .skip_while(|&&c| c == ' ')
        .take(3)
        .collect();
    after.starts_with("ll")
        || ARTICLE_CONSONANTS.iter().any(|c| {
            after
                .strip_prefix(c)
                .is_some_and(|rest| rest.starts_with('-'))
        })
}

/// Byte offset where a markdown heading marker needs its space.
fn heading_gap(line: &str) -> Option<usize> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING {
        return None;
    }
    line[hashes..]
        .chars()
        .next()
        .is_some_and(|c| c != ' ')
        .then_some(hashes)
}

impl Stage for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        "normalize_whitespace"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        self.rewrite(text).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        match self.rewrite(&text) {
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

    impl StageTestConfig for NormalizeWhitespace {
        fn samples(_lang: Language) -> &'static [&'static str] {
            &[
                "Alláh-u-Abhá",
                " wa al-ḥamdu ",
                "yá Iláhí,, ",
                "# - x",
                "line one\n\n  - bullet\r\n",
                "",
            ]
        }

        fn should_transform(_lang: Language) -> &'static [(&'static str, &'static str)] {
            &[
                ("a \t  b", "a b"),
                ("  a  ", "a"),
                ("Alláh - u - Abhá", "Alláh-u-Abhá"),
                ("yá Iláhí ,, man", "yá Iláhí, man"),
                ("yá Iláhí, , man", "yá Iláhí, man"),
                ("He is God !", "He is God!"),
                ("wa ' l-ḥamdu", "wa'l-ḥamdu"),
                ("fí 'd-dunyá", "fí'd-dunyá"),
                ("wa ' lláh", "wa'lláh"),
                ("Alláh 'alá", "Alláh 'alá"),
                ("##Title", "## Title"),
                ("#######x", "#######x"),
                ("* (note) *", "*(note)*"),
                ("- item", "- item"),
                ("a\n - item", "a\n- item"),
                ("a \n b", "a\nb"),
            ]
        }
    }

    fn run(text: &str) -> String {
        NormalizeWhitespace
            .apply(Cow::Borrowed(text), &context(Language::Arabic))
            .into_owned()
    }

    #[test]
    fn universal_contract() {
        assert_stage_contract!(NormalizeWhitespace);
    }

    #[test]
    fn blank_lines_survive_inside_the_text() {
        assert_eq!(run("\n\na\n\n\nb\n"), "a\n\n\nb");
    }

    #[test]
    fn heading_fix_runs_after_hyphen_cleanup() {
        assert_eq!(run("# - x"), "# -x");
        assert_eq!(run("# -x"), "# -x");
    }

    #[test]
    fn apostrophe_after_non_letter_keeps_spaces() {
        assert_eq!(run("12 'l-x"), "12 'l-x");
    }

    #[test]
    fn unicode_spaces_collapse() {
        assert_eq!(run("a\u{00A0}\u{2003}b"), "a b");
    }
}
