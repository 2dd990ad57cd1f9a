use crate::{
    context::Context,
    dictionary::{Rule, ordered_rules},
    stage::{ARTICLE_CONSONANTS, Stage, changed},
    unicode::{is_word_char, replace_bounded},
};
use memchr::memmem;
use std::borrow::Cow;

/// Elides the definite article after a particle.
///
/// Driven by the dictionary's `article_rules`, in their declared order. A
/// rule whose pattern ends in ` al-` (`wa al-` → `wa'l-`) is an *article
/// rule*: the particle may be followed by spaces or hyphens, the article may
/// be assimilated (`fí ad-dunyá` → `fí'd-dunyá`) and `Alláh` elides its
/// alif (`wa Alláh` → `wa'lláh`). Any other rule is a bounded literal
/// replacement.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArticleContraction;

/// Article rule split into the particle and the elided prefix that replaces
/// `particle + separator + a`.
struct ArticleRule<'r> {
    particle: &'r str,
    elided: &'r str,
}

impl<'r> ArticleRule<'r> {
    fn parse(rule: &'r Rule) -> Option<Self> {
        let particle = rule.pattern.strip_suffix(" al-")?;
        let elided = rule.transliteration.strip_suffix("l-")?;
        (!particle.is_empty()).then_some(Self { particle, elided })
    }

    /// Contracts every occurrence in `text`; `None` when nothing matched.
    fn contract(&self, text: &str) -> Option<String> {
        let finder = memmem::Finder::new(self.particle.as_bytes());
        let mut out: Option<String> = None;
        let mut last = 0;

        for start in finder.find_iter(text.as_bytes()) {
            if start < last || text[..start].chars().next_back().is_some_and(is_word_char) {
                continue;
            }
            let after_particle = start + self.particle.len();
            let rest = &text[after_particle..];
            let article = rest.trim_start_matches([' ', '-']);
            if article.len() == rest.len() {
                continue;
            }
            let Some((kept, consumed)) = article_tail(article) else {
                continue;
            };
            let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
            buf.push_str(&text[last..start]);
            buf.push_str(self.elided);
            buf.push_str(kept);
            last = text.len() - article.len() + consumed;
        }

        out.map(|mut buf| {
            buf.push_str(&text[last..]);
            buf
        })
    }
}

/// Recognizes the article at the start of `s`. Returns the text to keep
/// after the elision apostrophe and the number of bytes consumed.
fn article_tail(s: &str) -> Option<(&str, usize)> {
    if s.starts_with("Alláh") || s.starts_with("alláh") {
        // only the alif goes: wa'lláh
        return Some(("", 1));
    }
    let body = s.strip_prefix('a')?;
    ARTICLE_CONSONANTS.iter().find_map(|c| {
        let after = body.strip_prefix(c)?;
        after
            .starts_with('-')
            .then(|| (&s[1..1 + c.len() + 1], 1 + c.len() + 1))
    })
}

impl ArticleContraction {
    fn rewrite(&self, text: &str, ctx: &Context) -> Option<String> {
        let mut current: Cow<'_, str> = Cow::Borrowed(text);
        for (_, rule) in ordered_rules(&ctx.dictionary.article_rules) {
            match ArticleRule::parse(rule) {
                Some(article) => {
                    if let Some(next) = article.contract(&current) {
                        current = Cow::Owned(next);
                    }
                }
                None => {
                    current = replace_bounded(current, &rule.pattern, &rule.transliteration);
                }
            }
        }
        match current {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => changed(text, s),
        }
    }
}

impl Stage for ArticleContraction {
    fn name(&self) -> &'static str {
        "article_contraction"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        !ctx.dictionary.article_rules.is_empty() && self.rewrite(text, ctx).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        match self.rewrite(&text, ctx) {
            Some(s) => Cow::Owned(s),
            None => text,
        }
    }
}
