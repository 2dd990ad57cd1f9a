//! Character classes and small string primitives shared by every layer.

use memchr::memmem;
use std::borrow::Cow;

pub const ZWNJ: char = '\u{200C}';
pub const TATWEEL: char = '\u{0640}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';

// Private-use code points. They never occur in real text and carry
// pipeline state between layers.
pub const NO_VOWEL: char = '\u{E000}';
pub const PLACEHOLDER_OPEN: char = '\u{E001}';
pub const PLACEHOLDER_CLOSE: char = '\u{E002}';
pub const PLACEHOLDER_SPACE: char = '\u{E003}';

/// Arabic block plus Supplement, Extended-A and Presentation Forms A/B.
#[inline(always)]
pub const fn is_arabic_script(c: char) -> bool {
    let cp = c as u32;

    // Early exit: almost all Latin output is below the Arabic block
    if cp < 0x0600 {
        return false;
    }

    matches!(cp,
        0x0600..=0x06FF |
        0x0750..=0x077F |
        0x08A0..=0x08FF |
        0xFB50..=0xFDFF |
        0xFE70..=0xFEFF
    )
}

/// Harakat, Quranic annotation marks and superscript alef.
#[inline(always)]
pub const fn is_arabic_mark(c: char) -> bool {
    matches!(c as u32, 0x064B..=0x065F | 0x0670)
}

/// A base letter of the Arabic script. Harakat carry the Unicode Alphabetic
/// property, so they are excluded explicitly.
#[inline]
pub fn is_arabic_letter(c: char) -> bool {
    is_arabic_script(c) && c.is_alphabetic() && !is_arabic_mark(c) && c != TATWEEL
}

#[inline(always)]
pub const fn is_placeholder_char(c: char) -> bool {
    matches!(c, PLACEHOLDER_OPEN | PLACEHOLDER_CLOSE | PLACEHOLDER_SPACE)
}

/// Whitespace other than the line break, which the pipeline keeps.
#[inline(always)]
pub fn is_horizontal_ws(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

/// Characters that glue a Latin word together for boundary checks.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

/// Characters a token core may hold. Everything else is an affix.
#[inline]
pub fn is_token_core(c: char) -> bool {
    is_arabic_letter(c)
        || is_arabic_mark(c)
        || c.is_alphanumeric()
        || is_placeholder_char(c)
        || c == ZWNJ
        || c == NO_VOWEL
}

/// Replaces every non-overlapping occurrence of `pattern` whose word-character
/// edges are not glued to neighbouring word characters.
///
/// A pattern edge that is itself a non-word character (a space, a hyphen)
/// needs no boundary check on that side.
pub fn replace_bounded<'a>(text: Cow<'a, str>, pattern: &str, replacement: &str) -> Cow<'a, str> {
    if pattern.is_empty() {
        return text;
    }
    let finder = memmem::Finder::new(pattern.as_bytes());
    let check_left = pattern.chars().next().is_some_and(is_word_char);
    let check_right = pattern.chars().next_back().is_some_and(is_word_char);

    let mut out: Option<String> = None;
    let mut last = 0;
    let mut from = 0;
    let src: &str = text.as_ref();

    while let Some(rel) = finder.find(&src.as_bytes()[from..]) {
        let start = from + rel;
        let end = start + pattern.len();
        let left_ok = !check_left || !src[..start].chars().next_back().is_some_and(is_word_char);
        let right_ok = !check_right || !src[end..].chars().next().is_some_and(is_word_char);
        if left_ok && right_ok {
            let buf = out.get_or_insert_with(|| String::with_capacity(src.len()));
            buf.push_str(&src[last..start]);
            buf.push_str(replacement);
            last = end;
            from = end;
        } else {
            // step past the first char of this match
            from = start + src[start..].chars().next().map_or(1, char::len_utf8);
        }
        if from > src.len() {
            break;
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&src[last..]);
            Cow::Owned(buf)
        }
        None => text,
    }
}

/// Uppercases the first character of `s`. Borrows when nothing changes.
pub fn capitalize_first(s: &str) -> Cow<'_, str> {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_lowercase() => {
            let mut out = String::with_capacity(s.len() + 2);
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(s),
    }
}
