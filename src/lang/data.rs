use crate::lang::{LangEntry, LetterOverride};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Shared Arabic-script letter table.
///    Every language starts from a by-value copy of this table and then
///    applies its own `overrides`.
/// ---------------------------------------------------------------------------
pub static BASE_LETTERS: Map<char, &'static str> = phf_map! {
    'ا' => "á",  'أ' => "a",  'إ' => "i",  'آ' => "á",  'ٱ' => "a",
    'ب' => "b",  'ت' => "t",  'ث' => "th", 'ج' => "j",
    'ح' => "ḥ",  'خ' => "kh", 'د' => "d",  'ذ' => "dh",
    'ر' => "r",  'ز' => "z",  'س' => "s",  'ش' => "sh",
    'ص' => "ṣ",  'ض' => "ḍ",  'ط' => "ṭ",  'ظ' => "ẓ",
    'ع' => "'",  'غ' => "gh", 'ف' => "f",  'ق' => "q",
    'ك' => "k",  'ک' => "k",  'ل' => "l",  'م' => "m",
    'ن' => "n",  'ه' => "h",  'و' => "w",  'ي' => "y",
    'ی' => "y",  'ى' => "á",  'ئ' => "'",  'ؤ' => "'",
    'ء' => "'",  'ة' => "h",  'ۀ' => "h",  'ھ' => "h",
    'پ' => "p",  'چ' => "ch", 'ژ' => "zh", 'گ' => "g",
    'ڤ' => "v",
};

/// Combining marks and the vowel they emit in heuristic output.
/// Shadda and sukun emit nothing here; the heuristic gives them their own
/// treatment (gemination and vowel suppression).
pub static VOWEL_MARKS: Map<char, &'static str> = phf_map! {
    '\u{064B}' => "an", // fathatan
    '\u{064C}' => "un", // dammatan
    '\u{064D}' => "in", // kasratan
    '\u{064E}' => "a",  // fatha
    '\u{064F}' => "u",  // damma
    '\u{0650}' => "i",  // kasra
    '\u{0651}' => "",   // shadda
    '\u{0652}' => "",   // sukun
    '\u{0653}' => "",   // maddah above
    '\u{0654}' => "'",  // hamza above
    '\u{0655}' => "'",  // hamza below
    '\u{0670}' => "á",  // superscript alef
};

/// Arabic-block punctuation and digits with a direct Latin counterpart.
pub static PUNCTUATION: Map<char, &'static str> = phf_map! {
    '،' => ",", '؛' => ";", '؟' => "?", '٪' => "%",
    '٫' => ".", '٬' => ",", '۔' => ".", 'ـ' => "",
    '٠' => "0", '١' => "1", '٢' => "2", '٣' => "3", '٤' => "4",
    '٥' => "5", '٦' => "6", '٧' => "7", '٨' => "8", '٩' => "9",
    '۰' => "0", '۱' => "1", '۲' => "2", '۳' => "3", '۴' => "4",
    '۵' => "5", '۶' => "6", '۷' => "7", '۸' => "8", '۹' => "9",
};

/// Rough ASCII stand-ins for Arabic-script residue left in finished Latin
/// text. Anything missing here is dropped by the scrub.
pub static SCRUB_LETTERS: Map<char, &'static str> = phf_map! {
    'ا' => "a",  'آ' => "a",  'أ' => "a",  'إ' => "i",
    'ب' => "b",  'ت' => "t",  'ث' => "th", 'ج' => "j",
    'ح' => "h",  'خ' => "kh", 'د' => "d",  'ذ' => "dh",
    'ر' => "r",  'ز' => "z",  'س' => "s",  'ش' => "sh",
    'ص' => "s",  'ض' => "d",  'ط' => "t",  'ظ' => "z",
    'ع' => "'",  'غ' => "gh", 'ف' => "f",  'ق' => "q",
    'ك' => "k",  'ک' => "k",  'گ' => "g",  'ل' => "l",
    'م' => "m",  'ن' => "n",  'ه' => "h",  'و' => "w",
    'ي' => "y",  'ی' => "i",  'ء' => "'",  'ؤ' => "u'",
    'ئ' => "i'", 'ة' => "h",  'ژ' => "zh", 'چ' => "ch",
    'پ' => "p",  'ڤ' => "v",
    '\u{064E}' => "a",  '\u{0650}' => "i",  '\u{064F}' => "u",
    '\u{064B}' => "an", '\u{064D}' => "in", '\u{064C}' => "un",
    '\u{0652}' => "",   '\u{0651}' => "",   '\u{0670}' => "a",
};

/// ---------------------------------------------------------------------------
///    Macro – generates the `Language` enum and its static data
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $variant:ident, $code_str:literal, $name:literal,
        overrides: [ $($ofrom:expr => $oto:expr),* $(,)? ],
        exclusive: [ $($ex:expr),* $(,)? ],
        function_words: [ $($fw:expr),* $(,)? ],
        canonical_phrases: [ $( ($pk:expr => $pv:expr) ),* $(,)? ]
    ),* $(,)?) => {
        /// Source language of a text. Selects the dictionary and letter map.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Language {
            $( $variant, )*
        }

        // Per-language static data modules
        $(
            paste! {
                mod [<$variant:lower _data>] {
                    use super::*;

                    pub static OVERRIDES: &[LetterOverride] = &[
                        $(LetterOverride { from: $ofrom, to: $oto }),*
                    ];

                    pub static EXCLUSIVE: &[char] = &[$($ex),*];

                    pub static FUNCTION_WORDS: &[&str] = &[$($fw),*];

                    pub static CANONICAL_PHRASES: &[(&str, &str)] = &[
                        $( ($pk, $pv) ),*
                    ];

                    pub static ENTRY: LangEntry = LangEntry {
                        overrides: OVERRIDES,
                        exclusive_letters: EXCLUSIVE,
                        function_words: FUNCTION_WORDS,
                        canonical_phrases: CANONICAL_PHRASES,
                    };
                }
            }
        )*

        impl Language {
            /// Every supported language, in declaration order.
            pub const ALL: &'static [Language] = &[$(Language::$variant),*];

            #[inline(always)]
            pub const fn code(self) -> &'static str {
                match self {
                    $( Language::$variant => $code_str, )*
                }
            }

            #[inline(always)]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Language::$variant => $name, )*
                }
            }

            #[inline(always)]
            pub fn entry(self) -> &'static LangEntry {
                paste! {
                    match self {
                        $( Language::$variant => &[<$variant:lower _data>]::ENTRY, )*
                    }
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Persian keeps the Bahai consonant conventions (ḥ, ṣ, th, dh …) and only
//    re-voices waw and yeh.
// ---------------------------------------------------------------------------
define_languages! {
    Arabic, "ARA", "Arabic",
        overrides: [],
        exclusive: [],
        function_words: [],
        canonical_phrases: [
            ("يا إلهي" => "yá Iláhí,"),
            ("لا إله إلا" => "lá iláha illá"),
            ("في هذا الحين" => "fí hádhá'l-ḥíni"),
            ("أنت المهيمن القيوم" => "anta'l-Muhayminu'l-Qayyúm"),
            ("بسم الله الرحمن الرحيم" => "Bismi'lláhi'r-Raḥmáni'r-Raḥím"),
        ],

    Persian, "FAS", "Persian",
        overrides: [
            'و' => "v",
            'ی' => "í",
            'ي' => "í",
            'ۀ' => "iy-i",
        ],
        exclusive: [ 'پ', 'چ', 'ژ', 'گ' ],
        function_words: [ "خدا", "از", "به", "در", "که", "این", "آن", "می" ],
        canonical_phrases: [
            ("لم یزل" => "lam yazal"),
            ("لا یزال" => "lá yazál"),
        ],
}

/// Language codes and the aliases accepted by `Language::from_code`.
pub static LANG_TABLE: Map<&'static str, Language> = phf_map! {
    "ARA" => Language::Arabic,
    "AR" => Language::Arabic,
    "ARABIC" => Language::Arabic,
    "FAS" => Language::Persian,
    "PES" => Language::Persian,
    "FA" => Language::Persian,
    "FARSI" => Language::Persian,
    "PERSIAN" => Language::Persian,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names() {
        assert_eq!(Language::Arabic.code(), "ARA");
        assert_eq!(Language::Persian.code(), "FAS");
        assert_eq!(Language::Persian.name(), "Persian");
        assert_eq!(Language::ALL, &[Language::Arabic, Language::Persian]);
    }

    #[test]
    fn test_lang_table_aliases() {
        assert_eq!(LANG_TABLE.get("AR"), Some(&Language::Arabic));
        assert_eq!(LANG_TABLE.get("FARSI"), Some(&Language::Persian));
        assert_eq!(LANG_TABLE.get("ENG"), None);
    }

    #[test]
    fn test_persian_entry() {
        let entry = Language::Persian.entry();
        assert_eq!(entry.exclusive_letters, &['پ', 'چ', 'ژ', 'گ']);
        assert!(entry.function_words.contains(&"خدا"));
        assert!(entry.overrides.iter().any(|o| o.from == 'و' && o.to == "v"));
    }

    #[test]
    fn test_arabic_entry_has_no_overrides() {
        let entry = Language::Arabic.entry();
        assert!(entry.overrides.is_empty());
        assert!(entry.exclusive_letters.is_empty());
        assert!(!entry.canonical_phrases.is_empty());
    }

    #[test]
    fn test_base_tables() {
        assert_eq!(BASE_LETTERS.get(&'ش'), Some(&"sh"));
        assert_eq!(VOWEL_MARKS.get(&'\u{064E}'), Some(&"a"));
        assert_eq!(PUNCTUATION.get(&'،'), Some(&","));
        assert_eq!(PUNCTUATION.get(&'۷'), Some(&"7"));
    }
}
