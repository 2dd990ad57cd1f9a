mod prop_tests {
    use crate::{Language, Transliterator};
    use proptest::prelude::*;
    use std::sync::LazyLock;

    static T: LazyLock<Transliterator> = LazyLock::new(Transliterator::new);

    const LETTERS: &[char] = &[
        'ا', 'ب', 'ت', 'ج', 'د', 'ر', 'س', 'ش', 'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ي', ' ',
        '\u{064E}', '\u{064F}', '\u{0650}',
    ];

    // ٹ has no mapping and must survive a second pass untouched
    const ROUND_TRIP: &[char] = &[
        'ا', 'ب', 'ت', 'د', 'ر', 'س', 'ش', 'ف', 'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ي', 'ٹ',
        ' ', ' ', '\n', '،', '-', '\u{064E}', '\u{064F}', '\u{0650}', '\u{0651}', '\u{0652}',
    ];

    const MARKS: &[char] = &['\u{064E}', '\u{064F}', '\u{0652}', '\u{0651}'];

    fn arabic_text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(LETTERS), 0..40)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn mixed_text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(ROUND_TRIP), 0..48)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn language() -> impl Strategy<Value = Language> {
        prop::sample::select(Language::ALL)
    }

    proptest! {
        #[test]
        fn transliteration_is_deterministic(s in arabic_text(), lang in language()) {
            prop_assert_eq!(T.transliterate(&s, lang), T.transliterate(&s, lang));
        }

        #[test]
        fn normalized_output_is_stable(s in arabic_text(), lang in language()) {
            let out = T.transliterate(&s, lang);
            let again = T.normalize(&out, lang);
            prop_assert_eq!(again.as_ref(), out.as_str());
        }

        #[test]
        fn transliterating_twice_changes_nothing(s in mixed_text(), lang in language()) {
            let once = T.transliterate(&s, lang);
            let twice = T.transliterate(&once, lang);
            prop_assert_eq!(twice, once, "input {:?}", s);
        }

        #[test]
        fn latin_text_only_gets_normalized(s in "[a-z ]{0,60}", lang in language()) {
            let expected = T.normalize(&s, lang).into_owned();
            prop_assert_eq!(T.transliterate(&s, lang), expected);
        }

        #[test]
        fn any_input_is_total(s in "\\PC{0,80}", lang in language()) {
            let _ = T.transliterate(&s, lang);
        }

        #[test]
        fn dictionary_wins_regardless_of_harakat(
            index in any::<prop::sample::Index>(),
            marks in prop::collection::vec(prop::sample::select(MARKS), 1..6),
        ) {
            let dict = T.dictionary(Language::Arabic);
            let mut keys: Vec<&String> = dict.common_words.keys().collect();
            keys.sort();
            let key = keys[index.index(keys.len())];

            let mut marked = String::new();
            for (i, c) in key.chars().enumerate() {
                marked.push(c);
                marked.push(marks[i % marks.len()]);
            }
            let expected = &dict.common_words[key].transliteration;
            prop_assert_eq!(&T.resolve_word(&marked, Language::Arabic), expected);
        }
    }
}
