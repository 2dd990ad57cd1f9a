//! Minimal tables used when a bundled dictionary cannot be parsed.

use super::{Dictionary, Metadata, Pattern, Rule, WordEntry};
use crate::lang::Language;
use std::collections::HashMap;

pub(super) fn builtin(lang: Language) -> Dictionary {
    match lang {
        Language::Arabic => arabic(),
        Language::Persian => persian(),
    }
}

fn words(list: &[(&str, &str, &str)]) -> HashMap<String, WordEntry> {
    list.iter()
        .map(|&(k, t, cat)| (k.to_owned(), WordEntry::new(t).with_category(cat)))
        .collect()
}

fn affixes(list: &[(&str, &str)]) -> HashMap<String, WordEntry> {
    list.iter()
        .map(|&(k, t)| (k.to_owned(), WordEntry::new(t)))
        .collect()
}

fn rules(list: &[(&str, &str, &str)]) -> HashMap<String, Rule> {
    list.iter()
        .enumerate()
        .map(|(i, &(key, pattern, translit))| {
            (key.to_owned(), Rule::new(pattern, translit, (i as u32 + 1) * 10))
        })
        .collect()
}

fn metadata(lang: Language) -> Metadata {
    Metadata {
        version: "builtin".to_owned(),
        description: format!("built-in {lang} fallback table"),
        last_updated: String::new(),
    }
}

fn heuristics() -> HashMap<String, Rule> {
    let mut map = HashMap::new();
    map.insert(
        "default_vowel".to_owned(),
        Rule {
            transliteration: "a".to_owned(),
            notes: Some("inserted between consonants when nothing else applies".to_owned()),
            ..Rule::default()
        },
    );
    map
}

const ARTICLE_RULES: &[(&str, &str, &str)] = &[
    ("wa_al", "wa al-", "wa'l-"),
    ("fa_al", "fa al-", "fa'l-"),
    ("bi_al", "bi al-", "bi'l-"),
    ("fi_al", "fí al-", "fí'l-"),
    ("ka_al", "ka al-", "ka'l-"),
    ("li_al", "li al-", "li'l-"),
    ("min_al", "min al-", "mina'l-"),
    ("ila_al", "ilá al-", "ilá'l-"),
    ("ala_al", "'alá al-", "'alá'l-"),
    ("an_al", "'an al-", "'ani'l-"),
    ("illa_al", "illá al-", "illá'l-"),
    ("huwa_al", "huwa al-", "huwa'l-"),
    ("anta_al", "anta al-", "anta'l-"),
];

fn arabic() -> Dictionary {
    Dictionary {
        metadata: metadata(Language::Arabic),
        common_words: words(&[
            ("الله", "Alláh", "divine_name"),
            ("يا", "yá", "particle"),
            ("إلهي", "Iláhí", "divine_term"),
            ("لا", "lá", "particle"),
            ("إله", "iláha", "divine_term"),
            ("إلا", "illá", "particle"),
        ]),
        vowel_patterns: [
            ("fatha_alif", "\u{064E}ا", "á"),
            ("kasra_ya", "\u{0650}ي", "í"),
            ("damma_waw", "\u{064F}و", "ú"),
        ]
        .into_iter()
        .map(|(k, p, t)| {
            (
                k.to_owned(),
                Pattern {
                    pattern: p.to_owned(),
                    transliteration: t.to_owned(),
                    notes: None,
                },
            )
        })
        .collect(),
        article_rules: rules(ARTICLE_RULES),
        ezafe_rules: rules(&[("zwnj", "\u{200C}", "-")]),
        heuristics: heuristics(),
        verbal_prefixes: affixes(&[
            ("و", "wa"),
            ("ب", "bi"),
            ("ل", "li"),
            ("ف", "fa"),
            ("ك", "ka"),
        ]),
        suffixes: affixes(&[("ك", "uka"), ("ه", "uhu"), ("ي", "í")]),
        ..Dictionary::default()
    }
}

fn persian() -> Dictionary {
    let mut article_rules = rules(ARTICLE_RULES);
    article_rules.insert("va_al".to_owned(), Rule::new("va al-", "va'l-", 5));
    Dictionary {
        metadata: metadata(Language::Persian),
        common_words: words(&[
            ("خدا", "Khudá", "divine_name"),
            ("از", "az", "preposition"),
            ("به", "bih", "preposition"),
            ("پروردگار", "Parvardigár", "divine_name"),
            ("من", "man", "pronoun"),
        ]),
        article_rules,
        ezafe_rules: rules(&[
            ("zwnj", "\u{200C}", "-"),
            ("mi_prefix", "mí ", "mí-"),
            ("final_kasra", "\u{0650}", "-i"),
        ]),
        heuristics: heuristics(),
        verbal_prefixes: affixes(&[
            ("می", "mí"),
            ("نمی", "namí"),
            ("ب", "bi"),
            ("ن", "na"),
        ]),
        suffixes: affixes(&[("ها", "há"), ("ان", "án")]),
        ..Dictionary::default()
    }
}
