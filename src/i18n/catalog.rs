// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language enum, bilingual text and the translation table.
//!
//! Lookup is a `BTreeMap` probe; the table holds a few dozen keys and is
//! loaded once with the site variant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Supported site languages.
///
/// Closed on purpose: consumers may match exhaustively and must not assume
/// a third language exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Parse an exact lowercase code. Returns `None` for anything else;
    /// use [`crate::i18n::parse_tag`] for user input.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Ar]
    }

    /// The other language. Applying it twice is the identity.
    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::Ar,
            Lang::Ar => Lang::En,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = super::LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_tag(s)
    }
}

/// One string per supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Ar => &self.ar,
        }
    }

    /// True when either language is blank.
    pub fn has_blank(&self) -> bool {
        self.en.trim().is_empty() || self.ar.trim().is_empty()
    }
}

/// Opaque key to bilingual text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: BTreeMap<String, LocalizedText>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: LocalizedText) {
        self.entries.insert(key.into(), text);
    }

    pub fn get(&self, key: &str) -> Option<&LocalizedText> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocalizedText)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Localized string for `key`, or `key` itself when the table lacks it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lalie_site::i18n::{Lang, LocalizedText, TranslationTable};
    /// let mut table = TranslationTable::new();
    /// table.insert("bookNow", LocalizedText::new("Book Appointment", "احجزِ موعداً"));
    /// assert_eq!(table.resolve("bookNow", Lang::Ar), "احجزِ موعداً");
    /// assert_eq!(table.resolve("missingKey", Lang::En), "missingKey");
    /// ```
    pub fn resolve<'a>(&'a self, key: &'a str, lang: Lang) -> &'a str {
        match self.entries.get(key) {
            Some(text) => text.get(lang),
            None => key,
        }
    }

    /// Keys from `wanted` the table has no entry for, in the order given.
    pub fn missing<'k>(&self, wanted: &[&'k str]) -> Vec<&'k str> {
        wanted
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }
}

impl FromIterator<(String, LocalizedText)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (String, LocalizedText)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Resolve `key` in `table` for `lang`, degrading to the key when absent.
pub fn resolve<'a>(table: &'a TranslationTable, key: &'a str, lang: Lang) -> &'a str {
    table.resolve(key, lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationTable {
        let mut table = TranslationTable::new();
        table.insert("bookNow", LocalizedText::new("Book Appointment", "احجزِ موعداً"));
        table.insert("aboutTitle", LocalizedText::new("Our Story", "قصتنا"));
        table
    }

    #[test]
    fn present_keys_resolve_per_language() {
        let table = sample();
        for (key, text) in table.iter() {
            for lang in Lang::all() {
                assert_eq!(resolve(&table, key, *lang), text.get(*lang));
            }
        }
    }

    #[test]
    fn book_now_in_arabic() {
        assert_eq!(resolve(&sample(), "bookNow", Lang::Ar), "احجزِ موعداً");
    }

    #[test]
    fn missing_key_returns_key() {
        let table = sample();
        for lang in Lang::all() {
            assert_eq!(resolve(&table, "missingKey", *lang), "missingKey");
        }
        assert_eq!(resolve(&TranslationTable::new(), "", Lang::En), "");
    }

    #[test]
    fn missing_lists_absent_keys_in_order() {
        let table = sample();
        assert_eq!(
            table.missing(&["zeta", "bookNow", "alpha"]),
            vec!["zeta", "alpha"]
        );
    }

    #[test]
    fn toggle_is_an_involution() {
        for lang in Lang::all() {
            assert_ne!(lang.toggled(), *lang);
            assert_eq!(lang.toggled().toggled(), *lang);
        }
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
        assert_eq!(Lang::from_code("AR"), None);
    }

    #[test]
    fn table_deserializes_from_plain_map() {
        let table: TranslationTable =
            serde_json::from_str(r#"{"heroTitle":{"en":"Hi","ar":"مرحبا"}}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("heroTitle", Lang::Ar), "مرحبا");
    }
}
