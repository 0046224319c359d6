// SPDX-License-Identifier: PMPL-1.0-or-later

//! Service catalog filtering
//!
//! Services are grouped by their canonical category key, the English
//! category text. Arabic category text is for display and never compared.
//! The reserved selector `"all"` disables filtering.

use crate::i18n::Lang;
use crate::types::Service;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector string meaning "no filter applied". No category may use it.
pub const ALL_SENTINEL: &str = "all";

/// Active filter of the service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelector {
    #[default]
    All,
    Category(String),
}

impl CategorySelector {
    pub fn parse(value: &str) -> Self {
        Self::from(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelector::All => ALL_SENTINEL,
            CategorySelector::Category(key) => key,
        }
    }

    pub fn matches(&self, service: &Service) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Category(key) => service.category_key() == key,
        }
    }
}

impl From<String> for CategorySelector {
    fn from(value: String) -> Self {
        if value == ALL_SENTINEL {
            CategorySelector::All
        } else {
            CategorySelector::Category(value)
        }
    }
}

impl From<CategorySelector> for String {
    fn from(selector: CategorySelector) -> Self {
        match selector {
            CategorySelector::All => ALL_SENTINEL.to_string(),
            CategorySelector::Category(key) => key,
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Services matching `selector`, in catalog order. May be empty.
pub fn filter_by_category<'a>(
    items: &'a [Service],
    selector: &CategorySelector,
) -> Vec<&'a Service> {
    items.iter().filter(|s| selector.matches(s)).collect()
}

/// Selector chips for the catalog: `all` followed by each category key in
/// first-seen order.
pub fn categories(items: &[Service]) -> Vec<CategorySelector> {
    let mut seen: Vec<&str> = Vec::new();
    for service in items {
        let key = service.category_key();
        if !seen.contains(&key) {
            seen.push(key);
        }
    }
    std::iter::once(CategorySelector::All)
        .chain(seen.into_iter().map(|k| CategorySelector::Category(k.to_string())))
        .collect()
}

/// Chip label for a selector.
///
/// `all_label` is the already-localized "All Services" text. A category
/// shows the localized text of the first service carrying it, or the
/// canonical key if no service does.
pub fn category_label<'a>(
    items: &'a [Service],
    selector: &'a CategorySelector,
    lang: Lang,
    all_label: &'a str,
) -> &'a str {
    match selector {
        CategorySelector::All => all_label,
        CategorySelector::Category(key) => items
            .iter()
            .find(|s| s.category_key() == key)
            .map(|s| s.category.get(lang))
            .unwrap_or(key.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalizedText;

    fn service(id: &str, en: &str, ar: &str) -> Service {
        Service {
            id: id.to_string(),
            category: LocalizedText::new(en, ar),
            name: LocalizedText::new(format!("{id} name"), format!("{id} اسم")),
            price: "100".to_string(),
            duration: LocalizedText::new("60 Min", "٦٠ دقيقة"),
            image: String::new(),
        }
    }

    fn sample() -> Vec<Service> {
        vec![
            service("s1", "Care", "عناية"),
            service("s2", "Nails", "الأظافر"),
            service("s3", "Care", "عناية"),
        ]
    }

    fn ids(items: &[&Service]) -> Vec<String> {
        items.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn all_returns_everything_in_order() {
        let items = sample();
        let filtered = filter_by_category(&items, &CategorySelector::All);
        assert_eq!(ids(&filtered), vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn category_filter_keeps_order() {
        let items = sample();
        let care = filter_by_category(&items, &CategorySelector::parse("Care"));
        assert_eq!(ids(&care), vec!["s1", "s3"]);
    }

    #[test]
    fn unknown_category_is_empty_not_error() {
        let items = sample();
        assert!(filter_by_category(&items, &CategorySelector::parse("Hair")).is_empty());
        assert!(filter_by_category(&[], &CategorySelector::All).is_empty());
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let items = sample();
        for selector in categories(&items).iter().skip(1) {
            let kept = filter_by_category(&items, selector);
            assert!(kept.iter().all(|s| s.category.en == selector.as_str()));
            let expected = items.iter().filter(|s| s.category.en == selector.as_str()).count();
            assert_eq!(kept.len(), expected);
        }
    }

    #[test]
    fn arabic_text_is_never_a_key() {
        let items = sample();
        assert!(filter_by_category(&items, &CategorySelector::parse("عناية")).is_empty());
    }

    #[test]
    fn categories_first_seen_without_duplicates() {
        let names: Vec<String> = categories(&sample()).iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["all", "Care", "Nails"]);
        assert_eq!(categories(&[]), vec![CategorySelector::All]);
    }

    #[test]
    fn sentinel_parses_to_all() {
        assert_eq!(CategorySelector::parse("all"), CategorySelector::All);
        assert_eq!(CategorySelector::from("all".to_string()), CategorySelector::All);
        assert_eq!(
            CategorySelector::parse("All"),
            CategorySelector::Category("All".into())
        );
    }

    #[test]
    fn labels_localize_categories() {
        let items = sample();
        let nails = CategorySelector::parse("Nails");
        assert_eq!(category_label(&items, &nails, Lang::Ar, "x"), "الأظافر");
        assert_eq!(category_label(&items, &nails, Lang::En, "x"), "Nails");
        let all = CategorySelector::All;
        assert_eq!(category_label(&items, &all, Lang::Ar, "جميع الخدمات"), "جميع الخدمات");
        let hair = CategorySelector::parse("Hair");
        assert_eq!(category_label(&items, &hair, Lang::En, "x"), "Hair");
    }

    #[test]
    fn selector_serializes_as_string() {
        let json = serde_json::to_string(&CategorySelector::parse("Care")).unwrap();
        assert_eq!(json, r#""Care""#);
        let back: CategorySelector = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(back, CategorySelector::All);
    }

    #[test]
    fn parse_and_from_string_agree() {
        for raw in ["all", "All", "Care", "", " all"] {
            assert_eq!(CategorySelector::parse(raw), CategorySelector::from(raw.to_string()));
        }
        assert_eq!(CategorySelector::parse("all"), CategorySelector::All);
        assert_eq!(
            CategorySelector::parse("All"),
            CategorySelector::Category("All".to_string())
        );
    }
}
