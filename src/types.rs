// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core content types for a site variant
//!
//! Everything here is read-only after load. The only mutable state in the
//! crate lives in [`crate::ui::UiState`].

use crate::i18n::{Lang, LocalizedText, TranslationTable};
use serde::{Deserialize, Serialize};

/// In-page section anchors a navigation item may point at.
pub const SECTION_ANCHORS: &[&str] = &[
    "home", "about", "services", "packages", "gallery", "contact",
];

/// A navigation entry; `id` doubles as the `#fragment` of its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: LocalizedText,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// A bookable treatment in the service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    /// `category.en` is the canonical grouping key; `category.ar` is display only.
    pub category: LocalizedText,
    pub name: LocalizedText,
    pub price: String,
    pub duration: LocalizedText,
    pub image: String,
}

impl Service {
    pub fn category_key(&self) -> &str {
        &self.category.en
    }
}

/// A bundle of treatments sold at one price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: LocalizedText,
    pub price: String,
    pub duration: LocalizedText,
    pub description: LocalizedText,
}

/// Opening hours for one day.
///
/// A time range reads the same in both languages and is stored once; values
/// that need translating ("Closed") carry both languages. In YAML/JSON the
/// first is a bare string and the second an `{en, ar}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hours {
    Plain(String),
    Localized(LocalizedText),
}

impl Hours {
    pub fn display(&self, lang: Lang) -> &str {
        match self {
            Hours::Plain(value) => value,
            Hours::Localized(text) => text.get(lang),
        }
    }

    /// Localized values are the exceptions (closures, holidays) and get
    /// highlighted when shown.
    pub fn is_localized(&self) -> bool {
        matches!(self, Hours::Localized(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursEntry {
    pub day: LocalizedText,
    pub hours: Hours,
}

/// Language-independent contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    /// International digits only, no `+` or `00` prefix.
    pub whatsapp: String,
    pub instagram: String,
    pub email: String,
}

/// One complete site variant: copy, imagery and catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub about_image: String,
    /// Pre-generated third-party map embed URL, passed through untouched.
    #[serde(default)]
    pub map_embed: String,
    pub nav: Vec<NavItem>,
    pub services: Vec<Service>,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub contact: ContactInfo,
    #[serde(default)]
    pub working_hours: Vec<WorkingHoursEntry>,
    #[serde(default)]
    pub translations: TranslationTable,
}

impl SiteContent {
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn nav_ids(&self) -> Vec<&str> {
        self.nav.iter().map(|item| item.id.as_str()).collect()
    }

    /// Shorthand for resolving a copy key against this variant's table.
    pub fn t<'a>(&'a self, key: &'a str, lang: Lang) -> &'a str {
        self.translations.resolve(key, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_deserialize_from_both_shapes() {
        let plain: Hours = serde_json::from_str(r#""2–10 PM""#).unwrap();
        assert_eq!(plain, Hours::Plain("2–10 PM".into()));
        assert_eq!(plain.display(Lang::Ar), "2–10 PM");

        let closed: Hours = serde_json::from_str(r#"{"en":"Closed","ar":"مغلق"}"#).unwrap();
        assert!(closed.is_localized());
        assert_eq!(closed.display(Lang::En), "Closed");
        assert_eq!(closed.display(Lang::Ar), "مغلق");
    }

    #[test]
    fn nav_href_is_fragment() {
        let item = NavItem {
            id: "gallery".into(),
            label: LocalizedText::new("Gallery", "المعرض"),
        };
        assert_eq!(item.href(), "#gallery");
    }
}
