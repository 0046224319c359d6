// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resolved page view
//!
//! [`PageView::build`] turns a variant plus a [`UiState`] into every string,
//! link and flag a renderer needs, with no further lookups required. The
//! view is rebuilt after each transition; it is never mutated.

use crate::catalog::{categories, category_label, filter_by_category, CategorySelector};
use crate::i18n::{Lang, LayoutHints};
use crate::links::{BookingTarget, ContactLinks};
use crate::types::SiteContent;
use crate::ui::UiState;
use serde::Serialize;

/// Copy keys the page view resolves. A variant lacking one still renders,
/// showing the key instead.
pub const COPY_KEYS: &[&str] = &[
    "heroBadge",
    "heroTitle",
    "heroSubtitle",
    "bookNow",
    "viewServices",
    "aboutTitle",
    "aboutHeadline",
    "aboutDesc",
    "yearsOfLuxury",
    "missionTitle",
    "missionDesc",
    "valuesTitle",
    "valuesDesc",
    "servicesTitle",
    "servicesHeadline",
    "allServices",
    "currency",
    "includesTax",
    "packagesTitle",
    "packagesHeadline",
    "packagesDesc",
    "packagesQuote",
    "galleryTitle",
    "galleryHeadline",
    "contactTitle",
    "contactHeadline",
    "ourLocation",
    "whatsapp",
    "workingHours",
    "footerDesc",
    "discover",
    "newsletter",
    "newsletterDesc",
    "emailPlaceholder",
    "privacy",
    "terms",
    "copyright",
    "switchLanguage",
    "languageToggle",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub site: String,
    pub lang: Lang,
    pub layout: LayoutHints,
    pub menu_open: bool,
    pub scrolled: bool,
    pub nav: NavBar,
    pub hero: Hero,
    pub about: About,
    pub services: ServicesSection,
    pub packages: PackagesSection,
    pub gallery: Gallery,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavBar {
    pub logo: String,
    pub items: Vec<NavLink>,
    /// Label on the language toggle: the *other* language's name.
    pub language_toggle: String,
    pub switch_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub id: String,
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub image: String,
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub book_label: String,
    pub book_href: String,
    pub explore_label: String,
    pub explore_href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct About {
    pub image: String,
    pub title: String,
    pub headline: String,
    pub description: String,
    pub years_label: String,
    pub mission_title: String,
    pub mission: String,
    pub values_title: String,
    pub values: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesSection {
    pub title: String,
    pub headline: String,
    pub categories: Vec<CategoryChip>,
    pub cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    pub selector: CategorySelector,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub id: String,
    pub category: String,
    pub name: String,
    pub price: String,
    pub price_note: String,
    pub duration: String,
    pub image: String,
    pub book_label: String,
    pub book_href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackagesSection {
    pub title: String,
    pub headline: String,
    pub description: String,
    pub quote: String,
    pub cards: Vec<PackageCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub duration: String,
    pub description: String,
    /// First package is shown highlighted.
    pub featured: bool,
    pub book_label: String,
    pub book_href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gallery {
    pub title: String,
    pub headline: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub title: String,
    pub headline: String,
    pub location_label: String,
    pub address: String,
    pub whatsapp_label: String,
    pub phone: String,
    pub hours_title: String,
    pub hours: Vec<HoursRow>,
    pub map_embed: String,
    pub links: ContactLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoursRow {
    pub day: String,
    pub hours: String,
    /// Translated values (closures) are emphasised.
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footer {
    pub tagline: String,
    pub discover_title: String,
    pub links: Vec<NavLink>,
    pub newsletter_title: String,
    pub newsletter: String,
    pub email_placeholder: String,
    pub privacy: String,
    pub terms: String,
    pub copyright: String,
}

impl PageView {
    pub fn build(site: &SiteContent, state: &UiState) -> Self {
        let lang = state.lang;
        let t = |key: &'static str| site.t(key, lang).to_string();
        let book_label = t("bookNow");

        let nav_links: Vec<NavLink> = site
            .nav
            .iter()
            .map(|item| NavLink {
                id: item.id.clone(),
                href: item.href(),
                label: item.label.get(lang).to_string(),
            })
            .collect();

        let all_label = site.t("allServices", lang);
        let categories = categories(&site.services)
            .into_iter()
            .map(|selector| CategoryChip {
                label: category_label(&site.services, &selector, lang, all_label).to_string(),
                active: selector == state.active_category,
                selector,
            })
            .collect();

        let price_note = t("includesTax");
        let currency = t("currency");
        let service_cards = filter_by_category(&site.services, &state.active_category)
            .into_iter()
            .map(|service| ServiceCard {
                id: service.id.clone(),
                category: service.category.get(lang).to_string(),
                name: service.name.get(lang).to_string(),
                price: format!("{currency} {}", service.price),
                price_note: price_note.clone(),
                duration: service.duration.get(lang).to_string(),
                image: service.image.clone(),
                book_label: book_label.clone(),
                book_href: BookingTarget::Service(service).link(&site.contact),
            })
            .collect();

        let package_cards = site
            .packages
            .iter()
            .enumerate()
            .map(|(idx, package)| PackageCard {
                id: package.id.clone(),
                name: package.name.get(lang).to_string(),
                price: format!("{currency} {}", package.price),
                duration: package.duration.get(lang).to_string(),
                description: package.description.get(lang).to_string(),
                featured: idx == 0,
                book_label: book_label.clone(),
                book_href: BookingTarget::Package(package).link(&site.contact),
            })
            .collect();

        let hours = site
            .working_hours
            .iter()
            .map(|entry| HoursRow {
                day: entry.day.get(lang).to_string(),
                hours: entry.hours.display(lang).to_string(),
                highlight: entry.hours.is_localized(),
            })
            .collect();

        let links = ContactLinks::from_contact(&site.contact);

        PageView {
            site: site.id.clone(),
            lang,
            layout: state.direction().layout(),
            menu_open: state.menu_open,
            scrolled: state.scrolled,
            nav: NavBar {
                logo: site.logo.clone(),
                items: nav_links.clone(),
                language_toggle: t("languageToggle"),
                switch_language: t("switchLanguage"),
            },
            hero: Hero {
                image: site.hero_image.clone(),
                badge: t("heroBadge"),
                title: t("heroTitle"),
                subtitle: t("heroSubtitle"),
                book_label: book_label.clone(),
                book_href: links.whatsapp.clone(),
                explore_label: t("viewServices"),
                explore_href: "#services".to_string(),
            },
            about: About {
                image: site.about_image.clone(),
                title: t("aboutTitle"),
                headline: t("aboutHeadline"),
                description: t("aboutDesc"),
                years_label: t("yearsOfLuxury"),
                mission_title: t("missionTitle"),
                mission: t("missionDesc"),
                values_title: t("valuesTitle"),
                values: t("valuesDesc"),
            },
            services: ServicesSection {
                title: t("servicesTitle"),
                headline: t("servicesHeadline"),
                categories,
                cards: service_cards,
            },
            packages: PackagesSection {
                title: t("packagesTitle"),
                headline: t("packagesHeadline"),
                description: t("packagesDesc"),
                quote: t("packagesQuote"),
                cards: package_cards,
            },
            gallery: Gallery {
                title: t("galleryTitle"),
                headline: t("galleryHeadline"),
                images: site.gallery.clone(),
            },
            contact: Contact {
                title: t("contactTitle"),
                headline: t("contactHeadline"),
                location_label: t("ourLocation"),
                address: site.contact.address.clone(),
                whatsapp_label: t("whatsapp"),
                phone: site.contact.phone.clone(),
                hours_title: t("workingHours"),
                hours,
                map_embed: site.map_embed.clone(),
                links,
            },
            footer: Footer {
                tagline: t("footerDesc"),
                discover_title: t("discover"),
                links: nav_links,
                newsletter_title: t("newsletter"),
                newsletter: t("newsletterDesc"),
                email_placeholder: t("emailPlaceholder"),
                privacy: t("privacy"),
                terms: t("terms"),
                copyright: t("copyright"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{builtin, DEFAULT_VARIANT};
    use crate::i18n::{Direction, Edge};
    use crate::ui::UiAction;

    fn site() -> SiteContent {
        builtin(DEFAULT_VARIANT).unwrap()
    }

    #[test]
    fn default_state_shows_everything_in_english() {
        let view = PageView::build(&site(), &UiState::default());
        assert_eq!(view.layout.dir, Direction::Ltr);
        assert_eq!(view.hero.title, "Elevate Your Inner Radiance");
        assert_eq!(view.services.cards.len(), 6);
        assert_eq!(view.nav.language_toggle, "العربية");
        let labels: Vec<&str> = view.services.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["All Services", "Care", "Nails", "Lashes", "Body Care"]);
        assert!(view.services.categories[0].active);
    }

    #[test]
    fn arabic_view_mirrors_layout_and_text() {
        let view = PageView::build(&site(), &UiState::new(Lang::Ar));
        assert_eq!(view.layout.dir, Direction::Rtl);
        assert_eq!(view.layout.drawer_edge, Edge::Left);
        assert_eq!(view.hero.book_label, "احجزِ موعداً");
        assert_eq!(view.nav.items[0].label, "الرئيسية");
        assert_eq!(view.services.categories[0].label, "جميع الخدمات");
        assert_eq!(view.services.categories[1].label, "عناية");
        // booking messages stay English
        assert!(view.services.cards[0].book_href.ends_with("Hand%20Paraffin"));
    }

    #[test]
    fn active_category_filters_cards() {
        let mut state = UiState::default();
        state.apply(UiAction::SelectCategory(CategorySelector::parse("Nails")));
        let view = PageView::build(&site(), &state);
        let ids: Vec<&str> = view.services.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["s3", "s5"]);
        let active: Vec<&str> = view
            .services
            .categories
            .iter()
            .filter(|c| c.active)
            .map(|c| c.selector.as_str())
            .collect();
        assert_eq!(active, vec!["Nails"]);
    }

    #[test]
    fn hours_branch_on_shape() {
        let view = PageView::build(&site(), &UiState::new(Lang::Ar));
        let friday = &view.contact.hours[2];
        assert_eq!(friday.hours, "مغلق");
        assert!(friday.highlight);
        assert_eq!(view.contact.hours[0].hours, "2–10 PM");
        assert!(!view.contact.hours[0].highlight);
    }

    #[test]
    fn double_toggle_restores_view() {
        let site = site();
        let mut state = UiState::default();
        let original = PageView::build(&site, &state);
        state.apply(UiAction::ToggleLanguage);
        assert_ne!(PageView::build(&site, &state), original);
        state.apply(UiAction::ToggleLanguage);
        assert_eq!(PageView::build(&site, &state), original);
    }

    #[test]
    fn first_package_is_featured() {
        let view = PageView::build(&site(), &UiState::default());
        let featured: Vec<bool> = view.packages.cards.iter().map(|p| p.featured).collect();
        assert_eq!(featured, vec![true, false, false]);
        assert_eq!(view.packages.cards[0].price, "SAR 400");
    }
}
