// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content contracts for a site variant
//!
//! Several conventions the pages rely on have nothing enforcing them at
//! load time: the `"all"` selector must not collide with a category,
//! category keys are the English text, ids are unique, WhatsApp numbers
//! are bare international digits. Validation turns them into checked
//! errors. Missing copy keys and categories sharing an Arabic label are
//! only warnings: the resolver degrades to the key and filtering never
//! compares Arabic text.

use crate::catalog::ALL_SENTINEL;
use crate::i18n::LocalizedText;
use crate::types::{SiteContent, SECTION_ANCHORS};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("duplicate service id '{id}'")]
    DuplicateServiceId { id: String },
    #[error("duplicate package id '{id}'")]
    DuplicatePackageId { id: String },
    #[error("service '{id}' uses the reserved category key 'all'")]
    ReservedCategory { id: String },
    #[error("{field} has an empty translation")]
    BlankText { field: String },
    #[error("{field} price '{price}' is not numeric")]
    BadPrice { field: String, price: String },
    #[error("whatsapp number '{0}' must be international digits without '+' or '00'")]
    BadWhatsapp(String),
    #[error("instagram handle '{0}' is not a valid handle")]
    BadInstagram(String),
    #[error("phone number '{0}' contains characters other than digits, spaces, '+' or '-'")]
    BadPhone(String),
    #[error("navigation id '{0}' does not match any page section")]
    UnknownAnchor(String),
    #[error("navigation id '{0}' appears more than once")]
    DuplicateAnchor(String),
}

/// Outcome of validating one variant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

fn price_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("price regex"))
}

fn whatsapp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // E.164 allows at most 15 digits; a leading zero means a trunk or 00 prefix
    RE.get_or_init(|| Regex::new(r"^[1-9]\d{6,14}$").expect("whatsapp regex"))
}

fn instagram_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9._]{1,30}$").expect("instagram regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9][0-9 \-]*$").expect("phone regex"))
}

/// Check every contract on `site`.
pub fn validate(site: &SiteContent) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_nav(site, &mut report);
    check_services(site, &mut report);
    check_packages(site, &mut report);
    check_contact(site, &mut report);

    for (idx, entry) in site.working_hours.iter().enumerate() {
        check_text(&mut report, format!("working_hours[{idx}].day"), &entry.day);
        if let crate::types::Hours::Localized(text) = &entry.hours {
            check_text(&mut report, format!("working_hours[{idx}].hours"), text);
        }
    }
    for (key, text) in site.translations.iter() {
        check_text(&mut report, format!("translations.{key}"), text);
    }

    for key in site.translations.missing(crate::view::COPY_KEYS) {
        report
            .warnings
            .push(format!("translation key '{key}' missing; the key will be shown"));
    }
    if site.gallery.is_empty() {
        report.warnings.push("gallery has no images".to_string());
    }
    if site.map_embed.trim().is_empty() {
        report.warnings.push("no map embed URL configured".to_string());
    }

    for warning in &report.warnings {
        tracing::warn!(site = %site.id, "{warning}");
    }
    report
}

fn check_text(report: &mut ValidationReport, field: String, text: &LocalizedText) {
    if text.has_blank() {
        report.errors.push(ValidationError::BlankText { field });
    }
}

fn check_nav(site: &SiteContent, report: &mut ValidationReport) {
    let mut seen = HashSet::new();
    for item in &site.nav {
        if !SECTION_ANCHORS.contains(&item.id.as_str()) {
            report
                .errors
                .push(ValidationError::UnknownAnchor(item.id.clone()));
        }
        if !seen.insert(item.id.as_str()) {
            report
                .errors
                .push(ValidationError::DuplicateAnchor(item.id.clone()));
        }
        check_text(report, format!("nav.{}.label", item.id), &item.label);
    }
}

fn check_services(site: &SiteContent, report: &mut ValidationReport) {
    let mut ids = HashSet::new();
    // Arabic label -> canonical key, to catch two keys rendered identically
    let mut labels: Vec<(&str, &str)> = Vec::new();
    let mut clashes: HashSet<(&str, &str)> = HashSet::new();

    for service in &site.services {
        if !ids.insert(service.id.as_str()) {
            report.errors.push(ValidationError::DuplicateServiceId {
                id: service.id.clone(),
            });
        }
        if service.category.en == ALL_SENTINEL {
            report.errors.push(ValidationError::ReservedCategory {
                id: service.id.clone(),
            });
        }
        match labels.iter().find(|(ar, _)| *ar == service.category.ar) {
            Some(&(ar, key)) if key != service.category_key() => {
                if clashes.insert((key, service.category_key())) {
                    report.warnings.push(format!(
                        "categories '{key}' and '{}' share the Arabic label '{ar}'",
                        service.category_key()
                    ));
                }
            }
            Some(_) => {}
            None => labels.push((service.category.ar.as_str(), service.category_key())),
        }
        if !price_re().is_match(&service.price) {
            report.errors.push(ValidationError::BadPrice {
                field: format!("service '{}'", service.id),
                price: service.price.clone(),
            });
        }
        let prefix = format!("services.{}", service.id);
        check_text(report, format!("{prefix}.category"), &service.category);
        check_text(report, format!("{prefix}.name"), &service.name);
        check_text(report, format!("{prefix}.duration"), &service.duration);
    }
}

fn check_packages(site: &SiteContent, report: &mut ValidationReport) {
    let mut ids = HashSet::new();
    for package in &site.packages {
        if !ids.insert(package.id.as_str()) {
            report.errors.push(ValidationError::DuplicatePackageId {
                id: package.id.clone(),
            });
        }
        if !price_re().is_match(&package.price) {
            report.errors.push(ValidationError::BadPrice {
                field: format!("package '{}'", package.id),
                price: package.price.clone(),
            });
        }
        let prefix = format!("packages.{}", package.id);
        check_text(report, format!("{prefix}.name"), &package.name);
        check_text(report, format!("{prefix}.duration"), &package.duration);
        check_text(report, format!("{prefix}.description"), &package.description);
    }
}

fn check_contact(site: &SiteContent, report: &mut ValidationReport) {
    let contact = &site.contact;
    if !whatsapp_re().is_match(&contact.whatsapp) {
        report
            .errors
            .push(ValidationError::BadWhatsapp(contact.whatsapp.clone()));
    }
    if !instagram_re().is_match(&contact.instagram) {
        report
            .errors
            .push(ValidationError::BadInstagram(contact.instagram.clone()));
    }
    if !phone_re().is_match(&contact.phone) {
        report
            .errors
            .push(ValidationError::BadPhone(contact.phone.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{builtin, DEFAULT_VARIANT};

    fn site() -> SiteContent {
        builtin(DEFAULT_VARIANT).expect("built-in variant")
    }

    #[test]
    fn builtin_variant_is_clean() {
        let report = validate(&site());
        assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);
    }

    #[test]
    fn reserved_all_category_rejected() {
        let mut site = site();
        site.services[0].category = LocalizedText::new("all", "الكل");
        let report = validate(&site);
        assert!(report
            .errors
            .contains(&ValidationError::ReservedCategory { id: "s1".into() }));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut site = site();
        site.services[1].id = "s1".into();
        site.packages[2].id = "p1".into();
        let report = validate(&site);
        assert!(report
            .errors
            .contains(&ValidationError::DuplicateServiceId { id: "s1".into() }));
        assert!(report
            .errors
            .contains(&ValidationError::DuplicatePackageId { id: "p1".into() }));
    }

    #[test]
    fn shared_arabic_label_warns_once() {
        let mut site = site();
        // s6 "Body Care" relabelled to the Arabic text of "Care"
        site.services[5].category.ar = "عناية".into();
        let mut extra = site.services[5].clone();
        extra.id = "s7".into();
        site.services.push(extra);

        let report = validate(&site);
        assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
        let clashes: Vec<&String> = report
            .warnings
            .iter()
            .filter(|w| w.contains("share the Arabic label"))
            .collect();
        assert_eq!(clashes.len(), 1, "{clashes:?}");
        assert!(clashes[0].contains("'Care'") && clashes[0].contains("'Body Care'"));
    }

    #[test]
    fn whatsapp_prefixes_rejected() {
        for bad in ["+966547738385", "00966547738385", "966 547 738", "0547738385", ""] {
            let mut site = site();
            site.contact.whatsapp = bad.to_string();
            let report = validate(&site);
            assert!(
                report.errors.contains(&ValidationError::BadWhatsapp(bad.into())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn bad_price_and_blank_text_rejected() {
        let mut site = site();
        site.packages[0].price = "four hundred".into();
        site.nav[0].label.ar = "  ".into();
        let report = validate(&site);
        assert!(report.errors.iter().any(|e| matches!(e, ValidationError::BadPrice { .. })));
        assert!(report
            .errors
            .contains(&ValidationError::BlankText { field: "nav.home.label".into() }));
    }

    #[test]
    fn nav_must_point_at_sections() {
        let mut site = site();
        site.nav[1].id = "team".into();
        site.nav[2].id = "home".into();
        let report = validate(&site);
        assert!(report.errors.contains(&ValidationError::UnknownAnchor("team".into())));
        assert!(report.errors.contains(&ValidationError::DuplicateAnchor("home".into())));
    }

    #[test]
    fn missing_copy_is_only_a_warning() {
        let mut site = site();
        site.translations = crate::i18n::TranslationTable::new();
        let report = validate(&site);
        assert!(report.is_ok());
        assert!(report.warnings.iter().any(|w| w.contains("heroTitle")));
    }
}
