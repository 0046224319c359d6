// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable rendering of page views

use crate::view::{CategoryChip, Contact, HoursRow, PackagesSection, PageView, ServicesSection};
use colored::*;
use std::fmt::Write;

pub struct SiteFormatter {
    color: bool,
}

impl SiteFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Formatter without ANSI styling, for files.
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn banner(&self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().yellow().to_string()
        } else {
            text.to_uppercase()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn accent(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn page(&self, view: &PageView) -> String {
        let mut out = String::new();
        let title = format!(
            "=== {} [{} / {}] ===",
            view.site.to_uppercase(),
            view.lang,
            view.layout.dir.as_attr()
        );
        let _ = writeln!(out, "{}", self.banner(&title));
        let nav: Vec<&str> = view.nav.items.iter().map(|i| i.label.as_str()).collect();
        let _ = writeln!(out, "  {}  |  {}", nav.join("  "), view.nav.language_toggle);
        if view.menu_open {
            let drawer = format!("menu open, drawer on the {:?} edge", view.layout.drawer_edge);
            let _ = writeln!(out, "  {}", self.dim(&drawer.to_lowercase()));
        }
        out.push('\n');

        let _ = writeln!(out, "{}", self.heading(&view.hero.title));
        let _ = writeln!(out, "  {}", view.hero.badge);
        let _ = writeln!(out, "  {}", view.hero.subtitle);
        let _ = writeln!(out, "  [{}] {}", view.hero.book_label, self.dim(&view.hero.book_href));
        out.push('\n');

        let _ = writeln!(out, "{}", self.heading(&view.about.title));
        let _ = writeln!(out, "  {}", view.about.headline);
        let _ = writeln!(out, "  {}", view.about.description);
        let _ = writeln!(out, "  {}: {}", view.about.mission_title, view.about.mission);
        let _ = writeln!(out, "  {}: {}", view.about.values_title, view.about.values);
        out.push('\n');

        out.push_str(&self.services(&view.services));
        out.push('\n');
        out.push_str(&self.packages(&view.packages));
        out.push('\n');

        let _ = writeln!(out, "{}", self.heading(&view.gallery.title));
        let _ = writeln!(out, "  {} ({})", view.gallery.headline, view.gallery.images.len());
        out.push('\n');

        out.push_str(&self.contact(&view.contact));
        out.push('\n');

        let _ = writeln!(out, "  \"{}\"", view.footer.tagline);
        let _ = writeln!(out, "  {}", self.dim(&view.footer.copyright));
        out
    }

    pub fn categories(&self, chips: &[CategoryChip]) -> String {
        chips
            .iter()
            .map(|chip| {
                let label = format!("{} ({})", chip.label, chip.selector);
                if chip.active {
                    format!("[{}]", self.accent(&label))
                } else {
                    format!(" {label} ")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn services(&self, section: &ServicesSection) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading(&section.title));
        let _ = writeln!(out, "  {}", section.headline);
        let _ = writeln!(out, "  {}", self.categories(&section.categories));
        if section.cards.is_empty() {
            let _ = writeln!(out, "  {}", self.dim("(no services in this category)"));
        }
        for card in &section.cards {
            let _ = writeln!(
                out,
                "  {:<4} {:<36} {:>10}  {:<12} {}",
                card.id,
                card.name,
                card.price,
                card.duration,
                self.dim(&card.category)
            );
        }
        out
    }

    pub fn packages(&self, section: &PackagesSection) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading(&section.title));
        let _ = writeln!(out, "  {}", section.headline);
        for card in &section.cards {
            let marker = if card.featured { "*" } else { " " };
            let _ = writeln!(
                out,
                " {marker}{:<4} {:<28} {:>10}  {}",
                card.id, card.name, card.price, card.duration
            );
            let _ = writeln!(out, "        {}", self.dim(&card.description));
        }
        out
    }

    pub fn hours(&self, title: &str, rows: &[HoursRow]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading(title));
        for row in rows {
            let hours = if row.highlight {
                self.accent(&row.hours)
            } else {
                row.hours.clone()
            };
            let _ = writeln!(out, "  {:<12} {}", row.day, hours);
        }
        out
    }

    pub fn contact(&self, contact: &Contact) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading(&contact.title));
        let _ = writeln!(out, "  {}: {}", contact.location_label, contact.address);
        let _ = writeln!(out, "  {}: {}", contact.whatsapp_label, contact.phone);
        let _ = writeln!(out, "  {}", self.dim(&contact.links.phone));
        let _ = writeln!(out, "  {}", self.dim(&contact.links.whatsapp));
        let _ = writeln!(out, "  {}", self.dim(&contact.links.instagram));
        let _ = writeln!(out, "  {}", self.dim(&contact.links.email));
        out.push_str(&self.hours(&contact.hours_title, &contact.hours));
        out
    }
}

impl Default for SiteFormatter {
    fn default() -> Self {
        Self::new()
    }
}
