// SPDX-License-Identifier: PMPL-1.0-or-later

//! `lalie doctor`: a check list over one site variant

use crate::catalog::categories;
use crate::content::validate;
use crate::i18n::{language_name, Lang};
use crate::types::{SiteContent, SECTION_ANCHORS};
use crate::view::COPY_KEYS;
use anyhow::{anyhow, Result};
use colored::*;
use std::env;

pub const LOG_ENV: &str = "LALIE_LOG";

/// Print every check for `site` and fail if any is an error.
pub fn run_doctor(site: &SiteContent, source: &str) -> Result<()> {
    println!("lalie-site doctor");
    println!();

    let checks = collect(site, source);
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("doctor reported issues"))
    } else {
        Ok(())
    }
}

pub fn collect(site: &SiteContent, source: &str) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("lalie-site {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(Diagnostic::ok(
        "site variant",
        format!("{} ({}) from {}", site.name, site.id, source),
    ));
    let languages: Vec<&str> = Lang::all()
        .iter()
        .filter_map(|lang| language_name(lang.code()))
        .collect();
    checks.push(Diagnostic::ok("languages", languages.join(", ")));
    checks.push(Diagnostic::ok(
        "catalog",
        format!(
            "{} services in {} categories, {} packages",
            site.services.len(),
            categories(&site.services).len() - 1,
            site.packages.len()
        ),
    ));

    let report = validate(site);
    if report.errors.is_empty() {
        checks.push(Diagnostic::ok("content contracts", "all hold".to_string()));
    }
    for error in &report.errors {
        checks.push(Diagnostic::error("content contracts", error.to_string()));
    }

    let missing = site.translations.missing(COPY_KEYS);
    if missing.is_empty() {
        checks.push(Diagnostic::ok(
            "copy coverage",
            format!("{}/{} keys translated", COPY_KEYS.len(), COPY_KEYS.len()),
        ));
    } else {
        checks.push(Diagnostic::warning(
            "copy coverage",
            format!(
                "{}/{} keys translated; missing: {}",
                COPY_KEYS.len() - missing.len(),
                COPY_KEYS.len(),
                missing.join(", ")
            ),
        ));
    }

    checks.push(check_anchors(site));
    for warning in report
        .warnings
        .iter()
        .filter(|w| !w.starts_with("translation key"))
    {
        checks.push(Diagnostic::warning("content", warning.clone()));
    }
    checks.push(check_env("log level", LOG_ENV));
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:20} {}", self.level.tag(), self.label, self.detail);
    }
}

/// Sections the page always renders but no navigation item reaches.
fn check_anchors(site: &SiteContent) -> Diagnostic {
    let ids = site.nav_ids();
    let unreachable: Vec<&str> = SECTION_ANCHORS
        .iter()
        .copied()
        // packages is optional in the navigation bar
        .filter(|anchor| *anchor != "packages" && !ids.contains(anchor))
        .collect();
    if unreachable.is_empty() {
        Diagnostic::ok("navigation", format!("{} items, all sections reachable", ids.len()))
    } else {
        Diagnostic::warning(
            "navigation",
            format!("no navigation item for #{}", unreachable.join(", #")),
        )
    }
}

fn check_env(label: &'static str, env_key: &str) -> Diagnostic {
    match env::var(env_key) {
        Ok(value) if !value.trim().is_empty() => {
            Diagnostic::ok(label, format!("{} from {}", value.trim(), env_key))
        }
        _ => Diagnostic::ok(label, format!("default (set {} to override)", env_key)),
    }
}
