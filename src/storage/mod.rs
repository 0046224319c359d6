// SPDX-License-Identifier: PMPL-1.0-or-later

//! Export of resolved page views to disk
//!
//! One file per language per format, named
//! `<site>-<lang>-<category>-<timestamp>.<ext>`, so a static-site build can
//! pick up every localized rendering of a variant in one pass. Existing
//! files are never overwritten.

use crate::catalog::CategorySelector;
use crate::i18n::Lang;
use crate::render::{OutputFormat, SiteFormatter};
use crate::types::SiteContent;
use crate::ui::UiState;
use crate::view::PageView;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const EXPORT_SCHEMA: &str = "lalie-site.page-view";
const EXPORT_VERSION: u32 = 1;

/// Envelope written around each exported view.
#[derive(Debug, Clone, Serialize)]
pub struct ExportBundle<'a> {
    pub schema: &'static str,
    pub version: u32,
    pub exported_at: String,
    pub view: &'a PageView,
}

impl<'a> ExportBundle<'a> {
    pub fn new(view: &'a PageView, exported_at: String) -> Self {
        Self {
            schema: EXPORT_SCHEMA,
            version: EXPORT_VERSION,
            exported_at,
            view,
        }
    }
}

/// File-name form of a category selector: lower-case ASCII alphanumerics,
/// everything else collapsed to single dashes.
pub fn selector_slug(selector: &CategorySelector) -> String {
    let mut slug = String::new();
    for c in selector.as_str().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "category".to_string()
    } else {
        slug.to_string()
    }
}

/// Write a view of `site` for every language, keeping the rest of `state`.
///
/// Defaults to `./exports` when no directory is given. Repeated formats are
/// written once. Returns the paths written, languages outermost.
pub fn export_views(
    site: &SiteContent,
    state: &UiState,
    directory: Option<&Path>,
    formats: &[OutputFormat],
) -> Result<Vec<PathBuf>> {
    let now = Utc::now();
    let timestamp = now.format("%Y%m%d%H%M%S%3f").to_string();
    let category = selector_slug(&state.active_category);
    let mut unique: Vec<OutputFormat> = Vec::with_capacity(formats.len());
    for format in formats {
        if !unique.contains(format) {
            unique.push(*format);
        }
    }

    let base_dir = directory
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("exports"));
    fs::create_dir_all(&base_dir)
        .with_context(|| format!("creating export directory {}", base_dir.display()))?;

    let formatter = SiteFormatter::plain();
    let mut stored = Vec::new();
    for lang in Lang::all() {
        let view = PageView::build(site, &UiState { lang: *lang, ..state.clone() });
        let bundle = ExportBundle::new(&view, now.to_rfc3339());
        for format in &unique {
            let stem = format!("{}-{}-{}-{}", site.id, lang, category, timestamp);
            let content = format.encode(&bundle, || formatter.page(&view))?;
            let path = write_new(&base_dir, &stem, format.extension(), &content)?;
            tracing::debug!(path = %path.display(), "exported page view");
            stored.push(path);
        }
    }
    Ok(stored)
}

/// Create `<stem>.<ext>` in `dir`, adding `-1`, `-2`, ... to the stem while
/// the name is taken.
fn write_new(dir: &Path, stem: &str, extension: &str, content: &str) -> Result<PathBuf> {
    let mut attempt = 0u32;
    loop {
        let name = match attempt {
            0 => format!("{stem}.{extension}"),
            n => format!("{stem}-{n}.{extension}"),
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(content.as_bytes())
                    .with_context(|| format!("writing {}", path.display()))?;
                return Ok(path);
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(err) => {
                return Err(err).with_context(|| format!("creating {}", path.display()));
            }
        }
    }
}
