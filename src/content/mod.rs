// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site variants: the built-in one and loadable data files
//!
//! A variant is pure data. The built-in variant is compiled into the binary
//! from `data/lalie.yaml`; others can be loaded from YAML or JSON files of
//! the same shape.

pub mod validate;

use crate::types::SiteContent;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use validate::{validate, ValidationError, ValidationReport};

const BUILTIN_LALIE: &str = include_str!("../../data/lalie.yaml");

/// Identifier of the variant used when no `--site` file is given.
pub const DEFAULT_VARIANT: &str = "lalie";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("reading site file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing site YAML")]
    Yaml(#[from] serde_yaml::Error),
    #[error("parsing site JSON")]
    Json(#[from] serde_json::Error),
    #[error("unsupported site file extension for {} (expected .yaml, .yml or .json)", .0.display())]
    UnknownFormat(PathBuf),
    #[error("no built-in site variant named '{0}'")]
    UnknownVariant(String),
}

/// On-disk encodings a variant may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteFormat {
    Yaml,
    Json,
}

impl SiteFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(SiteFormat::Yaml),
            "json" => Some(SiteFormat::Json),
            _ => None,
        }
    }
}

/// Load a compiled-in variant by name.
pub fn builtin(name: &str) -> Result<SiteContent, ContentError> {
    let raw = match name {
        DEFAULT_VARIANT => BUILTIN_LALIE,
        other => return Err(ContentError::UnknownVariant(other.to_string())),
    };
    let site = from_str(raw, SiteFormat::Yaml)?;
    tracing::debug!(variant = name, services = site.services.len(), "loaded built-in site");
    Ok(site)
}

/// Parse a variant from text in the given encoding.
pub fn from_str(raw: &str, format: SiteFormat) -> Result<SiteContent, ContentError> {
    let site = match format {
        SiteFormat::Yaml => serde_yaml::from_str(raw)?,
        SiteFormat::Json => serde_json::from_str(raw)?,
    };
    Ok(site)
}

/// Load a variant from a `.yaml`, `.yml` or `.json` file.
pub fn load(path: &Path) -> Result<SiteContent, ContentError> {
    let format =
        SiteFormat::from_path(path).ok_or_else(|| ContentError::UnknownFormat(path.to_path_buf()))?;
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let site = from_str(&raw, format)?;
    tracing::debug!(path = %path.display(), id = %site.id, "loaded site file");
    Ok(site)
}
