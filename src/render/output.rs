// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output encodings for CLI results and exports

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Encode `value`; `text` supplies the human-readable rendering.
    pub fn encode<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}
