// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal and file rendering of page views

pub mod formatter;
pub mod output;
pub mod tui;

pub use formatter::SiteFormatter;
pub use output::OutputFormat;
pub use tui::SiteBrowser;
