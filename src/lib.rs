// SPDX-License-Identifier: PMPL-1.0-or-later

//! lalie-site: bilingual content model for the Lalie Spa site.
//!
//! The site is static content in two languages (English and Arabic). What
//! logic it has reduces to three pure functions over read-only data:
//!
//! 1. **Resolve**: look up a copy key for a language, degrading to the key
//!    itself ([`i18n::resolve`]).
//! 2. **Filter**: narrow the service catalog by canonical (English)
//!    category, with `"all"` as the no-filter sentinel
//!    ([`catalog::filter_by_category`]).
//! 3. **Direct**: map a language to LTR/RTL and the mirrored layout it
//!    implies ([`i18n::direction_for`]).
//!
//! [`ui::UiState`] holds the only mutable state and [`view::PageView`]
//! combines all three into one resolved projection per state.

pub mod catalog;
pub mod content;
pub mod diagnostics;
pub mod i18n;
pub mod links;
pub mod render;
pub mod storage;
pub mod types;
pub mod ui;
pub mod view;
