// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the bilingual site.
//!
//! The site speaks exactly two languages:
//!
//! | Code | Language | Native name | Direction |
//! |------|----------|-------------|-----------|
//! | en   | English  | English     | LTR       |
//! | ar   | Arabic   | العربية     | RTL       |
//!
//! ## Design
//!
//! Translation keys are opaque camelCase strings (`"heroTitle"`,
//! `"bookNow"`). Every entry carries both languages, so there is no
//! per-language fallback chain: a key is either present for both or absent
//! for both. Absent keys resolve to the key string itself (fail-open, never
//! panics), which lets copy be authored incrementally.
//!
//! Text direction is derived from the language and never stored on its own,
//! so displayed strings and layout direction cannot disagree.

mod catalog;
mod direction;
mod iso639;

pub use catalog::{resolve, Lang, LocalizedText, TranslationTable};
pub use direction::{direction_for, Direction, Edge, LayoutHints};
pub use iso639::{is_valid_iso639_1, language_name, native_name, parse_tag, LangError};
