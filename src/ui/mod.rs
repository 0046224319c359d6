// SPDX-License-Identifier: PMPL-1.0-or-later

//! UI state and the transitions user input drives
//!
//! Four independent flags. Nothing here is persisted: a fresh
//! [`UiState::default()`] is what every page load starts from. Direction
//! is derived from `lang` on demand, so a language toggle flips strings
//! and layout in the same step.

use crate::catalog::CategorySelector;
use crate::i18n::{direction_for, Direction, Lang};
use serde::{Deserialize, Serialize};

/// Scroll offset (pixels) past which the navigation bar turns solid.
pub const SCROLL_THRESHOLD_PX: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    pub lang: Lang,
    pub menu_open: bool,
    pub active_category: CategorySelector,
    pub scrolled: bool,
}

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ToggleLanguage,
    ToggleMenu,
    CloseMenu,
    /// A navigation item was chosen; the mobile menu closes as a side effect.
    Navigate(String),
    SelectCategory(CategorySelector),
    /// Viewport scrolled to this offset.
    Scroll(u32),
}

impl UiState {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            ..Self::default()
        }
    }

    pub fn direction(&self) -> Direction {
        direction_for(self.lang)
    }

    /// Apply one action. Returns whether anything changed.
    pub fn apply(&mut self, action: UiAction) -> bool {
        let before = self.clone();
        match action {
            UiAction::ToggleLanguage => self.lang = self.lang.toggled(),
            UiAction::ToggleMenu => self.menu_open = !self.menu_open,
            UiAction::CloseMenu => self.menu_open = false,
            UiAction::Navigate(ref id) => {
                tracing::debug!(section = %id, "navigate");
                self.menu_open = false;
            }
            UiAction::SelectCategory(selector) => self.active_category = selector,
            UiAction::Scroll(offset) => self.scrolled = offset > SCROLL_THRESHOLD_PX,
        }
        let changed = *self != before;
        if changed {
            tracing::debug!(
                lang = %self.lang,
                menu_open = self.menu_open,
                category = %self.active_category,
                scrolled = self.scrolled,
                "ui state changed"
            );
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_load() {
        let state = UiState::default();
        assert_eq!(state.lang, Lang::En);
        assert!(!state.menu_open);
        assert_eq!(state.active_category, CategorySelector::All);
        assert!(!state.scrolled);
        assert_eq!(state.direction(), Direction::Ltr);
    }

    #[test]
    fn language_toggle_flips_direction_together() {
        let mut state = UiState::default();
        assert!(state.apply(UiAction::ToggleLanguage));
        assert_eq!((state.lang, state.direction()), (Lang::Ar, Direction::Rtl));
        assert!(state.apply(UiAction::ToggleLanguage));
        assert_eq!(state, UiState::default());
    }

    #[test]
    fn navigating_closes_menu() {
        let mut state = UiState::default();
        state.apply(UiAction::ToggleMenu);
        assert!(state.menu_open);
        assert!(state.apply(UiAction::Navigate("services".into())));
        assert!(!state.menu_open);
        assert!(!state.apply(UiAction::Navigate("home".into())));
        assert!(!state.apply(UiAction::CloseMenu));
    }

    #[test]
    fn scroll_threshold_is_strict() {
        let mut state = UiState::default();
        assert!(!state.apply(UiAction::Scroll(SCROLL_THRESHOLD_PX)));
        assert!(!state.scrolled);
        assert!(state.apply(UiAction::Scroll(SCROLL_THRESHOLD_PX + 1)));
        assert!(state.scrolled);
        // recomputing from the same offset is idempotent
        assert!(!state.apply(UiAction::Scroll(500)));
        assert!(state.apply(UiAction::Scroll(0)));
        assert!(!state.scrolled);
    }

    #[test]
    fn category_selection_is_independent_of_language() {
        let mut state = UiState::new(Lang::Ar);
        state.apply(UiAction::SelectCategory(CategorySelector::parse("Nails")));
        state.apply(UiAction::ToggleLanguage);
        assert_eq!(state.active_category, CategorySelector::parse("Nails"));
        assert_eq!(state.lang, Lang::En);
    }
}
