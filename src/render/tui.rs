// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal browser that drives the UI controller from key presses

use crate::catalog::{categories, CategorySelector};
use crate::i18n::native_name;
use crate::render::formatter::SiteFormatter;
use crate::types::SiteContent;
use crate::ui::{UiAction, UiState};
use crate::view::PageView;
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::Duration;

/// Pixels one `j`/`k` press scrolls by.
const SCROLL_STEP_PX: u32 = 10;

pub struct SiteBrowser;

/// What a key press asks the browser to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyIntent {
    Quit,
    Act(UiAction),
    Ignore,
}

impl SiteBrowser {
    pub fn run(site: &SiteContent, state: UiState) -> Result<UiState> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(site, state);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(site: &SiteContent, mut state: UiState) -> Result<UiState> {
        let mut stdout = stdout();
        let formatter = SiteFormatter::new();
        let selectors = categories(&site.services);
        let nav_ids = site.nav_ids();
        let mut scroll: u32 = 0;
        let mut dirty = true;

        loop {
            if dirty {
                let view = PageView::build(site, &state);
                Self::render(&mut stdout, &formatter, &view, scroll)?;
                dirty = false;
            }

            if !event::poll(Duration::from_millis(200))? {
                continue;
            }
            let Event::Key(KeyEvent { code, .. }) = event::read()? else {
                continue;
            };
            match Self::intent(code, &state, &selectors, &nav_ids, &mut scroll) {
                KeyIntent::Quit => break,
                KeyIntent::Act(action) => dirty = state.apply(action),
                KeyIntent::Ignore => {}
            }
        }

        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(state)
    }

    fn intent(
        code: KeyCode,
        state: &UiState,
        selectors: &[CategorySelector],
        nav_ids: &[&str],
        scroll: &mut u32,
    ) -> KeyIntent {
        match code {
            KeyCode::Char('q') => KeyIntent::Quit,
            KeyCode::Esc if !state.menu_open => KeyIntent::Quit,
            KeyCode::Esc => KeyIntent::Act(UiAction::CloseMenu),
            KeyCode::Char('l') => KeyIntent::Act(UiAction::ToggleLanguage),
            KeyCode::Char('m') => KeyIntent::Act(UiAction::ToggleMenu),
            KeyCode::Tab | KeyCode::Right => step_category(state, selectors, 1),
            KeyCode::BackTab | KeyCode::Left => {
                step_category(state, selectors, selectors.len().saturating_sub(1))
            }
            KeyCode::Char('j') | KeyCode::Down => {
                *scroll = scroll.saturating_add(SCROLL_STEP_PX);
                KeyIntent::Act(UiAction::Scroll(*scroll))
            }
            KeyCode::Char('k') | KeyCode::Up => {
                *scroll = scroll.saturating_sub(SCROLL_STEP_PX);
                KeyIntent::Act(UiAction::Scroll(*scroll))
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                match nav_ids.get(idx) {
                    Some(id) => KeyIntent::Act(UiAction::Navigate(id.to_string())),
                    None => KeyIntent::Ignore,
                }
            }
            _ => KeyIntent::Ignore,
        }
    }

    fn render(
        stdout: &mut impl Write,
        formatter: &SiteFormatter,
        view: &PageView,
        scroll: u32,
    ) -> Result<()> {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let state_line = format!(
            "lang={} dir={} menu={} scrolled={} (offset {}px)",
            view.lang,
            view.layout.dir.as_attr(),
            if view.menu_open { "open" } else { "closed" },
            view.scrolled,
            scroll
        );
        // raw mode needs explicit carriage returns
        for line in std::iter::once(state_line.dimmed().to_string())
            .chain(formatter.page(view).lines().map(str::to_string))
        {
            write!(stdout, "{line}\r\n")?;
        }
        let other = native_name(view.lang.toggled().code()).unwrap_or_default();
        let controls = format!(
            "Controls: [l] {other}, [m] Menu, [Tab/→] Next category, [Shift+Tab/←] Prev, \
             [j/k] Scroll, [1-9] Nav, [q] Quit"
        );
        write!(stdout, "\r\n{}\r\n", controls.dimmed())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Move the active category `by` positions forward, wrapping.
fn step_category(state: &UiState, selectors: &[CategorySelector], by: usize) -> KeyIntent {
    if selectors.is_empty() {
        return KeyIntent::Ignore;
    }
    let current = selectors
        .iter()
        .position(|s| *s == state.active_category)
        .unwrap_or(0);
    let next = (current + by) % selectors.len();
    KeyIntent::Act(UiAction::SelectCategory(selectors[next].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> Vec<CategorySelector> {
        ["all", "Care", "Nails"]
            .iter()
            .map(|s| CategorySelector::parse(s))
            .collect()
    }

    #[test]
    fn tab_cycles_categories_with_wrap() {
        let selectors = selectors();
        let mut state = UiState::default();
        let mut scroll = 0;
        for expected in ["Care", "Nails", "all"] {
            match SiteBrowser::intent(KeyCode::Tab, &state, &selectors, &[], &mut scroll) {
                KeyIntent::Act(action) => {
                    state.apply(action);
                }
                other => panic!("unexpected {other:?}"),
            }
            assert_eq!(state.active_category.as_str(), expected);
        }
        let back = SiteBrowser::intent(KeyCode::BackTab, &state, &selectors, &[], &mut scroll);
        assert_eq!(
            back,
            KeyIntent::Act(UiAction::SelectCategory(CategorySelector::parse("Nails")))
        );
    }

    #[test]
    fn scrolling_accumulates_offset() {
        let state = UiState::default();
        let mut scroll = 0;
        for _ in 0..3 {
            SiteBrowser::intent(KeyCode::Char('j'), &state, &[], &[], &mut scroll);
        }
        assert_eq!(scroll, 30);
        let up = SiteBrowser::intent(KeyCode::Up, &state, &[], &[], &mut scroll);
        assert_eq!(up, KeyIntent::Act(UiAction::Scroll(20)));
        for _ in 0..5 {
            SiteBrowser::intent(KeyCode::Up, &state, &[], &[], &mut scroll);
        }
        assert_eq!(scroll, 0);
    }

    #[test]
    fn escape_closes_menu_before_quitting() {
        let mut state = UiState::default();
        let mut scroll = 0;
        assert_eq!(
            SiteBrowser::intent(KeyCode::Esc, &state, &[], &[], &mut scroll),
            KeyIntent::Quit
        );
        state.menu_open = true;
        assert_eq!(
            SiteBrowser::intent(KeyCode::Esc, &state, &[], &[], &mut scroll),
            KeyIntent::Act(UiAction::CloseMenu)
        );
    }

    #[test]
    fn digits_navigate_to_nav_items() {
        let state = UiState::default();
        let mut scroll = 0;
        let nav = ["home", "about"];
        assert_eq!(
            SiteBrowser::intent(KeyCode::Char('2'), &state, &[], &nav, &mut scroll),
            KeyIntent::Act(UiAction::Navigate("about".into()))
        );
        assert_eq!(
            SiteBrowser::intent(KeyCode::Char('9'), &state, &[], &nav, &mut scroll),
            KeyIntent::Ignore
        );
    }
}
