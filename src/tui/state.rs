//! Application state for the TUI.
//!
//! This module defines the core state types that drive the TUI:
//! - `AppState`: The catalog view state plus screen-only state
//! - `InteractionMode`: Current input mode (normal, search, help)

use chrono::{DateTime, Local};

use crate::catalog::{FilteredTools, LoadState, TABS, TabId, Tool, ViewState, filter_positions};
use crate::config::DEFAULT_FALLBACK_ICON;
use crate::loader::IconSource;

/// The primary application state.
///
/// Owned by `App` and mutated only from the runner's loop.
#[derive(Debug)]
pub struct AppState {
    /// Load state, active tab and search keyword
    pub view: ViewState,
    /// Memoized filter over `view`
    pub filtered: FilteredTools,
    /// Per-tool icon state, aligned with `view.tools()`
    pub icons: Vec<IconSource>,
    /// Fallback icon path shown for missing or broken icons
    pub fallback_icon: String,
    /// Selected card within the filtered list
    pub selected: usize,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,
    /// When the tool list arrived
    pub loaded_at: Option<DateTime<Local>>,
    /// One-line message shown in the footer
    pub status_message: Option<String>,
    /// URL waiting to be opened by the runner
    pub pending_open: Option<String>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_ICON)
    }
}

impl AppState {
    pub fn new(fallback_icon: impl Into<String>) -> Self {
        Self {
            view: ViewState::new(),
            filtered: FilteredTools::new(),
            icons: Vec::new(),
            fallback_icon: fallback_icon.into(),
            selected: 0,
            interaction_mode: InteractionMode::Normal,
            loaded_at: None,
            status_message: None,
            pending_open: None,
            should_quit: false,
        }
    }

    /// Apply the loader outcome. Returns `true` if the state settled now.
    pub fn apply_load(&mut self, outcome: LoadState) -> bool {
        if !self.view.settle(outcome) {
            return false;
        }
        self.icons = self.view.tools().iter().map(IconSource::for_tool).collect();
        self.loaded_at = Some(Local::now());
        self.refresh();
        true
    }

    /// Switch the icon of the tool at `position` to the fallback.
    pub fn mark_icon_broken(&mut self, position: usize) {
        if let Some(icon) = self.icons.get_mut(position)
            && icon.fail()
        {
            log::debug!("Icon for tool #{} replaced by fallback", position);
        }
    }

    /// Recompute the filtered list for the current inputs and keep the
    /// selection in range.
    pub fn refresh(&mut self) {
        let len = self.filtered.get(&self.view).len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Tools currently visible, as of the last `refresh`.
    pub fn visible(&self) -> &[Tool] {
        self.filtered.cached()
    }

    /// Icon to show for the visible card at `index`.
    pub fn icon_for_visible(&self, index: usize) -> &str {
        self.filtered
            .positions()
            .get(index)
            .and_then(|&pos| self.icons.get(pos))
            .map(|icon| icon.display(&self.fallback_icon))
            .unwrap_or(self.fallback_icon.as_str())
    }

    pub fn selected_tool(&self) -> Option<&Tool> {
        self.visible().get(self.selected)
    }

    pub fn set_tab(&mut self, tab: TabId) {
        if self.view.active_tab != tab {
            self.view.active_tab = tab;
            self.selected = 0;
            self.refresh();
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        self.view.search_keyword.push(c);
        self.selected = 0;
        self.refresh();
    }

    pub fn pop_search_char(&mut self) {
        if self.view.search_keyword.pop().is_some() {
            self.refresh();
        }
    }

    pub fn clear_search(&mut self) {
        if !self.view.search_keyword.is_empty() {
            self.view.search_keyword.clear();
            self.refresh();
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Queue the selected tool's URL for the runner to open.
    pub fn open_selected(&mut self) {
        if let Some(url) = self.selected_tool().map(|t| t.url.clone()) {
            self.pending_open = Some(url);
        }
    }

    /// Per-tab count of tools matching the current keyword.
    pub fn tab_counts(&self) -> Vec<usize> {
        TABS.iter()
            .map(|tab| filter_positions(self.view.tools(), Some(tab), &self.view.search_keyword).len())
            .collect()
    }

    /// Header text describing when the catalog was loaded.
    pub fn loaded_string(&self) -> String {
        match self.loaded_at {
            Some(at) => format!("{} tools │ loaded {}", self.view.tools().len(), at.format("%H:%M:%S")),
            None => String::new(),
        }
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation
    #[default]
    Normal,
    /// Typing into the search box
    Search,
    /// Help overlay visible
    Help,
}
