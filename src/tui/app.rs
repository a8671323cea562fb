//! TUI Application
//!
//! Owns the `AppState` and turns key presses into state changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InteractionMode};
use crate::catalog::TabId;

/// Application: state plus key handling.
#[derive(Debug, Default)]
pub struct App {
    state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return true;
        }

        match self.state.interaction_mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::Search => self.handle_search_key(key),
            InteractionMode::Help => {
                if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                    self.state.interaction_mode = InteractionMode::Normal;
                }
            }
        }

        self.state.should_quit
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        self.state.status_message = None;

        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('?') => self.state.interaction_mode = InteractionMode::Help,
            KeyCode::Char('/') => self.state.interaction_mode = InteractionMode::Search,
            KeyCode::Esc => self.state.clear_search(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                let next = self.state.view.active_tab.next();
                self.state.set_tab(next);
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                let prev = self.state.view.active_tab.prev();
                self.state.set_tab(prev);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = TabId::from_index(index) {
                    self.state.set_tab(tab);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Enter | KeyCode::Char('o') => self.state.open_selected(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.state.interaction_mode = InteractionMode::Normal,
            KeyCode::Esc => {
                self.state.clear_search();
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Backspace => self.state.pop_search_char(),
            KeyCode::Char(c) => self.state.push_search_char(c),
            _ => {}
        }
    }
}
