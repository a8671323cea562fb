//! View state for the catalog screen.
//!
//! `LoadState` is the loader's result axis. It starts `Pending` and settles
//! exactly once into `Loaded` or `Failed`. Tab and keyword are free-form user
//! inputs alongside it.

use super::tab::TabId;
use super::tool::Tool;

/// Result axis of the view: pending, loaded, or failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded(Vec<Tool>),
    Failed(String),
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }
}

/// All state the catalog screen derives its output from.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    load: LoadState,
    /// Bumped whenever the tool list changes; keys the filter memo.
    generation: u64,
    pub active_tab: TabId,
    pub search_keyword: String,
}

impl ViewState {
    /// Fresh state: pending, no tools, first tab, empty keyword.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the loader's outcome.
    ///
    /// Only the first transition out of `Pending` takes effect; returns
    /// `false` when the state had already settled or `outcome` is `Pending`.
    pub fn settle(&mut self, outcome: LoadState) -> bool {
        if !self.load.is_pending() || outcome.is_pending() {
            log::warn!("Ignoring load outcome: state already settled or outcome still pending");
            return false;
        }
        self.load = outcome;
        self.generation += 1;
        true
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn loading(&self) -> bool {
        self.load.is_pending()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded tools, or an empty slice while pending or after failure.
    pub fn tools(&self) -> &[Tool] {
        match &self.load {
            LoadState::Loaded(tools) => tools,
            _ => &[],
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert!(state.loading());
        assert!(state.error().is_none());
        assert!(state.tools().is_empty());
        assert_eq!(state.active_tab, TabId::Ai);
        assert!(state.search_keyword.is_empty());
    }

    #[test]
    fn test_settle_success() {
        let mut state = ViewState::new();
        let tool = Tool::new("A", "d", "http://x", "ai");
        assert!(state.settle(LoadState::Loaded(vec![tool.clone()])));
        assert!(!state.loading());
        assert!(state.error().is_none());
        assert_eq!(state.tools(), &[tool]);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_settle_failure() {
        let mut state = ViewState::new();
        assert!(state.settle(LoadState::Failed("boom".to_string())));
        assert!(!state.loading());
        assert_eq!(state.error(), Some("boom"));
        assert!(state.tools().is_empty());
    }

    #[test]
    fn test_settle_happens_once() {
        let mut state = ViewState::new();
        assert!(state.settle(LoadState::Failed("first".to_string())));
        assert!(!state.settle(LoadState::Loaded(vec![Tool::new("A", "d", "u", "ai")])));
        assert_eq!(state.error(), Some("first"));
        assert!(state.tools().is_empty());
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_settle_rejects_pending_outcome() {
        let mut state = ViewState::new();
        assert!(!state.settle(LoadState::Pending));
        assert!(state.loading());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_inputs_change_freely_while_pending() {
        let mut state = ViewState::new();
        state.active_tab = TabId::Mcp;
        state.search_keyword = "files".to_string();
        assert!(state.loading());
        assert!(state.tools().is_empty());
    }
}
