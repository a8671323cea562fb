//! Filter engine.
//!
//! `filter_tools` is the pure derivation from (tool list, tab, keyword) to
//! the visible subset. `FilteredTools` caches the last result and recomputes
//! from scratch whenever any input differs.

use super::state::ViewState;
use super::tab::{Tab, TabId};
use super::tool::Tool;

/// Derive the visible tools.
///
/// A `None` tab applies no category filter. A keyword that is empty after
/// trimming applies no keyword filter; otherwise the keyword is matched as
/// typed, surrounding whitespace included. Input order is preserved.
pub fn filter_tools(tools: &[Tool], tab: Option<&Tab>, keyword: &str) -> Vec<Tool> {
    filter_positions(tools, tab, keyword)
        .into_iter()
        .map(|i| tools[i].clone())
        .collect()
}

/// Same selection as `filter_tools`, as ascending positions into `tools`.
pub fn filter_positions(tools: &[Tool], tab: Option<&Tab>, keyword: &str) -> Vec<usize> {
    let needle = if keyword.trim().is_empty() {
        None
    } else {
        Some(keyword.to_lowercase())
    };

    tools
        .iter()
        .enumerate()
        .filter(|(_, tool)| tab.is_none_or(|t| tool.category == t.category))
        .filter(|(_, tool)| needle.as_deref().is_none_or(|n| tool.mentions(n)))
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoKey {
    generation: u64,
    tab: TabId,
    keyword: String,
}

/// Memoized filter result over a `ViewState`.
#[derive(Debug, Default)]
pub struct FilteredTools {
    key: Option<MemoKey>,
    positions: Vec<usize>,
    items: Vec<Tool>,
}

impl FilteredTools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filtered tools for the state's current inputs.
    pub fn get(&mut self, state: &ViewState) -> &[Tool] {
        let key = MemoKey {
            generation: state.generation(),
            tab: state.active_tab,
            keyword: state.search_keyword.clone(),
        };

        if self.key.as_ref() != Some(&key) {
            let tools = state.tools();
            self.positions = filter_positions(tools, key.tab.tab(), &key.keyword);
            self.items = self.positions.iter().map(|&i| tools[i].clone()).collect();
            log::debug!(
                "Recomputed filter: tab={} keyword={:?} -> {} tools",
                key.tab,
                key.keyword,
                self.items.len()
            );
            self.key = Some(key);
        }

        &self.items
    }

    /// Last computed result without checking inputs.
    pub fn cached(&self) -> &[Tool] {
        &self.items
    }

    /// Positions of the cached items in the full tool list.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}
