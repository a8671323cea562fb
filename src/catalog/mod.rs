//! Catalog domain - tools, tabs, the filter engine and the view state.
//!
//! This module provides:
//! - `Tool`: one catalog entry as served by the tools endpoint
//! - `Tab` / `TabId`: the fixed set of category tabs
//! - `filter_tools` / `FilteredTools`: the pure filter and its memo
//! - `ViewState` / `LoadState`: the loading state machine plus user inputs

pub mod filter;
pub mod state;
pub mod tab;
pub mod tool;

pub use filter::{FilteredTools, filter_positions, filter_tools};
pub use state::{LoadState, ViewState};
pub use tab::{TABS, Tab, TabId};
pub use tool::Tool;
