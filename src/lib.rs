//! toolcat - a terminal catalog of AI tools
//!
//! Fetches the tool list once from an HTTP endpoint and shows it as cards
//! filtered by category tab and keyword.

pub mod catalog;
pub mod config;
pub mod error;
pub mod launcher;
pub mod loader;
pub mod tui;

pub use error::{Result, ToolcatError};
