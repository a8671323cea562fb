//! CLI module for toolcat - command-line interface and subcommands.
//!
//! Without a subcommand the TUI is launched; `list` and `tabs` print to
//! stdout and exit.

pub mod commands;
pub mod output;

pub use commands::Cli;
