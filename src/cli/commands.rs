//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: fetch once and print the filtered catalog
//! - tabs: print the category tabs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use toolcat::catalog::TabId;

/// toolcat - browse a catalog of AI tools
#[derive(Parser, Debug)]
#[command(name = "toolcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Tools endpoint URL (overrides config)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the catalog once and print the matching tools
    List {
        /// Category tab (ai, agent, mcp); defaults to the first tab
        #[arg(short, long, value_parser = parse_tab, conflicts_with = "all")]
        tab: Option<TabId>,

        /// Show every category
        #[arg(short, long)]
        all: bool,

        /// Keyword matched against name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// List the category tabs
    Tabs,
}

fn parse_tab(s: &str) -> Result<TabId, String> {
    s.parse()
}
