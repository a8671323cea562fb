//! Category tabs.
//!
//! The set of tabs is closed and fixed at compile time. Each tab maps to
//! the exact `category` string it selects.

use std::fmt;
use std::str::FromStr;

/// Identifier of a category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Ai,
    Agent,
    Mcp,
}

/// A named category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub label: &'static str,
    pub category: &'static str,
}

/// All tabs in display order. The first entry is the default.
pub static TABS: [Tab; 3] = [
    Tab {
        id: TabId::Ai,
        label: "AI Tools",
        category: "ai",
    },
    Tab {
        id: TabId::Agent,
        label: "Agents",
        category: "agent",
    },
    Tab {
        id: TabId::Mcp,
        label: "MCP",
        category: "MCP",
    },
];

impl Tab {
    /// Look up a tab by id.
    pub fn find(id: TabId) -> Option<&'static Tab> {
        TABS.iter().find(|t| t.id == id)
    }
}

impl TabId {
    /// Short id used on the command line and in config.
    pub fn as_str(self) -> &'static str {
        match self {
            TabId::Ai => "ai",
            TabId::Agent => "agent",
            TabId::Mcp => "mcp",
        }
    }

    /// Position of this tab in `TABS`.
    pub fn index(self) -> usize {
        TABS.iter().position(|t| t.id == self).unwrap_or(0)
    }

    /// Tab at a display position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        TABS.get(index).map(|t| t.id)
    }

    /// Cycle to the next tab
    pub fn next(self) -> Self {
        TABS[(self.index() + 1) % TABS.len()].id
    }

    /// Cycle to the previous tab
    pub fn prev(self) -> Self {
        TABS[(self.index() + TABS.len() - 1) % TABS.len()].id
    }

    /// The tab definition for this id.
    pub fn tab(self) -> Option<&'static Tab> {
        Tab::find(self)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TABS.iter()
            .map(|t| t.id)
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = TABS.iter().map(|t| t.id.as_str()).collect();
                format!("unknown tab '{}' (expected one of: {})", s, valid.join(", "))
            })
    }
}
