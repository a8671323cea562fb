//! Plain-terminal rendering for the `list` and `tabs` subcommands.

use colored::*;

use toolcat::catalog::{TABS, Tool};
use toolcat::loader::IconSource;

/// One tool as a block of colored lines.
pub fn format_card(tool: &Tool, fallback_icon: &str) -> String {
    let icon = IconSource::for_tool(tool);
    format!(
        "{} {}\n  {}\n  {} {}\n  {}",
        format!("[{}]", tool.category).blue(),
        tool.name.bold(),
        tool.description,
        "url:".dimmed(),
        tool.url.cyan(),
        format!("icon: {}", icon.display(fallback_icon)).dimmed(),
    )
}

/// The tab table, one tab per line.
pub fn format_tabs() -> String {
    TABS.iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {:<6} {:<10} category={}", i + 1, tab.id.as_str().cyan(), tab.label, tab.category))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_card_contains_fields() {
        colored::control::set_override(false);
        let tool = Tool::new("Chat", "talks", "https://chat.example", "ai");
        let card = format_card(&tool, "/no-image.png");
        assert!(card.starts_with("[ai] Chat"));
        assert!(card.contains("talks"));
        assert!(card.contains("https://chat.example"));
        assert!(card.contains("icon: /no-image.png"));
    }

    #[test]
    fn test_format_card_uses_tool_icon() {
        colored::control::set_override(false);
        let tool = Tool::new("Chat", "talks", "u", "ai").with_icon("/chat.png");
        assert!(format_card(&tool, "/no-image.png").contains("icon: /chat.png"));
    }

    #[test]
    fn test_format_tabs_lists_every_tab() {
        colored::control::set_override(false);
        let table = format_tabs();
        assert_eq!(table.lines().count(), TABS.len());
        assert!(table.contains("category=MCP"));
    }
}
