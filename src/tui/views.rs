//! TUI Views
//!
//! Full-screen loading and error messages, and the catalog screen: tab bar,
//! search box, card list and footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use super::colors;
use super::state::{AppState, InteractionMode};
use crate::catalog::{LoadState, TABS, Tool};

/// Render the whole screen for the current state.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    match state.view.load_state() {
        LoadState::Pending => render_message(frame, area, "Loading...", colors::PENDING),
        LoadState::Failed(message) => render_message(frame, area, &format!("Error: {}", message), colors::FAILED),
        LoadState::Loaded(_) => render_catalog(state, frame, area),
    }

    if state.interaction_mode == InteractionMode::Help {
        render_help(frame, area);
    }
}

/// A single centered message filling the screen.
fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Min(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[1]);
}

fn render_catalog(state: &AppState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(state, frame, chunks[0]);
    render_tabs(state, frame, chunks[1]);
    render_search(state, frame, chunks[2]);
    render_cards(state, frame, chunks[3]);
    render_footer(state, frame, chunks[4]);
}

const TITLE: &str = " AI Tool Catalog ";
const SUBTITLE: &str = " A roundup of handy AI tools";

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(TITLE, Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)),
            Span::styled(state.loaded_string(), Style::default().fg(colors::DIM)),
        ]),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(colors::DIM))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tabs(state: &AppState, frame: &mut Frame, area: Rect) {
    let counts = state.tab_counts();
    let titles: Vec<Line> = TABS
        .iter()
        .zip(counts)
        .enumerate()
        .map(|(i, (tab, count))| Line::from(format!("{} {} ({})", i + 1, tab.label, count)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.view.active_tab.index())
        .block(Block::default().borders(Borders::ALL).title(" Category "))
        .highlight_style(Style::default().fg(colors::SELECTED).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_search(state: &AppState, frame: &mut Frame, area: Rect) {
    let searching = state.interaction_mode == InteractionMode::Search;
    let keyword = state.view.search_keyword.as_str();

    let (text, style) = if keyword.is_empty() && !searching {
        ("press / to search".to_string(), Style::default().fg(colors::DIM))
    } else if searching {
        (format!("{}▏", keyword), Style::default())
    } else {
        (keyword.to_string(), Style::default())
    };

    let border = if searching {
        Style::default().fg(colors::KEYBIND)
    } else {
        Style::default()
    };

    let search = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border).title(" Search "));
    frame.render_widget(search, area);
}

/// Lines making up one card.
fn card_lines<'a>(tool: &'a Tool, icon: &'a str) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(format!("[img] {}", icon), Style::default().fg(colors::DIM))),
        Line::from(vec![
            Span::styled(
                format!(" {} ", tool.category),
                Style::default().fg(colors::BADGE_FG).bg(colors::BADGE_BG),
            ),
            Span::raw(" "),
            Span::styled(tool.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::raw(tool.description.as_str())),
        Line::from(""),
    ]
}

fn render_cards(state: &AppState, frame: &mut Frame, area: Rect) {
    let visible = state.visible();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Tools ({}) ", visible.len()));

    if visible.is_empty() {
        let empty = Paragraph::new("No tools match")
            .style(Style::default().fg(colors::DIM))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, tool)| ListItem::new(card_lines(tool, state.icon_for_visible(i))))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors::HIGHLIGHT_BG))
        .highlight_symbol("▌ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = match &state.status_message {
        Some(message) => Line::from(Span::styled(message.as_str(), Style::default().fg(colors::FAILED))),
        None => {
            let keys: &[(&str, &str)] = match state.interaction_mode {
                InteractionMode::Search => &[("Enter", "done"), ("Esc", "clear")],
                _ => &[
                    ("Tab", "category"),
                    ("/", "search"),
                    ("j/k", "move"),
                    ("Enter", "open"),
                    ("?", "help"),
                    ("q", "quit"),
                ],
            };
            let spans: Vec<Span> = keys
                .iter()
                .flat_map(|(k, action)| {
                    [
                        Span::styled(format!("<{}>", k), Style::default().fg(colors::KEYBIND)),
                        Span::raw(format!(" {}  ", action)),
                    ]
                })
                .collect();
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Tab / → / l      next category"),
        Line::from("S-Tab / ← / h    previous category"),
        Line::from("1..3             jump to category"),
        Line::from("j / ↓, k / ↑     move selection"),
        Line::from("Enter / o        open tool in browser"),
        Line::from("/                search name and description"),
        Line::from("Esc              clear search"),
        Line::from("q / Ctrl-C       quit"),
    ];

    let width = area.width.min(50);
    let height = area.height.min(lines.len() as u16 + 2);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(colors::HEADER)),
    );
    frame.render_widget(help, popup);
}
