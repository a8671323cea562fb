//! Terminal User Interface for toolcat.
//!
//! One screen: a tab bar of categories, a search box and a list of tool
//! cards. While the catalog loads the whole screen shows a loading message;
//! if loading fails it shows the error instead.
//!
//! The TUI runs as part of the main process using tokio for async operations.

mod app;
mod events;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use runner::{Session, TuiRunner};
pub use state::{AppState, InteractionMode};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Screen colors.
pub mod colors {
    use ratatui::style::Color;

    pub const PENDING: Color = Color::Rgb(255, 215, 0); // Gold
    pub const FAILED: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SELECTED: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const BADGE_FG: Color = Color::Rgb(37, 99, 235);
    pub const BADGE_BG: Color = Color::Rgb(219, 234, 254);
    pub const HIGHLIGHT_BG: Color = Color::Rgb(48, 48, 48);
    pub const DIM: Color = Color::DarkGray;
}
