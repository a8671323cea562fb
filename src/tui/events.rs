//! Event handling for the TUI.
//!
//! This module provides:
//! - `Event`: The unified event type (keyboard, tick, loader and icon results)
//! - `EventHandler`: One channel fed by the terminal polling thread and by
//!   background tasks

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;
use tokio::sync::mpsc;

use crate::catalog::LoadState;

/// Unified event type for the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Periodic tick for redraw
    Tick,
    /// Terminal resize
    Resize(u16, u16),
    /// The one-shot tool load settled
    Loaded(LoadState),
    /// The icon of the tool at this position failed to load
    IconBroken(usize),
}

/// Receives events from the terminal and from background tasks.
pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a handler and start polling the terminal on its own thread.
    pub fn new(tick_rate_ms: u64) -> Self {
        let handler = Self::detached();
        let tx = handler.sender();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        std::thread::spawn(move || {
            log::debug!("Terminal event thread started");
            loop {
                let event = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        // Only handle key press events, not release
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => Event::Key(key),
                        Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                        Ok(_) => continue,
                        Err(e) => {
                            log::warn!("Failed to read terminal event: {}", e);
                            continue;
                        }
                    },
                    Ok(false) => Event::Tick,
                    Err(e) => {
                        log::warn!("Failed to poll terminal: {}", e);
                        Event::Tick
                    }
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
            log::debug!("Terminal event thread exiting");
        });

        handler
    }

    /// A handler with no terminal thread; events only arrive via `sender()`.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Sender for background tasks to post events.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Get the next event.
    pub async fn next(&mut self) -> Result<Event> {
        self.rx.recv().await.ok_or_else(|| eyre::eyre!("Event channel closed"))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250) // 250ms tick rate by default
    }
}
