//! TUI Runner - main event loop.
//!
//! `Session` holds everything except the terminal: the app, the one-shot
//! loader, the icon probe and the URL opener. `TuiRunner` adds the terminal
//! and event handler and runs the loop: render → handle event → process
//! actions → repeat.

use eyre::Result;
use log::info;
use tokio::sync::mpsc::UnboundedSender;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;
use crate::launcher::UrlOpener;
use crate::loader::{IconProbe, Loader};

/// Non-terminal part of the TUI.
pub struct Session {
    app: App,
    loader: Loader,
    icon_probe: Option<IconProbe>,
    opener: Box<dyn UrlOpener>,
    tx: UnboundedSender<Event>,
}

impl Session {
    pub fn new(app: App, loader: Loader, opener: Box<dyn UrlOpener>, tx: UnboundedSender<Event>) -> Self {
        Self {
            app,
            loader,
            icon_probe: None,
            opener,
            tx,
        }
    }

    /// Probe icons in the background once tools arrive.
    pub fn with_icon_probe(mut self, probe: IconProbe) -> Self {
        self.icon_probe = Some(probe);
        self
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Kick off the one-shot load. Later calls do nothing.
    pub fn start(&mut self) {
        let tx = self.tx.clone();
        let started = self.loader.spawn(move |outcome| {
            // Receiver gone means the TUI quit mid-fetch; drop the result.
            let _ = tx.send(Event::Loaded(outcome));
        });
        if started.is_some() {
            info!("Tool load started");
        }
    }

    /// Apply one event. Returns `true` when the app should quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                if self.app.handle_key(key) {
                    return true;
                }
            }
            Event::Loaded(outcome) => {
                if self.app.state_mut().apply_load(outcome) {
                    self.start_icon_probe();
                }
            }
            Event::IconBroken(position) => self.app.state_mut().mark_icon_broken(position),
            Event::Tick | Event::Resize(_, _) => {}
        }

        self.process_pending_actions();
        self.app.state().should_quit
    }

    fn start_icon_probe(&mut self) {
        let Some(probe) = self.icon_probe.take() else {
            return;
        };
        let targets = IconProbe::targets(self.app.state().view.tools());
        if targets.is_empty() {
            return;
        }

        let tx = self.tx.clone();
        tokio::spawn(async move {
            probe
                .run(targets, move |position| {
                    let _ = tx.send(Event::IconBroken(position));
                })
                .await;
        });
    }

    /// Process pending actions from user input.
    fn process_pending_actions(&mut self) {
        if let Some(url) = self.app.state_mut().pending_open.take() {
            match self.opener.open(&url) {
                Ok(()) => info!("Opened {}", url),
                Err(e) => {
                    log::warn!("{}", e);
                    self.app.state_mut().status_message = Some(e.to_string());
                }
            }
        }
    }
}

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    /// The terminal instance
    terminal: Tui,
    /// Event handler for keyboard, tick and background events
    events: EventHandler,
    session: Session,
}

impl TuiRunner {
    /// Create a runner. `session` must post its events to `events`.
    pub fn new(terminal: Tui, events: EventHandler, session: Session) -> Self {
        Self {
            terminal,
            events,
            session,
        }
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");
        self.session.start();

        loop {
            // 1. Render current state
            self.session.app_mut().state_mut().refresh();
            let state = self.session.app().state();
            self.terminal.draw(|f| render(state, f))?;

            // 2. Handle one event and any action it queued
            let event = self.events.next().await?;
            if self.session.handle_event(event) {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }
}
