//! Data loader.
//!
//! Fetches the tool list once and turns the outcome into a `LoadState`.
//! `Loader` holds a latch so the fetch is started at most once per
//! instance; the outcome is handed to a callback instead of being written
//! into shared state.

pub mod icons;
pub mod source;

pub use icons::{IconProbe, IconSource};
pub use source::{HttpToolSource, ToolSource};

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::catalog::LoadState;

/// Fetch from `source` and map the result onto the load state machine.
pub async fn load(source: &dyn ToolSource) -> LoadState {
    match source.fetch_tools().await {
        Ok(tools) => LoadState::Loaded(tools),
        Err(e) => {
            log::error!("Failed to load tools: {}", e);
            LoadState::Failed(e.user_message())
        }
    }
}

/// One-shot loader.
pub struct Loader {
    source: Arc<dyn ToolSource>,
    started: bool,
}

impl Loader {
    pub fn new(source: Arc<dyn ToolSource>) -> Self {
        Self { source, started: false }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Start the fetch on the tokio runtime and hand its outcome to
    /// `on_settled`. Returns `None` if this loader was already started.
    pub fn spawn<F>(&mut self, on_settled: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(LoadState) + Send + 'static,
    {
        if !self.take_latch() {
            return None;
        }

        let source = Arc::clone(&self.source);
        Some(tokio::spawn(async move {
            let outcome = load(source.as_ref()).await;
            on_settled(outcome);
        }))
    }

    /// Run the fetch on the current task. Returns `None` if this loader
    /// was already started.
    pub async fn run(&mut self) -> Option<LoadState> {
        if !self.take_latch() {
            return None;
        }
        Some(load(self.source.as_ref()).await)
    }

    fn take_latch(&mut self) -> bool {
        if self.started {
            log::warn!("Loader already started; ignoring second start");
            return false;
        }
        self.started = true;
        true
    }
}
