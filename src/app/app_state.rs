use std::time::{Duration, Instant};

use reqwest::Url;

use crate::config::Config;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::pointer::PointerObserver;
use crate::suggest::{SuggestClient, SuggestState, resolve_url};

/// Longest the event loop blocks between ticks
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub input: InputState,
    pub suggest: SuggestState,
    pub layout_regions: LayoutRegions,
    /// Absolute link chosen by activating a suggestion
    pub navigation: Option<String>,
    pub should_quit: bool,
    base_url: Url,
    /// Mouse capture, held while the controller is attached
    pointer: Option<PointerObserver>,
}

impl App {
    /// Build the UI and attach the suggestion controller to the input
    ///
    /// A non-empty `initial_query` is treated like typed text.
    pub fn new(
        config: &Config,
        client: SuggestClient,
        initial_query: &str,
        now: Instant,
    ) -> std::io::Result<Self> {
        let base_url = client.base_url().clone();
        let suggest = SuggestState::attach(&config.search, client)?;
        let mut app = Self::from_parts(InputState::with_text(initial_query), suggest, base_url);

        if !initial_query.is_empty() {
            app.suggest.on_input(initial_query, now);
        }
        Ok(app)
    }

    pub fn from_parts(input: InputState, suggest: SuggestState, base_url: Url) -> Self {
        Self {
            input,
            suggest,
            layout_regions: LayoutRegions::new(),
            navigation: None,
            should_quit: false,
            base_url,
            pointer: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Advance timers and apply arrived responses; true if a redraw is due
    pub fn tick(&mut self, now: Instant) -> bool {
        self.suggest.poll(now)
    }

    /// How long to wait for input before the next tick
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        match self.suggest.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(POLL_INTERVAL),
            None => POLL_INTERVAL,
        }
    }

    /// Navigate to the suggestion at `index` and quit
    pub fn activate(&mut self, index: usize) {
        let Some(suggestion) = self.suggest.entry(index) else {
            return;
        };
        let target = resolve_url(&self.base_url, &suggestion.url);
        log::info!("Opening {} ({})", suggestion.name, target);
        self.navigation = Some(target);
        self.should_quit = true;
    }

    /// Keep `pointer` alive until the controller detaches
    pub fn hold_pointer(&mut self, pointer: PointerObserver) {
        self.pointer = Some(pointer);
    }

    /// Tear down the controller: stops the worker, drops pending lookups,
    /// then releases mouse capture
    pub fn detach(&mut self) {
        self.suggest.detach();
        self.layout_regions.clear();
        self.pointer = None;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
