//! Suggestion controller state
//!
//! Owns the debounce timer, the request sequence counter and the panel
//! contents for one search input. All mutation happens on the UI thread;
//! the worker only ever talks to it through channels.

use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;
use std::time::Instant;

use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

use super::client::{SuggestClient, SuggestError};
use super::debouncer::Debouncer;
use super::suggest_render::MAX_VISIBLE_SUGGESTIONS;
use super::types::Suggestion;
use super::worker::spawn_worker;
use crate::config::SearchConfig;

/// Request messages sent to the lookup worker
#[derive(Debug)]
pub enum SuggestRequest {
    Lookup {
        query: String,
        /// Sequence number assigned at issue time
        request_id: u64,
    },
}

/// Response messages received from the lookup worker
#[derive(Debug)]
pub struct SuggestResponse {
    pub request_id: u64,
    pub query: String,
    pub result: Result<Vec<Suggestion>, SuggestError>,
}

pub struct SuggestState {
    /// Contents of the panel, at most `MAX_VISIBLE_SUGGESTIONS`; kept while
    /// the panel is dismissed
    suggestions: Vec<Suggestion>,
    visible: bool,
    selected: usize,
    /// Entry rows the last render fit on screen; `None` until drawn
    drawn_rows: Option<usize>,
    debouncer: Debouncer,
    min_query_chars: usize,
    request_tx: Option<UnboundedSender<SuggestRequest>>,
    response_rx: Option<Receiver<SuggestResponse>>,
    worker: Option<JoinHandle<()>>,
    /// Highest sequence number handed out. Only a response carrying exactly
    /// this number may touch the panel.
    request_id: u64,
    /// Cleared when a short query supersedes the latest request without
    /// issuing a new one
    latest_live: bool,
}

impl SuggestState {
    /// Create a detached controller with a hidden, empty panel
    pub fn new(settings: &SearchConfig) -> Self {
        Self {
            suggestions: Vec::new(),
            visible: false,
            selected: 0,
            drawn_rows: None,
            debouncer: Debouncer::new(settings.debounce_ms),
            min_query_chars: settings.min_query_chars,
            request_tx: None,
            response_rx: None,
            worker: None,
            request_id: 0,
            latest_live: false,
        }
    }

    /// Create a controller wired to a lookup worker for `client`
    pub fn attach(settings: &SearchConfig, client: SuggestClient) -> std::io::Result<Self> {
        let mut state = Self::new(settings);
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        state.worker = Some(spawn_worker(client, request_rx, response_tx)?);
        state.set_channels(request_tx, response_rx);
        Ok(state)
    }

    /// Set the channel handles for communication with the worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Release the worker and any pending timer
    ///
    /// Closing the request channel stops the worker; lookups still in flight
    /// are abandoned with it.
    pub fn detach(&mut self) {
        self.debouncer.cancel();
        self.request_tx = None;
        self.response_rx = None;
        self.worker = None;
    }

    pub fn is_attached(&self) -> bool {
        self.request_tx.is_some()
    }

    /// Input-change handler
    ///
    /// Short queries clear the panel immediately and never reach the
    /// network. Anything longer (re)arms the debounce timer.
    pub fn on_input(&mut self, text: &str, now: Instant) {
        if !is_searchable(text, self.min_query_chars) {
            self.debouncer.cancel();
            self.clear();
            self.supersede_in_flight();
            return;
        }

        self.debouncer.schedule(text.to_string(), now);
    }

    /// Fire a due lookup and apply every response that has arrived
    ///
    /// Returns true when the panel changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let Some(query) = self.debouncer.take_due(now) {
            self.issue(query);
        }

        let responses: Vec<SuggestResponse> = match &self.response_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };

        let mut changed = false;
        for response in responses {
            changed |= self.handle_response(response);
        }
        changed
    }

    /// Apply one lookup response, unless a newer request has been issued
    pub fn handle_response(&mut self, response: SuggestResponse) -> bool {
        if response.request_id != self.request_id || !self.latest_live {
            log::debug!(
                "Discarding stale response {} for {:?} (latest is {}, live: {})",
                response.request_id,
                response.query,
                self.request_id,
                self.latest_live
            );
            return false;
        }

        match response.result {
            Ok(suggestions) => {
                self.show_suggestions(suggestions);
                true
            }
            Err(e) => {
                log::warn!("Suggestion lookup for {:?} failed: {}", response.query, e);
                false
            }
        }
    }

    /// Replace the panel contents; an empty set hides the panel
    ///
    /// Entries past `MAX_VISIBLE_SUGGESTIONS` are dropped.
    pub fn show_suggestions(&mut self, mut suggestions: Vec<Suggestion>) {
        if suggestions.is_empty() {
            self.clear();
            return;
        }
        suggestions.truncate(MAX_VISIBLE_SUGGESTIONS);
        self.suggestions = suggestions;
        self.selected = 0;
        self.drawn_rows = None;
        self.visible = true;
    }

    /// Hide the panel and drop its contents
    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.selected = 0;
        self.drawn_rows = None;
        self.visible = false;
    }

    /// Record how many entry rows were drawn, pulling the selection onto them
    pub fn set_drawn_rows(&mut self, rows: usize) {
        self.drawn_rows = Some(rows);
        if self.selected >= rows {
            self.selected = rows.saturating_sub(1);
        }
    }

    /// Entries the user can currently see and select
    fn selectable_len(&self) -> usize {
        let len = self.suggestions.len();
        self.drawn_rows.map_or(len, |rows| rows.min(len))
    }

    /// Hide the panel, keeping its contents and any in-flight lookup
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Show retained contents again after a dismissal
    pub fn reveal(&mut self) -> bool {
        if self.visible || self.suggestions.is_empty() {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn select_next(&mut self) {
        let len = self.selectable_len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.selectable_len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.selectable_len() {
            self.selected = index;
        }
    }

    /// Highlighted entry, only while the panel is showing it
    pub fn selected(&self) -> Option<&Suggestion> {
        if !self.visible || self.selected >= self.selectable_len() {
            return None;
        }
        self.suggestions.get(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn entry(&self, index: usize) -> Option<&Suggestion> {
        self.suggestions.get(index)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn latest_request_id(&self) -> u64 {
        self.request_id
    }

    /// When the pending debounce timer fires, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    fn issue(&mut self, query: String) {
        self.request_id = self.request_id.wrapping_add(1);
        self.latest_live = true;
        let request_id = self.request_id;

        match &self.request_tx {
            Some(tx) => {
                if tx.send(SuggestRequest::Lookup { query, request_id }).is_err() {
                    log::warn!("Suggestion worker is gone; lookup {} dropped", request_id);
                }
            }
            None => log::debug!("Controller detached; lookup {} not sent", request_id),
        }
    }

    /// Make every outstanding response stale without sending anything
    fn supersede_in_flight(&mut self) {
        self.latest_live = false;
    }
}

/// Whether `text` is long enough, once trimmed, to be worth a lookup
pub fn is_searchable(text: &str, min_query_chars: usize) -> bool {
    text.trim().chars().count() >= min_query_chars
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
