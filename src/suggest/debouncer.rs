//! Single-slot debounce timer
//!
//! Holds at most one pending query. Scheduling replaces whatever was pending,
//! so two live timers can never coexist. Time is passed in by the caller,
//! which keeps the event loop in charge of when a lookup fires.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingLookup {
    query: String,
    deadline: Instant,
}

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<PendingLookup>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Arm the timer for `query`, superseding any pending one
    pub fn schedule(&mut self, query: String, now: Instant) {
        self.pending = Some(PendingLookup {
            query,
            deadline: now + self.delay,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Fire the timer if its deadline has passed, emptying the slot
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
