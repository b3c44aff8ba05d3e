//! Terminal-wide pointer events
//!
//! Mouse reporting is the terminal's equivalent of a document-level
//! pointer-down listener. `PointerObserver` owns it: capture is enabled on
//! acquisition and released when the observer is dropped.

use std::io::{self, Write};

use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

pub struct PointerObserver {
    out: Box<dyn Write>,
}

impl PointerObserver {
    /// Enable mouse capture on stdout
    pub fn acquire() -> io::Result<Self> {
        Self::acquire_on(io::stdout())
    }

    /// Enable mouse capture on the given terminal output
    pub fn acquire_on(out: impl Write + 'static) -> io::Result<Self> {
        let mut out: Box<dyn Write> = Box::new(out);
        execute!(out, EnableMouseCapture)?;
        log::debug!("Pointer observer acquired");
        Ok(Self { out })
    }
}

impl std::fmt::Debug for PointerObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerObserver").finish_non_exhaustive()
    }
}

impl Drop for PointerObserver {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, DisableMouseCapture) {
            log::warn!("Failed to release mouse capture: {}", e);
        }
        let _ = self.out.flush();
        log::debug!("Pointer observer released");
    }
}

#[cfg(test)]
#[path = "pointer_tests.rs"]
mod pointer_tests;
