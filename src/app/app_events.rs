use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};

use super::app_state::App;
use super::{mouse_click, mouse_hover};
use crate::layout::region_at;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => {
                let region = region_at(&self.layout_regions, mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => {
                        mouse_click::handle_click(self, region, button);
                    }
                    MouseEventKind::Moved => {
                        mouse_hover::handle_hover(self, region);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        if self.handle_panel_keys(key) {
            return;
        }

        if self.input.handle_key(key) {
            let query = self.input.query().to_string();
            self.suggest.on_input(&query, now);
        }
    }

    /// Keys that work regardless of panel state
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Esc: close the panel first, quit once it is closed
        if key.code == KeyCode::Esc {
            if self.suggest.is_visible() {
                self.suggest.dismiss();
            } else {
                self.should_quit = true;
            }
            return true;
        }

        false
    }

    /// Navigation and activation inside the suggestion panel
    fn handle_panel_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if !self.suggest.is_visible() {
            // Down re-opens a dismissed panel
            if key.code == KeyCode::Down {
                return self.suggest.reveal();
            }
            return false;
        }

        match key.code {
            KeyCode::Down => self.suggest.select_next(),
            KeyCode::Char('n') if ctrl => self.suggest.select_next(),
            KeyCode::Up => self.suggest.select_previous(),
            KeyCode::Char('p') if ctrl => self.suggest.select_previous(),
            KeyCode::Enter | KeyCode::Tab => {
                if self.suggest.selected().is_some() {
                    let index = self.suggest.selected_index();
                    self.activate(index);
                }
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
