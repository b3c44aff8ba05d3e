//! Mouse click handling
//!
//! Any button press outside both the input field and the panel dismisses
//! the panel.

use ratatui::crossterm::event::MouseButton;

use super::app_state::App;
use crate::layout::Region;

/// Handle a mouse button press over the given region
pub fn handle_click(app: &mut App, region: Option<Region>, button: MouseButton) {
    match region {
        Some(Region::SuggestionEntry(index))
            if button == MouseButton::Left && app.suggest.is_visible() =>
        {
            app.activate(index);
        }
        Some(Region::SuggestionEntry(_)) | Some(Region::SuggestionPanel) => {}
        Some(Region::InputField) => {
            app.suggest.reveal();
        }
        None => app.suggest.dismiss(),
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
