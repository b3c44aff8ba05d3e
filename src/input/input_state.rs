use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line search input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Search folders and files…");

        Self { textarea }
    }

    pub fn with_text(text: &str) -> Self {
        let mut input = Self::new();
        input.textarea.insert_str(text);
        input
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Feed a key to the text area, returning whether the text changed
    ///
    /// Keys that would start a second line are swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_newline_key(key) {
            return false;
        }
        self.textarea.input(key)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn is_newline_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
