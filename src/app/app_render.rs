use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::input::input_render;
use crate::suggest::suggest_render;

const KEY_HINTS: [(&str, &str); 4] = [
    ("Enter", "open"),
    ("↑/↓", "select"),
    ("Esc", "close"),
    ("Ctrl+C", "quit"),
];

impl App {
    /// Render the UI and record where components landed
    pub fn render(&mut self, frame: &mut Frame) {
        let [input_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let result_count = if self.suggest.is_visible() {
            Some(self.suggest.suggestions().len())
        } else {
            None
        };
        input_render::render_field(&mut self.input, result_count, frame, input_area);

        let body = Paragraph::new(Line::from(vec![
            Span::styled("Server: ", Style::default().fg(Color::DarkGray)),
            Span::raw(self.base_url().as_str().to_string()),
        ]));
        frame.render_widget(body, body_area);

        frame.render_widget(Paragraph::new(key_hint_line()), footer_area);

        // Panel last so it draws over the body
        self.layout_regions.input_field = Some(input_area);
        self.layout_regions.suggestion_panel =
            suggest_render::render_panel(&mut self.suggest, frame, input_area);
    }
}

fn key_hint_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
