//! Suggestion panel rendering
//!
//! Draws the panel directly below the search input, one line per entry:
//! an icon for the entry kind, the name, and a dim kind label.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::suggest_state::SuggestState;
use super::types::{Suggestion, SuggestionKind};
use crate::widgets::popup;

// Panel display constants
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 72;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const LABEL_SPACING: usize = 2;
const SELECTION_MARKER_WIDTH: usize = 2;

/// Render the suggestion panel below the input field
///
/// Returns the area drawn, or `None` when the panel is hidden. The number of
/// entry rows that fit is recorded on `state` so selection stays on screen.
pub fn render_panel(state: &mut SuggestState, frame: &mut Frame, input_area: Rect) -> Option<Rect> {
    if !state.is_visible() || state.suggestions().is_empty() {
        return None;
    }

    let wanted = state.suggestions().len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = (wanted as u16) + POPUP_BORDER_HEIGHT;

    let visible = &state.suggestions()[..wanted];
    let max_name_width = visible
        .iter()
        .map(display_width)
        .max()
        .unwrap_or(0);
    let max_label_width = visible
        .iter()
        .map(|s| label(s.kind).width())
        .max()
        .unwrap_or(0);
    let content_width = (SELECTION_MARKER_WIDTH + max_name_width + LABEL_SPACING + max_label_width)
        .min(MAX_POPUP_WIDTH);
    let popup_width = (content_width as u16) + POPUP_PADDING;

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    let rows = popup_area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize;
    state.set_drawn_rows(rows);
    if rows == 0 {
        return None;
    }

    let visible = &state.suggestions()[..rows.min(wanted)];
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let padding = " ".repeat(max_name_width.saturating_sub(display_width(suggestion)));
            let entry = format!("{} {}{}", suggestion.kind.icon(), suggestion.name, padding);
            let kind_label = format!("{}{}", " ".repeat(LABEL_SPACING), label(suggestion.kind));

            let line = if i == state.selected_index() {
                Line::from(vec![
                    Span::styled(
                        format!("► {}", entry),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(kind_label, Style::default().fg(Color::Black).bg(Color::Cyan)),
                ])
            } else {
                Line::from(vec![
                    Span::styled(format!("  {}", entry), Style::default().fg(Color::White)),
                    Span::styled(kind_label, Style::default().fg(kind_color(suggestion.kind))),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
    Some(popup_area)
}

/// Width of the icon, a space and the name
fn display_width(suggestion: &Suggestion) -> usize {
    suggestion.kind.icon().width() + 1 + suggestion.name.width()
}

fn label(kind: SuggestionKind) -> String {
    format!("[{}]", kind.label())
}

fn kind_color(kind: SuggestionKind) -> Color {
    match kind {
        SuggestionKind::Folder => Color::Yellow,
        SuggestionKind::File => Color::DarkGray,
    }
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
