//! Input field rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::InputState;

/// Render the search input, with a result count on the right border
pub fn render_field(input: &mut InputState, result_count: Option<usize>, frame: &mut Frame, area: Rect) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search StudyVault ")
        .border_style(Style::default().fg(Color::Cyan));

    if let Some(count) = result_count {
        let noun = if count == 1 { "match" } else { "matches" };
        let hint = Line::from(Span::styled(
            format!(" {} {} ", count, noun),
            Style::default().fg(Color::DarkGray),
        ));
        block = block.title_top(hint.alignment(Alignment::Right));
    }

    input.textarea.set_block(block);
    frame.render_widget(&input.textarea, area);
}
