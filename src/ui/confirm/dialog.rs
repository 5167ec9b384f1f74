use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

use super::state::ConfirmState;

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 7;

pub fn render_confirm_dialog(frame: &mut Frame, state: &ConfirmState) {
    let ConfirmState::Confirming { name, .. } = state else {
        return;
    };

    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete skin? ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button = Style::default()
        .fg(HEADER_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Delete ", Style::default().fg(HEADER_TEXT)),
            Span::styled(truncate(name, 28), Style::default().fg(STATUS_ERROR)),
            Span::styled("?", Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("        "),
            Span::styled(" [Y]es ", button),
            Span::raw("    "),
            Span::styled(" [N]o ", button),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Truncate on char boundaries; names are often Cyrillic.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
