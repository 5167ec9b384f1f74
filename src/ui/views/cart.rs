use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{BRAND_ORANGE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

/// The cart never holds anything; it only points back at the catalog.
pub fn render_cart(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Cart is empty",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Add skins from the catalog",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Enter: Go to catalog ",
            Style::default().fg(HEADER_TEXT).bg(BRAND_ORANGE),
        )),
    ];

    let body = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(Span::styled(" Cart ", Style::default().fg(BRAND_ORANGE)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(body, area);
}
