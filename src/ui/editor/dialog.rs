//! Dialog rendering for the create/edit form.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::catalog::{FormField, ItemForm};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    rarity_color, ACTIVE_HIGHLIGHT, BRAND_ORANGE, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
};

use super::state::EditorState;

const DIALOG_WIDTH: u16 = 56;

/// Width of the label column, including padding.
const LABEL_WIDTH: usize = 12;

/// Two lines per field plus the submit button and borders.
const DIALOG_HEIGHT: u16 = (FormField::ALL.len() as u16) * 2 + 5;

/// Render the editor on top of the admin page.
pub fn render_editor_dialog(frame: &mut Frame, state: &EditorState) {
    let (Some(form), Some(focus)) = (state.form(), state.focus()) else {
        return;
    };

    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(state.title(), Style::default().fg(BRAND_ORANGE)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for field in FormField::ALL {
        lines.push(field_line(form, field, field == focus));
        lines.push(Line::from(""));
    }
    lines.push(submit_line(state));
    lines.push(Line::from(Span::styled(
        "  Tab/↑↓: Field  ←→: Rarity  Enter: Save  Esc: Cancel",
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(form: &ItemForm, field: FormField, focused: bool) -> Line<'static> {
    let label = format!("  {:<width$}", field.label(), width = LABEL_WIDTH - 2);
    let value_style = if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    let value = match field {
        FormField::Rarity => {
            let style = value_style.fg(rarity_color(form.rarity));
            return Line::from(vec![
                Span::styled(label, Style::default().fg(MUTED_TEXT)),
                Span::styled(format!("‹ {} ›", form.rarity.label()), style),
            ]);
        }
        other => form.display_value(other).to_string(),
    };

    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(label, Style::default().fg(MUTED_TEXT)),
        Span::styled(format!("{value}{cursor}"), value_style),
    ])
}

fn submit_line(state: &EditorState) -> Line<'static> {
    let text = if state.is_saving() {
        " Saving... "
    } else if state.editing_id().is_some() {
        " Save "
    } else {
        " Add "
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            text,
            Style::default()
                .fg(HEADER_TEXT)
                .bg(BRAND_ORANGE)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
