use crate::ui::app::App;
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::editor::render_editor_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{bottom_line, layout_regions};
use crate::ui::notify::{Level, Notification};
use crate::ui::page::Page;
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN};
use crate::ui::views::{render_cart, render_home, render_item_list, render_profile};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    Header::new(app.page()).render(frame, header);
    frame.render_widget(Clear, body);
    match app.page() {
        Page::Home => render_home(frame, body),
        Page::Catalog => render_item_list(frame, body, app, Page::Catalog, "Catalog"),
        Page::Cart => render_cart(frame, body),
        Page::Profile => render_profile(frame, body, app.profile_tab()),
        Page::Admin => render_item_list(frame, body, app, Page::Admin, "Manage skins"),
    }
    let footer_widget = Footer::new(app.page(), app.is_searching());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(note) = app.notifications().latest() {
        let toast = bottom_line(body);
        frame.render_widget(Clear, toast);
        frame.render_widget(toast_widget(note), toast);
    }

    render_editor_dialog(frame, app.editor());
    render_confirm_dialog(frame, app.confirm());
}

fn toast_widget(note: &Notification) -> Paragraph<'static> {
    let color = match note.level {
        Level::Success => STATUS_OK,
        Level::Warning => STATUS_WARN,
        Level::Error => STATUS_ERROR,
    };
    Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", note.title),
            Style::default()
                .fg(HEADER_TEXT)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", note.message), Style::default().fg(color)),
    ]))
}
