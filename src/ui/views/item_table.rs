use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::catalog::{format_price, CatalogItem};
use crate::ui::app::App;
use crate::ui::browse::BrowseState;
use crate::ui::page::Page;
use crate::ui::theme::{
    rarity_color, ACTIVE_HIGHLIGHT, BRAND_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    MUTED_TEXT,
};

/// Filter bar plus the filtered table, shared by catalog and admin.
pub fn render_item_list(frame: &mut Frame, area: Rect, app: &App, page: Page, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let browse = app.browse(page);
    let items = app.visible_items(page);
    frame.render_widget(filter_bar(browse, items.len()), chunks[0]);

    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(BRAND_ORANGE),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if let Some(message) = placeholder(app, &items) {
        let text = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
        frame.render_widget(text, chunks[1]);
        return;
    }

    let header = Row::new(["Name", "Weapon", "Rarity", "Price"])
        .style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD));
    let rows = items.iter().map(item_row);
    let widths = [
        Constraint::Percentage(38),
        Constraint::Percentage(26),
        Constraint::Percentage(16),
        Constraint::Percentage(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(browse.selected));
    frame.render_stateful_widget(table, chunks[1], &mut state);
}

fn placeholder(app: &App, items: &[CatalogItem]) -> Option<&'static str> {
    if app.is_loading() && app.items().is_empty() {
        Some("  Loading...")
    } else if items.is_empty() {
        Some("  No skins match")
    } else {
        None
    }
}

fn item_row(item: &CatalogItem) -> Row<'static> {
    Row::new(vec![
        Cell::from(item.name.clone()).style(Style::default().fg(HEADER_TEXT)),
        Cell::from(item.weapon.clone()).style(Style::default().fg(MUTED_TEXT)),
        Cell::from(item.rarity.label()).style(Style::default().fg(rarity_color(item.rarity))),
        Cell::from(format_price(item.price)).style(Style::default().fg(BRAND_ORANGE)),
    ])
}

fn filter_bar(browse: &BrowseState, count: usize) -> Paragraph<'static> {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let separator = Style::default().fg(HEADER_SEPARATOR);

    let query = if browse.searching {
        format!("{}▏", browse.filter.query)
    } else if browse.filter.query.is_empty() {
        "any".to_string()
    } else {
        browse.filter.query.clone()
    };
    let query_style = if browse.searching {
        value.bg(ACTIVE_HIGHLIGHT)
    } else {
        value
    };

    Paragraph::new(Line::from(vec![
        Span::styled(" Search: ", label),
        Span::styled(query, query_style),
        Span::styled("  │  ", separator),
        Span::styled("Rarity: ", label),
        Span::styled(browse.filter.rarity.label(), value),
        Span::styled("  │  ", separator),
        Span::styled("Sort: ", label),
        Span::styled(browse.filter.sort.label(), value),
        Span::styled("  │  ", separator),
        Span::styled(format!("{count} skins"), label),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Rarity, PLACEHOLDER_IMAGE};
    use crate::config::Config;
    use crate::ui::worker::StoreEvent;

    fn item() -> CatalogItem {
        CatalogItem {
            id: 1,
            name: "Огненный дракон".into(),
            weapon: "AK-47".into(),
            rarity: Rarity::Legendary,
            price: 12_500,
            image_url: PLACEHOLDER_IMAGE.into(),
        }
    }

    #[test]
    fn loading_until_first_fetch() {
        let app = App::new(&Config::default());
        assert_eq!(placeholder(&app, &[]), Some("  Loading..."));
    }

    #[test]
    fn empty_result_after_fetch() {
        let mut app = App::new(&Config::default());
        app.on_store_event(StoreEvent::ItemsLoaded(vec![item()]));
        assert_eq!(placeholder(&app, &[]), Some("  No skins match"));
        assert_eq!(placeholder(&app, &[item()]), None);
    }

    #[test]
    fn failed_first_fetch_is_not_loading() {
        let mut app = App::new(&Config::default());
        app.on_store_event(StoreEvent::FetchFailed("server unreachable".into()));
        assert_eq!(placeholder(&app, &[]), Some("  No skins match"));
    }
}
