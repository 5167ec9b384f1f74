use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::format_price;
use crate::ui::theme::{rarity_color, BRAND_ORANGE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

use super::showcase::{ShowcaseSkin, FEATURED, FEATURE_CARDS, HERO_TEXT, HERO_TITLE};

pub fn render_home(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(area);

    render_hero(frame, rows[0]);
    render_featured(frame, rows[1]);
    render_feature_cards(frame, rows[2]);
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(BRAND_ORANGE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(HERO_TEXT, Style::default().fg(MUTED_TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Browse catalog",
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    let hero = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(bordered(None));
    frame.render_widget(hero, area);
}

fn render_featured(frame: &mut Frame, area: Rect) {
    let block = bordered(Some(" Popular skins "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (skin, column) in FEATURED.iter().zip(columns.iter()) {
        frame.render_widget(skin_card(skin), *column);
    }
}

fn skin_card(skin: &ShowcaseSkin) -> Paragraph<'static> {
    let color = rarity_color(skin.rarity);
    Paragraph::new(vec![
        Line::from(Span::styled(skin.weapon, Style::default().fg(MUTED_TEXT))),
        Line::from(Span::styled(
            skin.name,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format_price(skin.price), Style::default().fg(BRAND_ORANGE)),
            Span::raw("  "),
            Span::styled(skin.rarity.label(), Style::default().fg(color)),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(color)),
    )
}

fn render_feature_cards(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (card, column) in FEATURE_CARDS.iter().zip(columns.iter()) {
        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                card.title,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.text, Style::default().fg(MUTED_TEXT))),
        ])
        .wrap(Wrap { trim: true })
        .block(bordered(None));
        frame.render_widget(text, *column);
    }
}

fn bordered(title: Option<&'static str>) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    match title {
        Some(title) => block.title(Span::styled(title, Style::default().fg(BRAND_ORANGE))),
        None => block,
    }
}
