use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use crate::catalog::format_price;
use crate::ui::theme::{
    rarity_color, BRAND_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT,
    STATUS_OK,
};

use super::showcase::{ACCOUNT_LINK, INVENTORY, PURCHASES, USERNAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Inventory,
    Purchases,
    Sales,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [
        ProfileTab::Inventory,
        ProfileTab::Purchases,
        ProfileTab::Sales,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ProfileTab::Inventory => "Inventory",
            ProfileTab::Purchases => "Purchases",
            ProfileTab::Sales => "Sales",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub fn render_profile(frame: &mut Frame, area: Rect, tab: ProfileTab) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let identity = Paragraph::new(vec![
        Line::from(Span::styled(
            USERNAME,
            Style::default()
                .fg(BRAND_ORANGE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("🔗 {ACCOUNT_LINK}"),
            Style::default().fg(MUTED_TEXT),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(identity, rows[0]);

    let tabs = Tabs::new(ProfileTab::ALL.iter().map(|t| t.title()))
        .select(tab.index())
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
        .divider(Span::styled("│", Style::default().fg(HEADER_SEPARATOR)));
    frame.render_widget(tabs, rows[1]);

    let content = Paragraph::new(tab_lines(tab)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(content, rows[2]);
}

fn tab_lines(tab: ProfileTab) -> Vec<Line<'static>> {
    match tab {
        ProfileTab::Inventory => INVENTORY
            .iter()
            .map(|(name, weapon, rarity)| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(rarity_color(*rarity))),
                    Span::styled(*name, Style::default().fg(HEADER_TEXT)),
                    Span::styled(format!("  {weapon}"), Style::default().fg(MUTED_TEXT)),
                ])
            })
            .collect(),
        ProfileTab::Purchases => PURCHASES
            .iter()
            .flat_map(|purchase| {
                [
                    Line::from(vec![
                        Span::styled(
                            purchase.title,
                            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            format_price(purchase.price),
                            Style::default().fg(BRAND_ORANGE),
                        ),
                        Span::raw("  "),
                        Span::styled(purchase.status, Style::default().fg(STATUS_OK)),
                    ]),
                    Line::from(Span::styled(purchase.date, Style::default().fg(MUTED_TEXT))),
                    Line::from(""),
                ]
            })
            .collect(),
        ProfileTab::Sales => vec![
            Line::from(""),
            Line::from(Span::styled(
                "No active sales",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Start selling your skins",
                Style::default().fg(MUTED_TEXT),
            )),
        ],
    }
}
