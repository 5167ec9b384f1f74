use crate::ui::page::Page;
use crate::ui::theme::{BRAND_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

const BRAND: &str = "🎮 RUST MARKET";

/// Items in the cart. The cart is display-only, so this never changes.
const CART_COUNT: usize = 0;

pub struct Header {
    page: Page,
}

impl Header {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BRAND.chars().count() as u16 + 4),
                Constraint::Min(0),
                Constraint::Length(12),
            ])
            .split(inner);

        frame.render_widget(self.brand(), columns[0]);
        frame.render_widget(self.tabs(), columns[1]);
        frame.render_widget(self.cart_badge(), columns[2]);
    }

    fn brand(&self) -> Paragraph<'static> {
        Paragraph::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                BRAND,
                Style::default()
                    .fg(BRAND_ORANGE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
    }

    fn tabs(&self) -> Tabs<'static> {
        let titles = Page::ALL
            .iter()
            .enumerate()
            .map(|(idx, page)| format!("{} {}", idx + 1, page.title()));
        Tabs::new(titles)
            .select(self.page.index())
            .style(Style::default().fg(MUTED_TEXT))
            .highlight_style(
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider(Span::styled("│", Style::default().fg(HEADER_SEPARATOR)))
    }

    fn cart_badge(&self) -> Paragraph<'static> {
        Paragraph::new(Line::from(vec![
            Span::styled("🛒 ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!(" {CART_COUNT} "),
                Style::default().fg(HEADER_TEXT).bg(BRAND_ORANGE),
            ),
        ]))
    }
}
