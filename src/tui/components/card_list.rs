//! # Card List
//!
//! A titled, scrollable column of bordered cards, one labelled line per
//! field. Vehicles, films and the developer credits all render through it.
//!
//! An empty list renders only the empty-state message.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// Rows between two cards.
const CARD_GAP: u16 = 1;

/// One card: `(label, value)` pairs rendered as `label: value` lines.
pub type Card = Vec<(&'static str, String)>;

pub struct CardList<'a> {
    pub title: &'static str,
    pub empty_message: &'static str,
    pub cards: Vec<Card>,
    pub background: Color,
    scroll: &'a mut ScrollViewState,
}

impl<'a> CardList<'a> {
    pub fn new(
        title: &'static str,
        empty_message: &'static str,
        cards: Vec<Card>,
        scroll: &'a mut ScrollViewState,
    ) -> Self {
        Self {
            title,
            empty_message,
            cards,
            background: theme::PANEL,
            scroll,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    fn card_height(card: &Card) -> u16 {
        card.len() as u16 + 2
    }
}

impl Component for CardList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.cards.is_empty() {
            let empty = Paragraph::new(self.empty_message).style(theme::info());
            frame.render_widget(empty, area);
            return;
        }

        let [title_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let title = Paragraph::new(self.title)
            .style(theme::title())
            .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        // Leave a column for the scrollbar
        let content_width = list_area.width.saturating_sub(1);
        let total_height: u16 = self
            .cards
            .iter()
            .map(|card| Self::card_height(card) + CARD_GAP)
            .sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for card in &self.cards {
            let height = Self::card_height(card);
            let lines: Vec<Line> = card
                .iter()
                .map(|(label, value)| {
                    Line::from(vec![
                        Span::styled(format!("{label}: "), theme::info()),
                        Span::styled(value.clone(), theme::info()),
                    ])
                })
                .collect();
            let paragraph = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::border())
                    .padding(Padding::horizontal(1))
                    .style(Style::default().bg(self.background)),
            );
            scroll_view.render_widget(paragraph, Rect::new(0, y, content_width, height));
            y += height + CARD_GAP;
        }

        frame.render_stateful_widget(scroll_view, list_area, &mut *self.scroll);
    }
}

/// Scroll keys shared by every card-list screen. Returns true if consumed.
pub fn handle_scroll(scroll: &mut ScrollViewState, event: &TuiEvent) -> bool {
    match event {
        TuiEvent::CursorUp => scroll.scroll_up(),
        TuiEvent::CursorDown => scroll.scroll_down(),
        TuiEvent::ScrollPageUp => scroll.scroll_page_up(),
        TuiEvent::ScrollPageDown => scroll.scroll_page_down(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(cards: Vec<Card>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut scroll = ScrollViewState::default();
        terminal
            .draw(|f| {
                CardList::new("Lista", "Nada aqui.", cards, &mut scroll).render(f, f.area())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_list_shows_only_message() {
        let text = render(Vec::new(), 40, 10);
        assert!(text.contains("Nada aqui."));
        assert!(!text.contains("Lista"));
    }

    #[test]
    fn test_cards_render_labelled_lines() {
        let cards = vec![
            vec![("Nome", "X-34".to_string()), ("Modelo", "speeder".to_string())],
            vec![("Nome", "T-16".to_string()), ("Modelo", "skyhopper".to_string())],
        ];
        let text = render(cards, 40, 20);
        assert!(text.contains("Lista"));
        assert!(text.contains("Nome: X-34"));
        assert!(text.contains("Modelo: skyhopper"));
        assert_eq!(text.matches("Nome:").count(), 2);
    }

    #[test]
    fn test_scroll_keys_are_consumed() {
        let mut scroll = ScrollViewState::default();
        assert!(handle_scroll(&mut scroll, &TuiEvent::CursorDown));
        assert!(handle_scroll(&mut scroll, &TuiEvent::ScrollPageUp));
        assert!(!handle_scroll(&mut scroll, &TuiEvent::Submit));
    }
}
