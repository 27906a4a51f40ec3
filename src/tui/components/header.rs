//! # Header Component
//!
//! The gold bar shared by every screen: route title on the left, status in
//! the middle, and the screen's header action (if any) on the right.
//!
//! Stateless. The parent passes everything as props each frame:
//!
//! ```text
//!  Detalhes | Carregando... ⠹
//!  Home                                                  [a] Sobre
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme;

pub struct Header {
    pub title: &'static str,
    pub status: String,
    /// Key hint and label of the header action, e.g. `("a", "Sobre")`.
    pub action: Option<(&'static str, &'static str)>,
}

impl Header {
    pub fn new(title: &'static str, status: String) -> Self {
        Self {
            title,
            status,
            action: None,
        }
    }

    pub fn with_action(mut self, key: &'static str, label: &'static str) -> Self {
        self.action = Some((key, label));
        self
    }

    fn left_text(&self) -> String {
        if self.status.is_empty() {
            format!(" {}", self.title)
        } else {
            format!(" {} | {}", self.title, self.status)
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = self.left_text();
        let mut spans = vec![Span::raw(left.clone())];

        if let Some((key, label)) = self.action {
            let right = format!("[{key}] {label} ");
            let used = left.width() + right.width();
            let gap = (area.width as usize).saturating_sub(used).max(1);
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::raw(right));
        }

        let header = Paragraph::new(Line::from(spans)).style(theme::header());
        frame.render_widget(header, area);
    }
}
