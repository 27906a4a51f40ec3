//! About screen: the three developer credits. Static, never touches the network.

use ratatui::Frame;
use ratatui::layout::Rect;
use tui_scrollview::ScrollViewState;

use crate::core::roster::DEVELOPERS;
use crate::tui::component::Component;
use crate::tui::components::card_list::{Card, CardList};
use crate::tui::theme;

pub struct AboutScreen<'a> {
    scroll: &'a mut ScrollViewState,
}

impl<'a> AboutScreen<'a> {
    pub fn new(scroll: &'a mut ScrollViewState) -> Self {
        Self { scroll }
    }
}

impl Component for AboutScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cards: Vec<Card> = DEVELOPERS
            .iter()
            .map(|dev| {
                vec![
                    ("RA", dev.ra.to_string()),
                    ("Nome", dev.name.to_string()),
                    ("E-mail", dev.email.to_string()),
                ]
            })
            .collect();
        CardList::new("Sobre os Desenvolvedores", "", cards, &mut *self.scroll)
            .background(theme::DEVELOPER)
            .render(frame, area);
    }
}
