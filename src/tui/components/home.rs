//! # Home Screen
//!
//! The fixed character roster as a list of cards. Enter opens the selected
//! character; `a` opens the about screen (the header action).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HomeState` lives in `TuiState`
//! - `HomeScreen` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::core::roster::ROSTER;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub struct HomeState {
    pub list_state: ListState,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0).min(ROSTER.len() - 1)
    }
}

/// Events emitted by the home screen.
#[derive(Debug, PartialEq, Eq)]
pub enum HomeEvent {
    Open(u32),
    About,
}

impl EventHandler for HomeState {
    type Event = HomeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<HomeEvent> {
        match event {
            TuiEvent::CursorUp => {
                let selected = self.selected().saturating_sub(1);
                self.list_state.select(Some(selected));
                None
            }
            TuiEvent::CursorDown => {
                let selected = (self.selected() + 1).min(ROSTER.len() - 1);
                self.list_state.select(Some(selected));
                None
            }
            TuiEvent::Submit => Some(HomeEvent::Open(ROSTER[self.selected()].id)),
            TuiEvent::InputChar('a') | TuiEvent::InputChar('s') => Some(HomeEvent::About),
            _ => None,
        }
    }
}

pub struct HomeScreen<'a> {
    state: &'a mut HomeState,
}

impl<'a> HomeScreen<'a> {
    pub fn new(state: &'a mut HomeState) -> Self {
        Self { state }
    }
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let title = Paragraph::new("Personagens de Star Wars")
            .style(theme::title())
            .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let selected = self.state.selected();
        let items: Vec<ListItem> = ROSTER
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == selected {
                    theme::selected()
                } else {
                    theme::title().remove_modifier(Modifier::BOLD)
                };
                ListItem::new(Line::from(entry.name).centered()).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border())
                .style(Style::default().bg(theme::CARD)),
        );

        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
