//! # Details Screen
//!
//! Shows one character once its load settles: the name, six attributes and
//! two buttons leading to the vehicles and films screens.
//!
//! ```text
//! Loading  → "Carregando..."
//! Loaded   → name, attributes, [Veículos] [Filmes]
//! Failed   → error text and a retry hint
//! ```
//!
//! Button focus is presentation state and lives in `DetailsState`; the load
//! itself lives in the core `DetailsScreen`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::route::{DetailsScreen, LoadState};
use crate::swapi::CharacterDetails;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const LOADING_MESSAGE: &str = "Carregando...";

const BUTTON_BG: Color = Color::Rgb(0x55, 0x55, 0x55);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsButton {
    #[default]
    Vehicles,
    Films,
}

impl DetailsButton {
    fn toggled(self) -> Self {
        match self {
            DetailsButton::Vehicles => DetailsButton::Films,
            DetailsButton::Films => DetailsButton::Vehicles,
        }
    }
}

#[derive(Debug, Default)]
pub struct DetailsState {
    pub focused: DetailsButton,
}

/// Events emitted by the details screen.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailsEvent {
    OpenVehicles,
    OpenFilms,
    Retry,
}

impl EventHandler for DetailsState {
    type Event = DetailsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailsEvent> {
        match event {
            TuiEvent::CursorUp
            | TuiEvent::CursorDown
            | TuiEvent::CursorLeft
            | TuiEvent::CursorRight => {
                self.focused = self.focused.toggled();
                None
            }
            TuiEvent::Submit => Some(match self.focused {
                DetailsButton::Vehicles => DetailsEvent::OpenVehicles,
                DetailsButton::Films => DetailsEvent::OpenFilms,
            }),
            TuiEvent::InputChar('v') => Some(DetailsEvent::OpenVehicles),
            TuiEvent::InputChar('f') => Some(DetailsEvent::OpenFilms),
            TuiEvent::InputChar('r') => Some(DetailsEvent::Retry),
            _ => None,
        }
    }
}

pub struct DetailsView<'a> {
    screen: &'a DetailsScreen,
    focused: DetailsButton,
}

impl<'a> DetailsView<'a> {
    pub fn new(screen: &'a DetailsScreen, state: &DetailsState) -> Self {
        Self {
            screen,
            focused: state.focused,
        }
    }

    fn render_loaded(&self, frame: &mut Frame, area: Rect, details: &CharacterDetails) {
        let character = &details.character;
        let [title_area, info_area, _, vehicles_area, _, films_area, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        let title = Paragraph::new(character.name.as_str())
            .style(theme::title())
            .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let lines: Vec<Line> = character
            .attributes()
            .iter()
            .map(|(label, value)| Line::from(format!("{label}: {value}")))
            .collect();
        frame.render_widget(Paragraph::new(lines).style(theme::info()), info_area);

        self.render_button(frame, vehicles_area, "Veículos", DetailsButton::Vehicles);
        self.render_button(frame, films_area, "Filmes", DetailsButton::Films);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, label: &str, button: DetailsButton) {
        let style = if self.focused == button {
            theme::selected()
        } else {
            Style::default().fg(theme::GOLD).bg(BUTTON_BG)
        };
        let widget = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::border()),
            )
            .style(style);
        frame.render_widget(widget, area);
    }
}

impl Component for DetailsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match &self.screen.load {
            LoadState::Loading => {
                frame.render_widget(Paragraph::new(LOADING_MESSAGE).style(theme::info()), area);
            }
            LoadState::Failed(message) => {
                let lines = vec![
                    Line::from("Não foi possível carregar o personagem.").style(theme::title()),
                    Line::from(""),
                    Line::from(message.as_str()),
                    Line::from(""),
                    Line::from("Pressione r para tentar novamente."),
                ];
                let paragraph = Paragraph::new(lines)
                    .style(theme::info())
                    .wrap(Wrap { trim: true });
                frame.render_widget(paragraph, area);
            }
            LoadState::Loaded(details) => self.render_loaded(frame, area, details),
        }
    }
}
