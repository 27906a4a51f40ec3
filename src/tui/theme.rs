//! Shared colors and styles: gold on black, like the cinema crawl.

use ratatui::style::{Color, Modifier, Style};

pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const BACKGROUND: Color = Color::Black;
pub const CARD: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const PANEL: Color = Color::Rgb(0x44, 0x44, 0x44);
pub const DEVELOPER: Color = Color::Rgb(0x22, 0x22, 0x22);

/// Braille spinner frames for the loading indicator.
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn screen() -> Style {
    Style::default().fg(Color::White).bg(BACKGROUND)
}

pub fn header() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(GOLD)
        .add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
}

pub fn info() -> Style {
    Style::default().fg(Color::White)
}

pub fn border() -> Style {
    Style::default().fg(GOLD)
}

pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(GOLD)
        .add_modifier(Modifier::BOLD)
}
