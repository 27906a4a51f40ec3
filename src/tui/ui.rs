use crate::core::route::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AboutScreen, DetailsView, FilmsScreen, Header, HomeScreen, VehiclesScreen,
};
use crate::tui::theme;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Padding, Paragraph};

const FOOTER: &str = "ATITUS";

/// Draws the header, the current screen and the footer.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [header_area, main_area, footer_area] = layout.areas(frame.area());

    frame.render_widget(Block::default().style(theme::screen()), frame.area());

    let screen = app.navigator.current();
    let mut header = Header::new(screen.title(), status_text(app, spinner_frame));
    if matches!(screen, Screen::Home) {
        header = header.with_action("a", "Sobre");
    }
    header.render(frame, header_area);

    let body = Block::default().padding(Padding::uniform(1));
    let body_area = body.inner(main_area);
    draw_screen(frame, body_area, screen, tui);

    let footer = Paragraph::new(FOOTER)
        .style(theme::title())
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

fn draw_screen(frame: &mut Frame, area: Rect, screen: &Screen, tui: &mut TuiState) {
    match screen {
        Screen::Home => HomeScreen::new(&mut tui.home).render(frame, area),
        Screen::Details(details) => DetailsView::new(details, &tui.details).render(frame, area),
        Screen::Vehicles(vehicles) => {
            VehiclesScreen::new(vehicles, &mut tui.scroll).render(frame, area)
        }
        Screen::Films(films) => FilmsScreen::new(films, &mut tui.scroll).render(frame, area),
        Screen::About => AboutScreen::new(&mut tui.scroll).render(frame, area),
    }
}

fn status_text(app: &App, spinner_frame: usize) -> String {
    if app.status_message.is_empty() {
        return String::new();
    }
    if app.is_loading() {
        let spinner = theme::SPINNER[spinner_frame % theme::SPINNER.len()];
        format!("{} {}", app.status_message, spinner)
    } else {
        app.status_message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Effect, update};
    use crate::test_support::{buffer_text, loaded_details, test_app};
    use crate::tui::components::{films, vehicles};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        buffer_text(&terminal)
    }

    fn load(app: &mut App, vehicles: usize, films: usize) {
        let Effect::Load { request, .. } = update(app, Action::OpenCharacter(1)) else {
            panic!("expected a load");
        };
        update(
            app,
            Action::DetailsLoaded {
                request,
                result: Ok(loaded_details(vehicles, films)),
            },
        );
    }

    #[test]
    fn test_home_has_header_action_and_footer() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("[a] Sobre"));
        assert!(text.contains("Luke Skywalker"));
        assert!(text.contains(FOOTER));
    }

    #[test]
    fn test_loading_details_shows_placeholder_and_spinner() {
        let mut app = test_app();
        update(&mut app, Action::OpenCharacter(1));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Detalhes | Carregando... ⠋"));
        assert!(!text.contains("[a] Sobre"));
    }

    #[test]
    fn test_luke_then_films() {
        let mut app = test_app();
        load(&mut app, 0, 4);
        let mut tui = TuiState::new();
        assert!(draw(&app, &mut tui).contains("Luke Skywalker"));

        update(&mut app, Action::OpenFilms);
        let text = draw(&app, &mut tui);
        assert_eq!(text.matches("Título: ").count(), 4);
        assert!(!text.contains(films::EMPTY_MESSAGE));
    }

    #[test]
    fn test_no_vehicles_empty_state() {
        let mut app = test_app();
        load(&mut app, 0, 1);
        update(&mut app, Action::OpenVehicles);
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains(vehicles::EMPTY_MESSAGE));
        assert!(!text.contains("Nome:"));
    }

    #[test]
    fn test_about_renders_three_rows() {
        let mut app = test_app();
        update(&mut app, Action::OpenAbout);
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert_eq!(text.matches("RA: ").count(), 3);
    }
}
