//! Vehicles screen: renders the list carried by the route, nothing else.

use ratatui::Frame;
use ratatui::layout::Rect;
use tui_scrollview::ScrollViewState;

use crate::swapi::Vehicle;
use crate::tui::component::Component;
use crate::tui::components::card_list::{Card, CardList};

pub const EMPTY_MESSAGE: &str = "Não há veículos disponíveis.";

pub struct VehiclesScreen<'a> {
    vehicles: &'a [Vehicle],
    scroll: &'a mut ScrollViewState,
}

impl<'a> VehiclesScreen<'a> {
    pub fn new(vehicles: &'a [Vehicle], scroll: &'a mut ScrollViewState) -> Self {
        Self { vehicles, scroll }
    }
}

fn card(vehicle: &Vehicle) -> Card {
    vec![
        ("Nome", vehicle.name.clone()),
        ("Modelo", vehicle.model.clone()),
        ("Passageiros", vehicle.passengers.clone()),
    ]
}

impl Component for VehiclesScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cards = self.vehicles.iter().map(card).collect();
        CardList::new("Veículos", EMPTY_MESSAGE, cards, &mut *self.scroll).render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, vehicle};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(vehicles: &[Vehicle]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        let mut scroll = ScrollViewState::default();
        terminal
            .draw(|f| VehiclesScreen::new(vehicles, &mut scroll).render(f, f.area()))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_no_vehicles_shows_empty_state_and_no_rows() {
        let text = render(&[]);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(!text.contains("Nome:"));
    }

    #[test]
    fn test_each_vehicle_gets_a_row() {
        let vehicles = vec![vehicle("Snowspeeder"), vehicle("Imperial Speeder Bike")];
        let text = render(&vehicles);
        assert!(text.contains("Veículos"));
        assert_eq!(text.matches("Nome:").count(), 2);
        assert!(text.contains("Nome: Snowspeeder"));
        assert!(text.contains("Passageiros:"));
    }
}
