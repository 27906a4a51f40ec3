//! Films screen: renders the list carried by the route, in the order the
//! character links them.

use ratatui::Frame;
use ratatui::layout::Rect;
use tui_scrollview::ScrollViewState;

use crate::swapi::Film;
use crate::tui::component::Component;
use crate::tui::components::card_list::{Card, CardList};

pub const EMPTY_MESSAGE: &str = "Não há filmes disponíveis.";

pub struct FilmsScreen<'a> {
    films: &'a [Film],
    scroll: &'a mut ScrollViewState,
}

impl<'a> FilmsScreen<'a> {
    pub fn new(films: &'a [Film], scroll: &'a mut ScrollViewState) -> Self {
        Self { films, scroll }
    }
}

fn card(film: &Film) -> Card {
    vec![
        ("Título", film.title.clone()),
        ("Diretor", film.director.clone()),
        ("Data de Lançamento", film.release_date.clone()),
    ]
}

impl Component for FilmsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cards = self.films.iter().map(card).collect();
        CardList::new("Filmes", EMPTY_MESSAGE, cards, &mut *self.scroll).render(frame, area);
    }
}
