//! # Routes and the Navigator
//!
//! A [`Route`] is a navigation request: the screen's name plus exactly the
//! parameters that screen needs. Pushing a route onto the [`Navigator`]
//! mounts it as a [`Screen`], which also holds whatever state the screen
//! builds up while it is on the stack.
//!
//! ```text
//! Route::Details { id }      →  Screen::Details(DetailsScreen { id, request, load })
//! Route::Vehicles { .. }     →  Screen::Vehicles(vec)
//! ```
//!
//! Home is the root and is never popped.

use crate::swapi::{CharacterDetails, Film, Vehicle};

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Details { id: u32 },
    Vehicles { vehicles: Vec<Vehicle> },
    Films { films: Vec<Film> },
    About,
}

/// Loading state of a details screen.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(CharacterDetails),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsScreen {
    pub id: u32,
    /// Id of the load currently feeding this screen. Results tagged with any
    /// other id are stale.
    pub request: u64,
    pub load: LoadState,
}

impl DetailsScreen {
    pub fn details(&self) -> Option<&CharacterDetails> {
        match &self.load {
            LoadState::Loaded(details) => Some(details),
            _ => None,
        }
    }
}

/// A mounted route.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Details(DetailsScreen),
    Vehicles(Vec<Vehicle>),
    Films(Vec<Film>),
    About,
}

impl Screen {
    /// Mounts `route`. `request` tags the load a details screen starts with.
    pub fn mount(route: Route, request: u64) -> Self {
        match route {
            Route::Home => Screen::Home,
            Route::Details { id } => Screen::Details(DetailsScreen {
                id,
                request,
                load: LoadState::Loading,
            }),
            Route::Vehicles { vehicles } => Screen::Vehicles(vehicles),
            Route::Films { films } => Screen::Films(films),
            Route::About => Screen::About,
        }
    }

    /// Header title, as the route is named.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Details(_) => "Detalhes",
            Screen::Vehicles(_) => "Veiculos",
            Screen::Films(_) => "Filmes",
            Screen::About => "Sobre",
        }
    }
}

/// Stack-based router. Always holds at least the Home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Home],
        }
    }

    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Pops the top screen. Returns `None` (and keeps the stack) at the root.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> &Screen {
        // The root is never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut Screen {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Finds the details screen still waiting on `request`, anywhere on the stack.
    pub fn details_for_request(&mut self, request: u64) -> Option<&mut DetailsScreen> {
        self.stack.iter_mut().rev().find_map(|screen| match screen {
            Screen::Details(details) if details.request == request => Some(details),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_home_and_never_popped() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), &Screen::Home);
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_push_then_pop_returns_to_previous() {
        let mut nav = Navigator::new();
        nav.push(Screen::mount(Route::Details { id: 1 }, 7));
        nav.push(Screen::mount(Route::Films { films: vec![] }, 0));
        assert_eq!(nav.current().title(), "Filmes");

        assert!(matches!(nav.pop(), Some(Screen::Films(_))));
        assert!(matches!(nav.current(), Screen::Details(d) if d.id == 1 && d.request == 7));
    }

    #[test]
    fn test_mount_details_starts_loading() {
        let screen = Screen::mount(Route::Details { id: 4 }, 1);
        match screen {
            Screen::Details(details) => {
                assert_eq!(details.load, LoadState::Loading);
                assert!(details.details().is_none());
            }
            other => panic!("expected details, got {:?}", other),
        }
    }

    #[test]
    fn test_details_for_request_finds_buried_screen() {
        let mut nav = Navigator::new();
        nav.push(Screen::mount(Route::Details { id: 1 }, 3));
        nav.push(Screen::mount(Route::About, 0));
        assert!(nav.details_for_request(3).is_some());
        assert!(nav.details_for_request(4).is_none());
    }
}
