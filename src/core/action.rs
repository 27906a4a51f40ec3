//! # Actions
//!
//! Everything that can happen in Holonet becomes an `Action`.
//! User picks a character? That's `Action::OpenCharacter(id)`.
//! A details load finishes? That's `Action::DetailsLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! event loop must carry out (start a load, play the cue, quit). No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::route::{LoadState, Route, Screen};
use crate::core::state::App;
use crate::swapi::{CharacterDetails, NetworkError};

#[derive(Debug)]
pub enum Action {
    /// Home: open the details of a roster character.
    OpenCharacter(u32),
    /// Details: show the loaded vehicles.
    OpenVehicles,
    /// Details: show the loaded films.
    OpenFilms,
    /// Home header action.
    OpenAbout,
    /// Pop the current screen.
    Back,
    /// Details: start over after a failed load.
    RetryLoad,
    /// A details load finished.
    DetailsLoaded {
        request: u64,
        result: Result<CharacterDetails, NetworkError>,
    },
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Fetch character `id` and its links, reporting back with `request`.
    Load { request: u64, id: u32 },
    /// The screen waiting on `request` is gone.
    CancelLoad { request: u64 },
    /// Play the interaction cue.
    PlayCue,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::OpenCharacter(id) => {
            if !matches!(app.navigator.current(), Screen::Home) {
                return Effect::None;
            }
            let request = app.next_request_id();
            info!("Navigate: Details(id={}) request={}", id, request);
            app.navigator
                .push(Screen::mount(Route::Details { id }, request));
            app.status_message = "Carregando...".to_string();
            Effect::Load { request, id }
        }

        Action::OpenVehicles => open_linked(app, |details| Route::Vehicles {
            vehicles: details.vehicles.clone(),
        }),

        Action::OpenFilms => open_linked(app, |details| Route::Films {
            films: details.films.clone(),
        }),

        Action::OpenAbout => {
            if !matches!(app.navigator.current(), Screen::Home) {
                return Effect::None;
            }
            info!("Navigate: About");
            app.navigator.push(Screen::mount(Route::About, 0));
            Effect::None
        }

        Action::Back => {
            let Some(popped) = app.navigator.pop() else {
                return Effect::None;
            };
            debug!("Navigate: back from {}", popped.title());
            app.status_message.clear();
            match popped {
                Screen::Details(details) if details.load == LoadState::Loading => {
                    Effect::CancelLoad {
                        request: details.request,
                    }
                }
                _ => Effect::None,
            }
        }

        Action::RetryLoad => {
            let request = app.next_request_id();
            let Screen::Details(details) = app.navigator.current_mut() else {
                return Effect::None;
            };
            if !matches!(details.load, LoadState::Failed(_)) {
                return Effect::None;
            }
            info!("Retrying details load for id={} request={}", details.id, request);
            details.request = request;
            details.load = LoadState::Loading;
            let id = details.id;
            app.status_message = "Carregando...".to_string();
            Effect::Load { request, id }
        }

        Action::DetailsLoaded { request, result } => {
            let Some(details) = app.navigator.details_for_request(request) else {
                debug!("Discarding result of stale request {}", request);
                return Effect::None;
            };
            match result {
                Ok(loaded) => {
                    details.load = LoadState::Loaded(loaded);
                    app.status_message.clear();
                }
                Err(e) => {
                    warn!("Details load {} failed: {}", request, e);
                    details.load = LoadState::Failed(e.to_string());
                    app.status_message = "Falha ao carregar".to_string();
                }
            }
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// Pushes a route built from the current details screen's loaded data.
/// Inert unless the details screen is loaded.
fn open_linked(app: &mut App, route: impl FnOnce(&CharacterDetails) -> Route) -> Effect {
    let Screen::Details(screen) = app.navigator.current() else {
        return Effect::None;
    };
    let Some(details) = screen.details() else {
        return Effect::None;
    };
    let id = screen.id;
    let route = route(details);
    app.navigator.push(Screen::mount(route, 0));
    info!("Navigate: {} for id={}", app.navigator.current().title(), id);
    Effect::PlayCue
}
