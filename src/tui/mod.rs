//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! key ─▶ route_event() ─▶ Action ─▶ update() ─▶ Effect ─▶ apply_effect()
//!                                      ▲                      │
//!                                      └──── mpsc ◀── tokio load task
//! ```
//!
//! Loads run as tokio tasks and report back as `Action::DetailsLoaded`.
//! While a details screen is loading the loop redraws every ~80ms to animate
//! the spinner; otherwise it only redraws on input or a finished load.

mod component;
pub mod components;
mod event;
mod theme;
mod ui;

use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, mpsc};

use tui_scrollview::ScrollViewState;

use crate::audio::{self, SoundPlayer};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Screen;
use crate::core::state::App;
use crate::swapi::{self, Archive, SwapiClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{DetailsEvent, DetailsState, HomeEvent, HomeState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub home: HomeState,
    pub details: DetailsState,
    /// Scroll position of the card list on top of the stack.
    pub scroll: ScrollViewState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            home: HomeState::new(),
            details: DetailsState::default(),
            scroll: ScrollViewState::default(),
        }
    }

    /// Called whenever the stack changes: a freshly shown screen starts at
    /// the top with its first button focused.
    fn screen_changed(&mut self) {
        self.scroll = ScrollViewState::default();
        self.details = DetailsState::default();
    }
}

/// Maps a terminal event to a core action for the screen on top of the stack.
/// Presentation-only events (selection, scrolling) are handled here and
/// produce no action.
pub fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::InputChar('q') => return Some(Action::Quit),
        TuiEvent::Back => return Some(Action::Back),
        _ => {}
    }

    match app.navigator.current() {
        Screen::Home => tui.home.handle_event(event).map(|home_event| match home_event {
            HomeEvent::Open(id) => Action::OpenCharacter(id),
            HomeEvent::About => Action::OpenAbout,
        }),
        Screen::Details(_) => tui
            .details
            .handle_event(event)
            .map(|details_event| match details_event {
                DetailsEvent::OpenVehicles => Action::OpenVehicles,
                DetailsEvent::OpenFilms => Action::OpenFilms,
                DetailsEvent::Retry => Action::RetryLoad,
            }),
        Screen::Vehicles(_) | Screen::Films(_) | Screen::About => {
            components::card_list::handle_scroll(&mut tui.scroll, event);
            None
        }
    }
}

/// Everything `apply_effect` needs to carry out side effects.
struct Effects<'a> {
    archive: &'a Arc<dyn Archive>,
    sounds: &'a mut dyn SoundPlayer,
    tx: &'a mpsc::Sender<Action>,
    loads: &'a mut HashMap<u64, tokio::task::AbortHandle>,
}

/// Carries out an effect. Returns true if the app should quit.
fn apply_effect(effect: Effect, ctx: &mut Effects<'_>) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::Load { request, id } => {
            let handle = spawn_load(ctx.archive.clone(), request, id, ctx.tx.clone());
            ctx.loads.insert(request, handle);
        }
        Effect::CancelLoad { request } => {
            if let Some(handle) = ctx.loads.remove(&request) {
                debug!("Aborting load {}", request);
                handle.abort();
            }
        }
        Effect::PlayCue => {
            if let Err(e) = ctx.sounds.play_cue() {
                warn!("Interaction sound failed: {}", e);
            }
        }
    }
    false
}

fn spawn_load(
    archive: Arc<dyn Archive>,
    request: u64,
    id: u32,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning details load for id={} (request={})", id, request);
    let handle = tokio::spawn(async move {
        let result = swapi::fetch_details(archive.as_ref(), id).await;
        if tx.send(Action::DetailsLoaded { request, result }).is_err() {
            warn!("Failed to send load result {}: receiver dropped", request);
        }
    });
    handle.abort_handle()
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let archive: Arc<dyn Archive> =
        Arc::new(SwapiClient::new(config.base_url.clone(), config.timeout));

    // Owned for the whole loop; dropping it stops the ambience.
    let mut sounds = audio::open(&config.audio);
    if let Err(e) = sounds.start_ambience() {
        error!("Failed to load or play background sound: {}", e);
    }

    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut loads: HashMap<u64, tokio::task::AbortHandle> = HashMap::new();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short poll while the spinner runs, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut ctx = Effects {
            archive: &archive,
            sounds: &mut *sounds,
            tx: &tx,
            loads: &mut loads,
        };

        // Process first event + drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = route_event(&app, &mut tui, &event) else {
                continue;
            };

            let depth = app.navigator.depth();
            let effect = update(&mut app, action);
            if app.navigator.depth() != depth {
                tui.screen_changed();
            }
            if apply_effect(effect, &mut ctx) {
                break 'event_loop;
            }
        }

        // Handle finished loads
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if let Action::DetailsLoaded { request, .. } = &action {
                ctx.loads.remove(request);
            }
            let effect = update(&mut app, action);
            if apply_effect(effect, &mut ctx) {
                break 'event_loop;
            }
        }
    }

    for (_, handle) in loads.drain() {
        handle.abort();
    }
    ratatui::restore();
    sounds.stop_ambience();
    info!("Holonet shutting down");
    Ok(())
}
