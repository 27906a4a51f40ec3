//! # Application State
//!
//! Core state for Holonet. Domain only, no TUI types. Presentation state
//! (list selection, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigator: Navigator      // stack of mounted screens, Home at the root
//! ├── status_message: String    // header status text
//! └── next_request: u64         // id for the next details load
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::route::{LoadState, Navigator, Screen};

pub struct App {
    pub navigator: Navigator,
    pub status_message: String,
    next_request: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            navigator: Navigator::new(),
            status_message: String::new(),
            next_request: 1,
        }
    }

    /// Hands out a fresh load id. Ids are never reused within a session.
    pub fn next_request_id(&mut self) -> u64 {
        let id = self.next_request;
        self.next_request += 1;
        id
    }

    /// True while the visible screen is waiting on the network.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.navigator.current(),
            Screen::Details(details) if details.load == LoadState::Loading
        )
    }
}
