//! # Core Application Logic
//!
//! This module contains Holonet's navigation and screen state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (navigator)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   SWAPI    │
//!           │  Adapter   │              │  + audio   │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`route`]: Typed routes, mounted screens and the navigator stack
//! - [`roster`]: Static home-screen characters and developer credits
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod roster;
pub mod route;
pub mod state;
