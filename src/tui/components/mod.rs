//! # TUI Components
//!
//! One component per screen, plus the shared pieces they are built from.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `Header`: gold bar with route title, status and header action
//! - `VehiclesScreen`, `FilmsScreen`, `AboutScreen`: card lists over route data
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components whose presentation state persists in `TuiState` and that emit
//! high-level events:
//! - `HomeState` / `HomeScreen`: roster selection
//! - `DetailsState` / `DetailsView`: button focus
//!
//! ### Props-Based Data Flow
//!
//! Components never reach into `App`. The screen's data comes from the
//! mounted route, passed in by `ui::draw_ui`:
//!
//! ```rust,ignore
//! // Good: the route's payload is explicit
//! FilmsScreen::new(films, &mut tui.scroll).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! FilmsScreen::new().render(frame, area); // reads from App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── header.rs     (shared gold header)
//! ├── card_list.rs  (scrollable card column)
//! ├── home.rs       (roster)
//! ├── details.rs    (character details)
//! ├── vehicles.rs   (vehicle cards)
//! ├── films.rs      (film cards)
//! └── about.rs      (developer credits)
//! ```

pub mod about;
pub mod card_list;
pub mod details;
pub mod films;
pub mod header;
pub mod home;
pub mod vehicles;

pub use about::AboutScreen;
pub use details::{DetailsEvent, DetailsState, DetailsView};
pub use films::FilmsScreen;
pub use header::Header;
pub use home::{HomeEvent, HomeScreen, HomeState};
pub use vehicles::VehiclesScreen;
