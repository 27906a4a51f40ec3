pub mod archive;
pub mod client;
pub mod types;

pub use archive::{Archive, NetworkError, fetch_details, fetch_films, fetch_vehicles};
pub use client::{DEFAULT_BASE_URL, SwapiClient};
pub use types::{Character, CharacterDetails, Film, Vehicle};
