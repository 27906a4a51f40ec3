//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;

use async_trait::async_trait;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::audio::{AudioError, SoundPlayer};
use crate::core::state::App;
use crate::swapi::{Archive, Character, CharacterDetails, Film, NetworkError, Vehicle};

/// An in-memory archive keyed by URL. Characters are keyed `people/{id}`.
/// Anything missing answers 404.
#[derive(Default)]
pub struct FakeArchive {
    characters: HashMap<u32, Character>,
    vehicles: HashMap<String, Vehicle>,
    films: HashMap<String, Film>,
}

impl FakeArchive {
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.insert(character.id, character);
        self
    }

    pub fn with_vehicle(mut self, url: &str, vehicle: Vehicle) -> Self {
        self.vehicles.insert(url.to_string(), vehicle);
        self
    }

    pub fn with_film(mut self, url: &str, film: Film) -> Self {
        self.films.insert(url.to_string(), film);
        self
    }
}

fn not_found(url: String) -> NetworkError {
    NetworkError::Status { status: 404, url }
}

#[async_trait]
impl Archive for FakeArchive {
    async fn fetch_character(&self, id: u32) -> Result<Character, NetworkError> {
        self.characters
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(format!("people/{id}")))
    }

    async fn fetch_vehicle(&self, url: &str) -> Result<Vehicle, NetworkError> {
        self.vehicles
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(url.to_string()))
    }

    async fn fetch_film(&self, url: &str) -> Result<Film, NetworkError> {
        self.films
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(url.to_string()))
    }
}

/// Counts what would have been played.
#[derive(Default)]
pub struct RecordingPlayer {
    pub ambience_playing: bool,
    pub cues: usize,
    pub fail_cues: bool,
}

impl SoundPlayer for RecordingPlayer {
    fn start_ambience(&mut self) -> Result<(), AudioError> {
        self.ambience_playing = true;
        Ok(())
    }

    fn stop_ambience(&mut self) {
        self.ambience_playing = false;
    }

    fn play_cue(&mut self) -> Result<(), AudioError> {
        if self.fail_cues {
            return Err(AudioError::Playback("no device".to_string()));
        }
        self.cues += 1;
        Ok(())
    }
}

pub fn test_app() -> App {
    App::new()
}

/// Luke Skywalker as SWAPI returns him, without links.
pub fn luke() -> Character {
    Character {
        id: 1,
        name: "Luke Skywalker".to_string(),
        height: "172".to_string(),
        mass: "77".to_string(),
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        gender: "male".to_string(),
        vehicles: Vec::new(),
        films: Vec::new(),
    }
}

pub fn vehicle(name: &str) -> Vehicle {
    Vehicle {
        name: name.to_string(),
        model: format!("{name} model"),
        passengers: "0".to_string(),
    }
}

pub fn film(title: &str) -> Film {
    Film {
        title: title.to_string(),
        director: "George Lucas".to_string(),
        release_date: "1977-05-25".to_string(),
    }
}

/// Luke with `vehicles` vehicles and `films` films, links and records matching.
pub fn loaded_details(vehicles: usize, films: usize) -> CharacterDetails {
    let mut character = luke();
    let vehicles: Vec<Vehicle> = (1..=vehicles).map(|i| vehicle(&format!("Vehicle {i}"))).collect();
    let films: Vec<Film> = (1..=films).map(|i| film(&format!("Episode {i}"))).collect();
    character.vehicles = (1..=vehicles.len()).map(|i| format!("v/{i}")).collect();
    character.films = (1..=films.len()).map(|i| format!("f/{i}")).collect();
    CharacterDetails {
        character,
        vehicles,
        films,
    }
}

/// Concatenates every cell symbol of the test terminal's buffer.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
