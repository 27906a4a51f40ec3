use serde::{Deserialize, Serialize};

/// A person record from `/people/{id}/`.
///
/// Scalar attributes are kept as the API sends them (strings such as `"172"`
/// or `"unknown"`). The API does not echo the id, so the client stamps the
/// requested one onto the record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Character {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub gender: String,
    /// Absolute URLs of the vehicles this character pilots.
    #[serde(default)]
    pub vehicles: Vec<String>,
    /// Absolute URLs of the films this character appears in.
    #[serde(default)]
    pub films: Vec<String>,
}

impl Character {
    /// The six labelled attributes shown on the details screen, in display order.
    pub fn attributes(&self) -> [(&'static str, &str); 6] {
        [
            ("Altura", &self.height),
            ("Peso", &self.mass),
            ("Cor do cabelo", &self.hair_color),
            ("Cor da pele", &self.skin_color),
            ("Cor dos olhos", &self.eye_color),
            ("Gênero", &self.gender),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub name: String,
    pub model: String,
    pub passengers: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub title: String,
    pub director: String,
    pub release_date: String,
}

/// Everything the details screen needs: the character plus its resolved links.
///
/// `vehicles` and `films` follow the order of the character's URL lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetails {
    pub character: Character,
    pub vehicles: Vec<Vehicle>,
    pub films: Vec<Film>,
}
