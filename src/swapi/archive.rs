use std::fmt;

use async_trait::async_trait;
use futures::future::try_join_all;
use log::{debug, info};

use super::types::{Character, CharacterDetails, Film, Vehicle};

/// Errors that can occur while talking to the remote archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The request never produced a response (DNS, refused connection, timeout).
    Transport(String),
    /// The API answered with a non-success status.
    Status { status: u16, url: String },
    /// The response body was not the record we asked for.
    Decode(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Transport(msg) => write!(f, "network error: {msg}"),
            NetworkError::Status { status, url } => write!(f, "HTTP {status} from {url}"),
            NetworkError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Read-only access to character, vehicle and film records.
#[async_trait]
pub trait Archive: Send + Sync {
    /// Fetches `/people/{id}/`. The returned record carries `id`.
    async fn fetch_character(&self, id: u32) -> Result<Character, NetworkError>;

    /// Fetches a vehicle by the absolute URL a character links to.
    async fn fetch_vehicle(&self, url: &str) -> Result<Vehicle, NetworkError>;

    /// Fetches a film by the absolute URL a character links to.
    async fn fetch_film(&self, url: &str) -> Result<Film, NetworkError>;
}

/// Fetches every vehicle concurrently. Results keep the order of `urls`;
/// the first failure fails the whole batch.
pub async fn fetch_vehicles(
    archive: &dyn Archive,
    urls: &[String],
) -> Result<Vec<Vehicle>, NetworkError> {
    try_join_all(urls.iter().map(|url| archive.fetch_vehicle(url))).await
}

/// Fetches every film concurrently. Same ordering and failure rules as
/// [`fetch_vehicles`].
pub async fn fetch_films(archive: &dyn Archive, urls: &[String]) -> Result<Vec<Film>, NetworkError> {
    try_join_all(urls.iter().map(|url| archive.fetch_film(url))).await
}

/// Loads a character, then its vehicles and films as two concurrent batches.
pub async fn fetch_details(archive: &dyn Archive, id: u32) -> Result<CharacterDetails, NetworkError> {
    let character = archive.fetch_character(id).await?;
    debug!(
        "Character {} loaded: {} vehicle links, {} film links",
        id,
        character.vehicles.len(),
        character.films.len()
    );

    let (vehicles, films) = futures::try_join!(
        fetch_vehicles(archive, &character.vehicles),
        fetch_films(archive, &character.films)
    )?;

    info!(
        "Details for {} ({}) ready: {} vehicles, {} films",
        character.name,
        id,
        vehicles.len(),
        films.len()
    );
    Ok(CharacterDetails {
        character,
        vehicles,
        films,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeArchive, film, luke, vehicle};

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let archive = FakeArchive::default()
            .with_film("f/2", film("The Empire Strikes Back"))
            .with_film("f/1", film("A New Hope"));
        let urls = vec!["f/2".to_string(), "f/1".to_string()];

        let films = fetch_films(&archive, &urls).await.unwrap();
        let titles: Vec<&str> = films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["The Empire Strikes Back", "A New Hope"]);
    }

    #[tokio::test]
    async fn test_batch_fails_fast_without_partial_results() {
        let archive = FakeArchive::default().with_vehicle("v/14", vehicle("Snowspeeder"));
        let urls = vec!["v/14".to_string(), "v/missing".to_string()];

        let result = fetch_vehicles(&archive, &urls).await;
        assert!(matches!(result, Err(NetworkError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_empty_batch_is_empty() {
        let archive = FakeArchive::default();
        assert!(fetch_vehicles(&archive, &[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_details_resolves_links() {
        let mut character = luke();
        character.vehicles = vec!["v/14".into()];
        character.films = vec!["f/1".into(), "f/2".into()];
        let archive = FakeArchive::default()
            .with_character(character)
            .with_vehicle("v/14", vehicle("Snowspeeder"))
            .with_film("f/1", film("A New Hope"))
            .with_film("f/2", film("The Empire Strikes Back"));

        let details = fetch_details(&archive, 1).await.unwrap();
        assert_eq!(details.character.name, "Luke Skywalker");
        assert_eq!(details.vehicles.len(), 1);
        assert_eq!(details.films[1].title, "The Empire Strikes Back");
    }

    #[tokio::test]
    async fn test_fetch_details_fails_when_character_missing() {
        let archive = FakeArchive::default();
        let err = fetch_details(&archive, 99).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 404 from people/99");
    }
}
