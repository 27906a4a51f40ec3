//! reqwest-backed [`Archive`] talking to SWAPI over plain HTTP GETs.
//!
//! No retries, no caching, no auth. Every call is a fresh request.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::archive::{Archive, NetworkError};
use super::types::{Character, Film, Vehicle};

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

pub struct SwapiClient {
    base_url: String,
    client: reqwest::Client,
}

impl SwapiClient {
    /// Creates a client rooted at `base_url` (e.g. `https://swapi.dev/api`).
    /// `timeout` bounds each request; `None` leaves reqwest's default (no timeout).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client ({}), using defaults", e);
            reqwest::Client::new()
        });

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn character_url(&self, id: u32) -> String {
        format!("{}/people/{}/", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, NetworkError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            warn!("SWAPI error: {} for {}", status, url);
            return Err(NetworkError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| NetworkError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Archive for SwapiClient {
    async fn fetch_character(&self, id: u32) -> Result<Character, NetworkError> {
        let mut character: Character = self.get_json(&self.character_url(id)).await?;
        character.id = id;
        Ok(character)
    }

    async fn fetch_vehicle(&self, url: &str) -> Result<Vehicle, NetworkError> {
        self.get_json(url).await
    }

    async fn fetch_film(&self, url: &str) -> Result<Film, NetworkError> {
        self.get_json(url).await
    }
}
