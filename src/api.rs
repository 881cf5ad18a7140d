use async_trait::async_trait;
use url::Url;

use crate::error::ApiError;
use crate::models::{NewPlayer, Player};

/// The four roster operations. The controller is written against this trait
/// so tests can script a fake instead of standing up a server.
#[async_trait]
pub trait RosterApi: Send + Sync {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError>;
    async fn get_player(&self, id: u64) -> Result<Player, ApiError>;
    async fn create_player(&self, player: &NewPlayer) -> Result<Player, ApiError>;
    async fn delete_player(&self, id: u64) -> Result<(), ApiError>;
}

/// HTTP client for the Puppy Bowl API. One request per operation, no retries,
/// errors surfaced to the caller.
pub struct PuppyBowlClient {
    http: reqwest::Client,
    base: Url,
}

impl PuppyBowlClient {
    /// `base` is the fixed endpoint root including the cohort segment, with a
    /// trailing slash (see `Config::endpoint`).
    pub fn new(base: Url, http: reqwest::Client) -> Self {
        Self { http, base }
    }

    fn players_url(&self) -> Url {
        self.base
            .join("players")
            .expect("players is hard-coded and known to be good")
    }

    fn player_url(&self, id: u64) -> Url {
        self.base
            .join(&format!("players/{id}"))
            .expect("players/{id} is hard-coded and known to be good")
    }
}

#[async_trait]
impl RosterApi for PuppyBowlClient {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        let url = self.players_url();
        tracing::debug!(%url, "fetching roster");
        self.http
            .get(url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| ApiError::from_reqwest(&url, source))?
            .json::<Vec<Player>>()
            .await
            .map_err(|source| ApiError::from_reqwest(&url, source))
    }

    async fn get_player(&self, id: u64) -> Result<Player, ApiError> {
        let url = self.player_url(id);
        tracing::debug!(%url, "fetching player");
        self.http
            .get(url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| ApiError::from_reqwest(&url, source))?
            .json::<Player>()
            .await
            .map_err(|source| ApiError::from_reqwest(&url, source))
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<Player, ApiError> {
        let url = self.players_url();
        tracing::debug!(%url, name = %player.name, "creating player");
        self.http
            .post(url.clone())
            .json(player)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| ApiError::from_reqwest(&url, source))?
            .json::<Player>()
            .await
            .map_err(|source| ApiError::from_reqwest(&url, source))
    }

    async fn delete_player(&self, id: u64) -> Result<(), ApiError> {
        let url = self.player_url(id);
        tracing::debug!(%url, "deleting player");
        // The server sends a JSON envelope on delete; status is all we need.
        self.http
            .delete(url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| ApiError::from_reqwest(&url, source))?;
        Ok(())
    }
}
