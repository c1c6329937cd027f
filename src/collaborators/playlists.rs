use async_trait::async_trait;

use super::error::CollaboratorError;
use super::models::{PlaylistRef, ResultEnvelope, SongRef, WirePlaylist, WireSong};

const SERVICE: &str = "playlists";

/// Read access to the playlist catalog service.
#[async_trait]
pub trait PlaylistCatalog: Send + Sync {
    /// Get the playlists owned by a user.
    async fn playlists_of(&self, username: &str) -> Result<Vec<PlaylistRef>, CollaboratorError>;

    /// Get the songs of a playlist.
    async fn songs_in(&self, playlist_id: i64) -> Result<Vec<SongRef>, CollaboratorError>;
}

/// reqwest-backed [`PlaylistCatalog`].
pub struct HttpPlaylistCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPlaylistCatalog {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PlaylistCatalog for HttpPlaylistCatalog {
    async fn playlists_of(&self, username: &str) -> Result<Vec<PlaylistRef>, CollaboratorError> {
        let url = format!(
            "{}/playlists/{}",
            self.base_url,
            urlencoding::encode(username)
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| CollaboratorError::Unreachable(SERVICE))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CollaboratorError::NotFound(format!(
                "no playlists for user '{}'",
                username
            )));
        }
        if !response.status().is_success() {
            return Err(CollaboratorError::Unreachable(SERVICE));
        }

        let body: ResultEnvelope<WirePlaylist> = response
            .json()
            .await
            .map_err(|_| CollaboratorError::Unreachable(SERVICE))?;

        Ok(body
            .result
            .unwrap_or_default()
            .into_iter()
            .filter_map(WirePlaylist::validate)
            .collect())
    }

    async fn songs_in(&self, playlist_id: i64) -> Result<Vec<SongRef>, CollaboratorError> {
        let url = format!("{}/playlists/{}", self.base_url, playlist_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| CollaboratorError::Unreachable(SERVICE))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CollaboratorError::NotFound(format!(
                "no playlist with id '{}' exists",
                playlist_id
            )));
        }
        if !response.status().is_success() {
            return Err(CollaboratorError::Unreachable(SERVICE));
        }

        // The by-id lookup returns playlist meta alongside the song list;
        // only the songs feed the timeline.
        let body: ResultEnvelope<WireSong> = response
            .json()
            .await
            .map_err(|_| CollaboratorError::Unreachable(SERVICE))?;

        Ok(body
            .result
            .unwrap_or_default()
            .into_iter()
            .filter_map(WireSong::validate)
            .collect())
    }
}
