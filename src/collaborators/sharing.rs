use async_trait::async_trait;

use super::error::CollaboratorError;
use super::models::{ResultEnvelope, ShareRef, WireShare};

const SERVICE: &str = "playlists_sharing";

/// Read access to the playlist sharing ledger.
#[async_trait]
pub trait SharingLedger: Send + Sync {
    /// Get the sharing records where the given user is the owner.
    async fn shares_by(&self, owner: &str) -> Result<Vec<ShareRef>, CollaboratorError>;
}

/// reqwest-backed [`SharingLedger`].
pub struct HttpSharingLedger {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSharingLedger {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SharingLedger for HttpSharingLedger {
    async fn shares_by(&self, owner: &str) -> Result<Vec<ShareRef>, CollaboratorError> {
        let url = format!(
            "{}/playlists/{}/shared",
            self.base_url,
            urlencoding::encode(owner)
        );
        let response = self
            .client
            .get(&url)
            .query(&[("usernameIdentity", "owner")])
            .send()
            .await
            .map_err(|_| CollaboratorError::Unreachable(SERVICE))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CollaboratorError::NotFound(format!(
                "no sharing records for user '{}'",
                owner
            )));
        }
        if !response.status().is_success() {
            return Err(CollaboratorError::Unreachable(SERVICE));
        }

        let body: ResultEnvelope<WireShare> = response
            .json()
            .await
            .map_err(|_| CollaboratorError::Unreachable(SERVICE))?;

        Ok(body
            .result
            .unwrap_or_default()
            .into_iter()
            .filter_map(WireShare::validate)
            .collect())
    }
}
