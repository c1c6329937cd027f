use async_trait::async_trait;

use super::error::CollaboratorError;
use super::models::{FriendRef, ResultEnvelope, WireFriend};

const SERVICE: &str = "friends";

/// Read access to the friend-graph service.
#[async_trait]
pub trait FriendDirectory: Send + Sync {
    /// Get the full friend list of a user.
    ///
    /// The list is always requested unfiltered; size bounding happens in
    /// the aggregator, never upstream.
    async fn friends_of(&self, username: &str) -> Result<Vec<FriendRef>, CollaboratorError>;
}

/// reqwest-backed [`FriendDirectory`].
pub struct HttpFriendDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFriendDirectory {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FriendDirectory for HttpFriendDirectory {
    async fn friends_of(&self, username: &str) -> Result<Vec<FriendRef>, CollaboratorError> {
        let url = format!(
            "{}/friends/{}",
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
                "no friend list for user '{}'",
                username
            )));
        }
        if !response.status().is_success() {
            return Err(CollaboratorError::Unreachable(SERVICE));
        }

        let body: ResultEnvelope<WireFriend> = response
            .json()
            .await
            .map_err(|_| CollaboratorError::Unreachable(SERVICE))?;

        Ok(body
            .result
            .unwrap_or_default()
            .into_iter()
            .filter_map(WireFriend::validate)
            .collect())
    }
}
