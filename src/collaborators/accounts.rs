use async_trait::async_trait;

use super::error::CollaboratorError;

const SERVICE: &str = "accounts";

/// Existence checks against the account directory service.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Require that the given user exists.
    ///
    /// Any non-success status from the directory means the user does not
    /// exist; a network-level failure means the directory is unreachable.
    async fn require_user_exists(&self, username: &str) -> Result<(), CollaboratorError>;
}

/// reqwest-backed [`AccountDirectory`].
pub struct HttpAccountDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAccountDirectory {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AccountDirectory for HttpAccountDirectory {
    async fn require_user_exists(&self, username: &str) -> Result<(), CollaboratorError> {
        let url = format!(
            "{}/accounts/{}",
            self.base_url,
            urlencoding::encode(username)
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| CollaboratorError::Unreachable(SERVICE))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(CollaboratorError::NotFound(format!(
                "the user '{}' does not exist",
                username
            )))
        }
    }
}
