//! HTTP clients for the external collaborator services.
//!
//! Each collaborator is reached through a thin wrapper over a shared
//! `reqwest` client with a mandatory request timeout. Wrappers resolve to
//! a tagged [`CollaboratorError`] kind instead of transport errors, and
//! malformed records are dropped during parsing rather than failing the
//! call.

mod accounts;
mod error;
mod friends;
mod models;
mod playlists;
mod sharing;

pub use accounts::{AccountDirectory, HttpAccountDirectory};
pub use error::CollaboratorError;
pub use friends::{FriendDirectory, HttpFriendDirectory};
pub use models::{FriendRef, PlaylistRef, ShareRef, SongRef};
pub use playlists::{HttpPlaylistCatalog, PlaylistCatalog};
pub use sharing::{HttpSharingLedger, SharingLedger};

use std::time::Duration;

/// Build the outbound HTTP client shared by all collaborator wrappers.
///
/// The timeout bounds every call in the fan-out: worst-case feed latency
/// is the timeout times the number of outbound calls, since failed calls
/// are never retried.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}
