//! Wire models for collaborator responses.
//!
//! Every field is optional on the wire: collaborators are parsed
//! defensively, and records missing a required field are dropped during
//! projection instead of failing the call.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// Envelope shared by the collaborator list responses.
#[derive(Deserialize)]
pub(crate) struct ResultEnvelope<T> {
    pub result: Option<Vec<T>>,
}

#[derive(Deserialize)]
pub(crate) struct WireFriend {
    pub friend_name: Option<String>,
    pub created: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct WirePlaylist {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub created: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct WireSong {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub created: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct WireShare {
    pub recipient: Option<String>,
    pub owner: Option<String>,
    pub id: Option<i64>,
    pub title: Option<String>,
    pub created: Option<String>,
}

/// A friend relation held by a user.
#[derive(Debug, Clone)]
pub struct FriendRef {
    pub friend_name: String,
    pub created: DateTime<Utc>,
}

/// A playlist owned by a user, as returned by the by-username listing.
#[derive(Debug, Clone)]
pub struct PlaylistRef {
    pub id: i64,
    pub title: String,
    pub created: DateTime<Utc>,
}

/// A song inside a playlist.
#[derive(Debug, Clone)]
pub struct SongRef {
    pub artist: String,
    pub title: String,
    pub created: DateTime<Utc>,
}

/// An outgoing playlist sharing record.
///
/// The ledger does not always know the playlist title; display falls back
/// to the id when it is absent.
#[derive(Debug, Clone)]
pub struct ShareRef {
    pub recipient: String,
    pub owner: String,
    pub playlist_id: i64,
    pub playlist_title: Option<String>,
    pub created: DateTime<Utc>,
}

impl WireFriend {
    pub(crate) fn validate(self) -> Option<FriendRef> {
        Some(FriendRef {
            friend_name: self.friend_name?,
            created: parse_timestamp(&self.created?)?,
        })
    }
}

impl WirePlaylist {
    pub(crate) fn validate(self) -> Option<PlaylistRef> {
        Some(PlaylistRef {
            id: self.id?,
            title: self.title?,
            created: parse_timestamp(&self.created?)?,
        })
    }
}

impl WireSong {
    pub(crate) fn validate(self) -> Option<SongRef> {
        Some(SongRef {
            artist: self.artist?,
            title: self.title?,
            created: parse_timestamp(&self.created?)?,
        })
    }
}

impl WireShare {
    pub(crate) fn validate(self) -> Option<ShareRef> {
        Some(ShareRef {
            recipient: self.recipient?,
            owner: self.owner?,
            playlist_id: self.id?,
            playlist_title: self.title,
            created: parse_timestamp(&self.created?)?,
        })
    }
}

/// Parse a collaborator ISO-8601 timestamp into a comparable time value.
///
/// Collaborators emit both offset-carrying and naive timestamps; naive
/// values are taken as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
