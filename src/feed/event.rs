use chrono::{DateTime, Utc};

pub const TITLE_ADDED_FRIEND: &str = "Added Friend";
pub const TITLE_PLAYLIST_CREATED: &str = "Playlist created";
pub const TITLE_SONG_ADDED: &str = "Song added to playlist";
pub const TITLE_PLAYLIST_SHARED: &str = "Playlist Shared";

/// A normalized, displayable unit of friend activity.
///
/// Immutable once constructed: the aggregator projects collaborator
/// records into events and never touches them again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub occurred_at: DateTime<Utc>,
    pub title: &'static str,
    pub description: String,
}

impl Event {
    pub fn added_friend(friend: &str, their_friend: &str, at: DateTime<Utc>) -> Self {
        Event {
            occurred_at: at,
            title: TITLE_ADDED_FRIEND,
            description: format!("{} added {} as a friend", friend, their_friend),
        }
    }

    pub fn playlist_created(friend: &str, playlist_title: &str, at: DateTime<Utc>) -> Self {
        Event {
            occurred_at: at,
            title: TITLE_PLAYLIST_CREATED,
            description: format!("{} created the playlist '{}'", friend, playlist_title),
        }
    }

    pub fn song_added(
        friend: &str,
        song_title: &str,
        artist: &str,
        playlist_title: &str,
        at: DateTime<Utc>,
    ) -> Self {
        Event {
            occurred_at: at,
            title: TITLE_SONG_ADDED,
            description: format!(
                "{} added the song '{}' by {} to the playlist '{}'",
                friend, song_title, artist, playlist_title
            ),
        }
    }

    pub fn playlist_shared(
        owner: &str,
        recipient: &str,
        playlist: &str,
        at: DateTime<Utc>,
    ) -> Self {
        Event {
            occurred_at: at,
            title: TITLE_PLAYLIST_SHARED,
            description: format!(
                "{} shared the playlist '{}' with {}",
                owner, playlist, recipient
            ),
        }
    }
}
