use std::sync::Arc;

use tracing::warn;

use crate::collaborators::{CollaboratorError, FriendDirectory, PlaylistCatalog, SharingLedger};
use crate::server::metrics::record_fanout_failure;

use super::accumulator::FeedAccumulator;
use super::event::Event;

/// Composes the recent activity of a user's friends into one bounded,
/// recency-ranked timeline.
///
/// Purely read/aggregate: the aggregator owns no state beyond the
/// per-call accumulator, and a given upstream state always produces the
/// same output.
pub struct FeedAggregator {
    friends: Arc<dyn FriendDirectory>,
    playlists: Arc<dyn PlaylistCatalog>,
    sharing: Arc<dyn SharingLedger>,
}

impl FeedAggregator {
    pub fn new(
        friends: Arc<dyn FriendDirectory>,
        playlists: Arc<dyn PlaylistCatalog>,
        sharing: Arc<dyn SharingLedger>,
    ) -> Self {
        Self {
            friends,
            playlists,
            sharing,
        }
    }

    /// Aggregate the `amount` most recent friend activities for
    /// `username`, ascending by timestamp.
    ///
    /// Best-effort: any failed collaborator call contributes an empty
    /// batch and the fan-out continues with the remaining sources. The
    /// caller is expected to have verified that `username` exists.
    pub async fn get_feed(&self, username: &str, amount: usize) -> Vec<Event> {
        let mut accumulator = FeedAccumulator::new(amount);

        let friends = absorb("friend list", username, self.friends.friends_of(username).await);

        for friend in &friends {
            let name = friend.friend_name.as_str();

            let their_friends = absorb("friend list", name, self.friends.friends_of(name).await);
            accumulator.extend(
                their_friends
                    .iter()
                    .map(|relation| Event::added_friend(name, &relation.friend_name, relation.created)),
            );

            let playlists = absorb("playlists", name, self.playlists.playlists_of(name).await);
            for playlist in &playlists {
                accumulator.push(Event::playlist_created(name, &playlist.title, playlist.created));

                let songs = absorb("songs", name, self.playlists.songs_in(playlist.id).await);
                accumulator.extend(songs.iter().map(|song| {
                    Event::song_added(name, &song.title, &song.artist, &playlist.title, song.created)
                }));
            }

            let shares = absorb("shares", name, self.sharing.shares_by(name).await);
            accumulator.extend(shares.iter().map(|share| {
                let playlist = share
                    .playlist_title
                    .clone()
                    .unwrap_or_else(|| format!("#{}", share.playlist_id));
                Event::playlist_shared(&share.owner, &share.recipient, &playlist, share.created)
            }));
        }

        accumulator.into_sorted()
    }
}

/// Collapse a failed collaborator call into an empty contribution.
///
/// The loss is logged and counted for operability but never reaches the
/// caller; the feed contract is best-effort completeness.
fn absorb<T>(source: &'static str, subject: &str, result: Result<Vec<T>, CollaboratorError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(err) => {
            warn!("Dropping {} contribution for '{}': {}", source, subject, err);
            record_fanout_failure(source);
            Vec::new()
        }
    }
}
