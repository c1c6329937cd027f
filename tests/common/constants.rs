//! Shared constants for end-to-end tests
//!
//! When test fixture data changes (usernames, timestamps, etc.),
//! update only this file.

// ============================================================================
// Test Users
// ============================================================================

/// The subject whose feed is requested
pub const SUBJECT_USER: &str = "eva";

/// Friend of the subject, owns the test playlist
pub const FRIEND_ALICE: &str = "alice";

/// Friend of the subject, owns the test share
pub const FRIEND_BOB: &str = "bob";

/// Recipient of bob's share
pub const RECIPIENT_CAROL: &str = "carol";

/// A username no account exists for
pub const UNKNOWN_USER: &str = "nobody";

// ============================================================================
// Test Timestamps (naive ISO-8601, as the persistence layers emit them)
// ============================================================================

pub const T_FRIENDSHIP: &str = "2024-03-01T12:00:00";
pub const T_PLAYLIST_CREATED: &str = "2024-03-01T12:01:00";
pub const T_SONG_ADDED: &str = "2024-03-01T12:02:00";
pub const T_SHARE_CREATED: &str = "2024-03-01T12:05:00";

// ============================================================================
// Test Fixture Data
// ============================================================================

/// alice's playlist id
pub const ALICE_PLAYLIST_ID: i64 = 1;

/// alice's playlist title
pub const ALICE_PLAYLIST_TITLE: &str = "Road Trip";

/// bob's shared playlist id
pub const BOB_PLAYLIST_ID: i64 = 9;

/// bob's shared playlist title
pub const BOB_PLAYLIST_TITLE: &str = "Gym";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for a server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Timeout for individual test HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Outbound collaborator timeout used by the server under test (seconds)
pub const COLLABORATOR_TIMEOUT_SECS: u64 = 1;

/// How long a hanging stub route sleeps; must exceed the collaborator
/// timeout (seconds)
pub const STUB_HANG_SECS: u64 = 3;
