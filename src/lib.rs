//! Activity Feed Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod collaborators;
pub mod feed;
pub mod server;

// Re-export commonly used types for convenience
pub use collaborators::{
    build_http_client, AccountDirectory, CollaboratorError, FriendDirectory, PlaylistCatalog,
    SharingLedger,
};
pub use feed::FeedAggregator;
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
