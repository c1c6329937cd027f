use axum::extract::FromRef;

use crate::collaborators::AccountDirectory;
use crate::feed::FeedAggregator;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedAccountDirectory = Arc<dyn AccountDirectory>;
pub type GuardedFeedAggregator = Arc<FeedAggregator>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub accounts: GuardedAccountDirectory,
    pub aggregator: GuardedFeedAggregator,
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

impl FromRef<ServerState> for GuardedAccountDirectory {
    fn from_ref(input: &ServerState) -> Self {
        input.accounts.clone()
    }
}

impl FromRef<ServerState> for GuardedFeedAggregator {
    fn from_ref(input: &ServerState) -> Self {
        input.aggregator.clone()
    }
}
