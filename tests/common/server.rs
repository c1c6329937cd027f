//! Test server lifecycle management
//!
//! Spawns the feed server against stub collaborators. Each test gets an
//! isolated server and stub constellation on random ports.

use super::collaborators::StubCollaborators;
use super::constants::*;
use activity_feed_server::collaborators::{
    build_http_client, HttpAccountDirectory, HttpFriendDirectory, HttpPlaylistCatalog,
    HttpSharingLedger,
};
use activity_feed_server::feed::FeedAggregator;
use activity_feed_server::server::server::make_app;
use activity_feed_server::server::{RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Where each collaborator family of the server under test points.
struct Upstreams {
    accounts_url: String,
    fanout_url: String,
}

/// Test server instance wired to stub collaborators
///
/// When dropped, the server and stubs gracefully shut down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The stub collaborators, for seeding fixture data
    pub stubs: StubCollaborators,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

/// A base URL nothing listens on; connections are refused immediately.
fn dead_base_url() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind throwaway port");
    let port = listener
        .local_addr()
        .expect("Failed to get throwaway address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

impl TestServer {
    /// Spawns a server with every collaborator served by the stubs.
    pub async fn spawn() -> Self {
        let stubs = StubCollaborators::spawn().await;
        let upstreams = Upstreams {
            accounts_url: stubs.base_url.clone(),
            fanout_url: stubs.base_url.clone(),
        };
        Self::spawn_with(stubs, upstreams).await
    }

    /// Spawns a server whose accounts service is unreachable.
    pub async fn spawn_with_dead_accounts() -> Self {
        let stubs = StubCollaborators::spawn().await;
        let upstreams = Upstreams {
            accounts_url: dead_base_url(),
            fanout_url: stubs.base_url.clone(),
        };
        Self::spawn_with(stubs, upstreams).await
    }

    /// Spawns a server whose fan-out collaborators (friends, playlists,
    /// sharing) are unreachable while accounts stays served.
    pub async fn spawn_with_dead_fanout() -> Self {
        let stubs = StubCollaborators::spawn().await;
        let upstreams = Upstreams {
            accounts_url: stubs.base_url.clone(),
            fanout_url: dead_base_url(),
        };
        Self::spawn_with(stubs, upstreams).await
    }

    async fn spawn_with(stubs: StubCollaborators, upstreams: Upstreams) -> Self {
        // Same bring-up as main; registration is a no-op when repeated
        activity_feed_server::server::metrics::init_metrics();

        let http_client = build_http_client(Duration::from_secs(COLLABORATOR_TIMEOUT_SECS))
            .expect("Failed to build collaborator HTTP client");

        let accounts = Arc::new(HttpAccountDirectory::new(
            http_client.clone(),
            &upstreams.accounts_url,
        ));
        let aggregator = Arc::new(FeedAggregator::new(
            Arc::new(HttpFriendDirectory::new(
                http_client.clone(),
                &upstreams.fanout_url,
            )),
            Arc::new(HttpPlaylistCatalog::new(
                http_client.clone(),
                &upstreams.fanout_url,
            )),
            Arc::new(HttpSharingLedger::new(http_client, &upstreams.fanout_url)),
        ));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port,
            default_feed_amount: 10,
        };
        let app = make_app(config, accounts, aggregator);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            stubs,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the stats endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => {
                    return;
                }
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
