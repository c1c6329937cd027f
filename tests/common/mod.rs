//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end
//! tests. Tests should only import from this module, not from internal
//! submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestClient, TestServer, SUBJECT_USER};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_feed_for_known_user() {
//!     let server = TestServer::spawn().await;
//!     server.stubs.seed_default_scenario();
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.get_feed(SUBJECT_USER).await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod client;
mod constants;
mod server;

// Public API - this is what tests import
pub use client::TestClient;
pub use constants::*;
pub use server::TestServer;

#[allow(unused_imports)]
pub use collaborators::StubCollaborators;
