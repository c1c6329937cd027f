//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per feed-server endpoint. When routes
//! or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /feeds/{username}
    pub async fn get_feed(&self, username: &str) -> Response {
        self.client
            .get(format!("{}/feeds/{}", self.base_url, username))
            .send()
            .await
            .expect("Get feed request failed")
    }

    /// GET /feeds/{username}?amount={amount}
    pub async fn get_feed_with_amount(&self, username: &str, amount: usize) -> Response {
        self.client
            .get(format!(
                "{}/feeds/{}?amount={}",
                self.base_url, username, amount
            ))
            .send()
            .await
            .expect("Get feed request failed")
    }

    /// GET /feeds/{username}?amount={raw} with an arbitrary amount string
    pub async fn get_feed_with_raw_amount(&self, username: &str, raw: &str) -> Response {
        self.client
            .get(format!(
                "{}/feeds/{}?amount={}",
                self.base_url, username, raw
            ))
            .send()
            .await
            .expect("Get feed request failed")
    }

    /// GET /
    pub async fn get_stats(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Get stats request failed")
    }

    /// GET /metrics
    pub async fn get_metrics(&self) -> Response {
        self.client
            .get(format!("{}/metrics", self.base_url))
            .send()
            .await
            .expect("Get metrics request failed")
    }
}
