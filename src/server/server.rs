use anyhow::Result;
use std::time::{Duration, Instant};

use tracing::info;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::collaborators::CollaboratorError;
use crate::feed::Event;

use super::{log_requests, metrics, state::*, ServerConfig};

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct FeedQuery {
    pub amount: Option<usize>,
}

#[derive(Serialize)]
struct FeedActivity {
    date: String,
    title: &'static str,
    description: String,
}

impl From<Event> for FeedActivity {
    fn from(event: Event) -> Self {
        FeedActivity {
            date: event.occurred_at.to_rfc3339(),
            title: event.title,
            description: event.description,
        }
    }
}

#[derive(Serialize)]
struct FeedResponse {
    status: &'static str,
    result: Vec<FeedActivity>,
}

#[derive(Serialize)]
struct ErrorResponse {
    status: &'static str,
    message: String,
}

/// Failures that reach the feed endpoint's caller. Everything else is
/// absorbed into a partial feed.
#[derive(Debug)]
pub enum FeedError {
    NotFound(String),
    UpstreamUnavailable(String),
    InvalidAmount,
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            FeedError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            FeedError::UpstreamUnavailable(message) => (StatusCode::BAD_GATEWAY, message),
            FeedError::InvalidAmount => (
                StatusCode::BAD_REQUEST,
                "amount must be a positive integer".to_string(),
            ),
        };
        (
            status,
            Json(ErrorResponse {
                status: STATUS_ERROR,
                message,
            }),
        )
            .into_response()
    }
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
    };
    Json(stats)
}

async fn get_feed(
    State(state): State<ServerState>,
    Path(username): Path<String>,
    Query(query): Query<FeedQuery>,
) -> Result<Response, FeedError> {
    let amount = match query.amount {
        None => state.config.default_feed_amount,
        Some(0) => return Err(FeedError::InvalidAmount),
        Some(n) => n,
    };

    // Existence precheck; the fan-out is never attempted for an unknown
    // subject.
    match state.accounts.require_user_exists(&username).await {
        Ok(()) => {}
        Err(CollaboratorError::NotFound(message)) => return Err(FeedError::NotFound(message)),
        Err(err @ CollaboratorError::Unreachable(_)) => {
            return Err(FeedError::UpstreamUnavailable(err.to_string()))
        }
    }

    let events = state.aggregator.get_feed(&username, amount).await;
    metrics::record_feed_size(events.len());

    Ok(Json(FeedResponse {
        status: STATUS_SUCCESS,
        result: events.into_iter().map(FeedActivity::from).collect(),
    })
    .into_response())
}

pub fn make_app(
    config: ServerConfig,
    accounts: GuardedAccountDirectory,
    aggregator: GuardedFeedAggregator,
) -> Router {
    let state = ServerState {
        config,
        start_time: Instant::now(),
        accounts,
        aggregator,
    };

    Router::new()
        .route("/", get(home))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/feeds/{username}", get(get_feed))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(
    config: ServerConfig,
    accounts: GuardedAccountDirectory,
    aggregator: GuardedFeedAggregator,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, accounts, aggregator);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Ready to serve at port {}!", port);

    Ok(axum::serve(listener, app).await?)
}
