//! Request logging middleware
#![allow(dead_code)] // Used as middleware

use super::super::state::ServerState;
use crate::server::metrics::record_http_request;
use axum::extract::State;
use axum::{
    body::Body,
    http::{header::HeaderMap, Request, Response},
    middleware::Next,
    response::IntoResponse,
};
use std::time::Instant;
use tracing::info;

#[derive(PartialEq, PartialOrd, Clone, Debug, clap::ValueEnum)]
pub enum RequestsLoggingLevel {
    None,
    Path,
    Headers,
    Body,
}

impl Default for RequestsLoggingLevel {
    fn default() -> Self {
        Self::Path
    }
}

impl std::fmt::Display for RequestsLoggingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

const MAX_LOGGABLE_BODY_LENGTH: usize = 1024;

fn content_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get("content-length")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

fn log_headers(label: &str, headers: &HeaderMap) {
    info!("  {} Headers:", label);
    for (name, value) in headers.iter() {
        info!("    {:?}: {:?}", name, value);
    }
}

async fn log_request_body(request: Request<Body>) -> Request<Body> {
    match content_length(request.headers()) {
        None => {
            info!("  Req Body: Content-length not set.");
            request
        }
        Some(size) if size >= MAX_LOGGABLE_BODY_LENGTH => {
            info!("  Req Body: Too big to log ({:#})", byte_unit::Byte::from(size));
            request
        }
        Some(size) => {
            let (parts, body) = request.into_parts();
            match axum::body::to_bytes(body, size).await {
                Ok(bytes) => {
                    info!("  Req Body:\n{}", String::from_utf8_lossy(&bytes));
                    Request::from_parts(parts, Body::from(bytes))
                }
                Err(err) => {
                    info!("  Req Body: unreadable ({})", err);
                    Request::from_parts(parts, Body::empty())
                }
            }
        }
    }
}

pub async fn log_requests(
    State(state): State<ServerState>,
    mut request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let level = state.config.requests_logging_level.clone();

    let start = Instant::now();
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let path = request.uri().path().to_string();

    if level > RequestsLoggingLevel::None {
        info!(">>> {} {}", method, uri);
    }
    if level >= RequestsLoggingLevel::Headers {
        log_headers("Req", request.headers());
    }
    if level >= RequestsLoggingLevel::Body {
        request = log_request_body(request).await;
    }

    let response: Response<Body> = next.run(request).await;

    if level >= RequestsLoggingLevel::Headers {
        log_headers("Resp", response.headers());
    }

    let status = response.status().as_u16();
    let duration = start.elapsed();

    if level > RequestsLoggingLevel::None {
        info!("<<< {} ({}ms)", status, duration.as_millis());
    }

    record_http_request(&method, &path, status, duration);

    response
}
