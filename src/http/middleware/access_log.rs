//! Access Logger middleware.
//!
//! Observes every request/response pair and hands one [`AccessLogEntry`] to
//! the configured [`AccessLogSink`]. It never short-circuits the pipeline and
//! a failing sink never changes the response.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header::ORIGIN, Request},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Structured access log entry.
#[derive(Debug, Clone, Serialize)]
pub struct AccessLogEntry {
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub path: String,
    pub origin: Option<String>,
    pub status: u16,
    pub latency_ms: f64,
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("access log sink unavailable: {0}")]
    Unavailable(String),
}

/// Destination for access log entries.
///
/// Implementations must be cheap; they run on the request path.
pub trait AccessLogSink: Send + Sync + 'static {
    fn record(&self, entry: &AccessLogEntry) -> Result<(), SinkError>;
}

/// Writes entries as `tracing` events under the `access_log` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AccessLogSink for TracingSink {
    fn record(&self, entry: &AccessLogEntry) -> Result<(), SinkError> {
        tracing::info!(
            target: "access_log",
            timestamp = %entry.timestamp.to_rfc3339(),
            method = %entry.method,
            path = %entry.path,
            origin = entry.origin.as_deref().unwrap_or("-"),
            status = entry.status,
            latency_ms = entry.latency_ms,
            "Request completed"
        );
        Ok(())
    }
}

pub async fn access_log_middleware(
    State(sink): State<Arc<dyn AccessLogSink>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let timestamp = Utc::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let origin = req
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    tracing::debug!(method = %method, path = %path, "Request received");

    let response = next.run(req).await;

    let entry = AccessLogEntry {
        timestamp,
        method,
        path,
        origin,
        status: response.status().as_u16(),
        latency_ms: start_time.elapsed().as_secs_f64() * 1000.0,
    };

    match panic::catch_unwind(AssertUnwindSafe(|| sink.record(&entry))) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::debug!(error = %e, "Access log entry dropped"),
        Err(_) => tracing::debug!("Access log sink panicked, entry dropped"),
    }

    response
}
