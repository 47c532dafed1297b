//! Health Reporter.
//!
//! Liveness only: the handler touches neither storage nor the upstream
//! dataset, so it answers for as long as the process can serve HTTP.

use axum::Json;
use serde::Serialize;

/// Path polled by uptime monitors.
pub const HEALTH_PATH: &str = "/";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
