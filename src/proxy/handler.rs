//! `GET /api/fetch-schools`.

use std::error::Error as _;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::proxy::client::DatasetClient;
use crate::proxy::envelope::EnvelopeShape;

/// Route path relative to the `/api` mount point.
pub const FETCH_SCHOOLS_PATH: &str = "/fetch-schools";

/// Body of every fetch failure, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

#[derive(Clone)]
pub struct ProxyState {
    pub client: Arc<DatasetClient>,
}

#[derive(Debug, Serialize)]
struct ProxyErrorBody {
    error: &'static str,
}

/// Routes served by the proxy, ready to merge into the `/api` group.
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route(FETCH_SCHOOLS_PATH, get(fetch_schools))
        .with_state(state)
}

pub async fn fetch_schools(State(state): State<ProxyState>) -> Response {
    let dataset = match state.client.fetch().await {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(
                url = %state.client.url(),
                error.kind = e.kind(),
                error = %e,
                cause = ?e.source(),
                "Error fetching dataset"
            );
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProxyErrorBody {
                    error: FETCH_FAILED_MESSAGE,
                }),
            )
                .into_response();
        }
    };

    match EnvelopeShape::inspect(&dataset.document) {
        EnvelopeShape::WellFormed { record_count } => {
            tracing::info!(record_count, "Received dataset records");
        }
        EnvelopeShape::Malformed => {
            tracing::warn!(
                body = %String::from_utf8_lossy(&dataset.body),
                "Unexpected dataset response structure"
            );
        }
    }

    ([(CONTENT_TYPE, "application/json")], dataset.body).into_response()
}
