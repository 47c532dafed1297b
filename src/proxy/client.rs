//! Outbound client for the upstream dataset endpoint.
//!
//! # Design Decisions
//! - Single attempt: no retry, no backoff
//! - No request timeout; a hung upstream only stalls its own request
//! - Non-2xx responses are failures, same as transport and decode errors

use axum::body::Bytes;
use reqwest::{header::ACCEPT, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;

/// Failure to complete the upstream exchange.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream responded with status {status}")]
    UpstreamStatus { status: StatusCode },

    #[error("failed to read upstream body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("upstream body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Stable label for the `error.kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(e) if e.is_connect() => "connect",
            Self::Transport(_) => "transport",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::Body(_) => "body",
            Self::Decode(_) => "decode",
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// A successfully fetched upstream document.
#[derive(Debug, Clone)]
pub struct FetchedDataset {
    /// Body exactly as received.
    pub body: Bytes,
    /// Parsed view of `body`, used only for inspection.
    pub document: Value,
}

#[derive(Debug, Clone)]
pub struct DatasetClient {
    http: reqwest::Client,
    url: Url,
}

impl DatasetClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ClientBuildError> {
        let url = Self::dataset_url(config)?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, url })
    }

    /// `<base_url>?resource_id=<dataset_id>&limit=<limit>`
    pub fn dataset_url(config: &UpstreamConfig) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &config.base_url,
            &[
                ("resource_id", config.dataset_id.clone()),
                ("limit", config.limit.to_string()),
            ],
        )
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn fetch(&self) -> Result<FetchedDataset, FetchError> {
        let response = self
            .http
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus { status });
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        let document = serde_json::from_slice(&body)?;

        Ok(FetchedDataset { body, document })
    }
}
