//! Authorization stage.
//!
//! Always present in the pipeline; `auth.enabled` decides whether it checks
//! anything. When disabled every request passes through untouched.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::config::AuthConfig;

#[derive(Debug, Clone)]
pub struct AuthorizationPolicy {
    enabled: bool,
    expected: String,
    exempt_paths: Vec<String>,
}

impl AuthorizationPolicy {
    /// Build the policy. Requests to `exempt_paths` are never checked.
    pub fn new(config: &AuthConfig, exempt_paths: &[&str]) -> Self {
        Self {
            enabled: config.enabled,
            expected: format!("Bearer {}", config.bearer_token),
            exempt_paths: exempt_paths.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn requires_check(&self, path: &str) -> bool {
        self.enabled && !self.exempt_paths.iter().any(|p| p == path)
    }
}

pub async fn authorization_middleware(
    State(policy): State<Arc<AuthorizationPolicy>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !policy.requires_check(req.uri().path()) {
        return next.run(req).await;
    }

    let presented = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if presented == Some(policy.expected.as_str()) {
        return next.run(req).await;
    }

    tracing::warn!(
        path = %req.uri().path(),
        header_present = presented.is_some(),
        "Rejected unauthorized request"
    );
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    )
        .into_response()
}
