//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the CORS policy can be rendered as header values
//! - Validate the upstream URL and page size
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue, Method};
use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("cors.allowed_origin `{0}` is not a valid header value")]
    Origin(String),

    #[error("cors.allowed_methods contains invalid method `{0}`")]
    Method(String),

    #[error("cors.allowed_headers contains invalid header name `{0}`")]
    Header(String),

    #[error("upstream.base_url `{0}` is not a valid URL")]
    UpstreamUrl(String),

    #[error("upstream.limit must be greater than zero")]
    ZeroLimit,

    #[error("auth.bearer_token must be set when auth.enabled is true")]
    MissingBearerToken,
}

/// Check every semantic constraint, collecting all failures.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    let origin = &config.cors.allowed_origin;
    if origin.is_empty() || HeaderValue::from_str(origin).is_err() {
        errors.push(ValidationError::Origin(origin.clone()));
    }

    for method in &config.cors.allowed_methods {
        if Method::from_bytes(method.as_bytes()).is_err() {
            errors.push(ValidationError::Method(method.clone()));
        }
    }

    for header in &config.cors.allowed_headers {
        if HeaderName::from_bytes(header.as_bytes()).is_err() {
            errors.push(ValidationError::Header(header.clone()));
        }
    }

    if Url::parse(&config.upstream.base_url).is_err() {
        errors.push(ValidationError::UpstreamUrl(config.upstream.base_url.clone()));
    }

    if config.upstream.limit == 0 {
        errors.push(ValidationError::ZeroLimit);
    }

    if config.auth.enabled && config.auth.bearer_token.is_empty() {
        errors.push(ValidationError::MissingBearerToken);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
