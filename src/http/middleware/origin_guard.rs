//! Origin Guard.
//!
//! Advertises the static CORS policy. It never rejects a caller: browsers
//! enforce the policy, the server only announces it.
//!
//! - `OPTIONS` requests are answered by [`CorsLayer`] as preflights and never
//!   reach a handler.
//! - Every other response, including 404, 405 and 500, leaves with the
//!   allowed origin, methods and headers attached.

use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, InvalidHeaderValue},
        HeaderName, HeaderValue, Method,
    },
    Router,
};
use thiserror::Error;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::config::CorsConfig;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid allowed origin: {0}")]
    Origin(#[from] InvalidHeaderValue),

    #[error("invalid allowed method `{0}`")]
    Method(String),

    #[error("invalid allowed header `{0}`")]
    Header(String),
}

/// Parsed CORS policy, built once at startup and shared read-only by every
/// request.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origin: HeaderValue,
    methods: Vec<Method>,
    headers: Vec<HeaderName>,
}

impl CorsPolicy {
    pub fn from_config(config: &CorsConfig) -> Result<Self, PolicyError> {
        let origin = HeaderValue::from_str(&config.allowed_origin)?;
        let methods = config
            .allowed_methods
            .iter()
            .map(|m| Method::from_bytes(m.as_bytes()).map_err(|_| PolicyError::Method(m.clone())))
            .collect::<Result<_, _>>()?;
        let headers = config
            .allowed_headers
            .iter()
            .map(|h| HeaderName::from_bytes(h.as_bytes()).map_err(|_| PolicyError::Header(h.clone())))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            origin,
            methods,
            headers,
        })
    }

    pub fn allow_origin(&self) -> &HeaderValue {
        &self.origin
    }

    /// `Access-Control-Allow-Methods` value, comma separated.
    pub fn allow_methods(&self) -> HeaderValue {
        join(self.methods.iter().map(Method::as_str))
    }

    /// `Access-Control-Allow-Headers` value, comma separated.
    pub fn allow_headers(&self) -> HeaderValue {
        join(self.headers.iter().map(HeaderName::as_str))
    }

    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::exact(self.origin.clone()))
            .allow_methods(self.methods.clone())
            .allow_headers(self.headers.clone())
    }

    /// Wrap `router` so preflights are answered and every response carries
    /// the policy. [`CorsLayer`] only sends methods and headers on
    /// preflights, so they are set on the remaining responses as well.
    pub fn guard(&self, router: Router) -> Router {
        router
            .layer(self.cors_layer())
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_HEADERS,
                self.allow_headers(),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_METHODS,
                self.allow_methods(),
            ))
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> HeaderValue {
    let joined = items.collect::<Vec<_>>().join(",");
    // Method and header-name tokens are always valid header value bytes.
    HeaderValue::from_str(&joined).unwrap_or_else(|_| HeaderValue::from_static(""))
}
