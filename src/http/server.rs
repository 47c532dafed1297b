//! HTTP server setup and pipeline composition.
//!
//! # Responsibilities
//! - Fix the middleware order
//! - Dispatch by exact path to health, domain routes or the dataset proxy
//! - Serve with graceful shutdown
//!
//! # Pipeline
//! ```text
//! access_log → origin_guard → authorization → trace → dispatch
//!                                                     ├─ GET /                 health
//!                                                     ├─ /users/*              domain users
//!                                                     ├─ GET /api/fetch-schools dataset proxy
//!                                                     ├─ /api/*                domain api
//!                                                     └─ *                     404
//! ```
//! Axum applies `.layer` calls inside-out, so the last layer added below is
//! the first to see a request.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::domain::{DomainRoutes, API_MOUNT, USERS_MOUNT};
use crate::health::{health_check, HEALTH_PATH};
use crate::http::middleware::{
    access_log_middleware, authorization_middleware, AccessLogSink, AuthorizationPolicy,
    CorsPolicy, PolicyError, TracingSink,
};
use crate::proxy::{self, ClientBuildError, DatasetClient, ProxyState};

/// Failure to assemble the pipeline from configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid CORS policy: {0}")]
    Cors(#[from] PolicyError),

    #[error(transparent)]
    Upstream(#[from] ClientBuildError),
}

/// Compose the full request pipeline.
pub fn build_router(
    config: &GatewayConfig,
    domain: DomainRoutes,
    sink: Arc<dyn AccessLogSink>,
) -> Result<Router, BuildError> {
    let cors = CorsPolicy::from_config(&config.cors)?;
    let authorization = Arc::new(AuthorizationPolicy::new(&config.auth, &[HEALTH_PATH]));
    if !authorization.is_enabled() {
        tracing::info!("Authorization stage disabled by configuration");
    }

    let proxy_state = ProxyState {
        client: Arc::new(DatasetClient::new(&config.upstream)?),
    };
    let api = domain.api.merge(proxy::router(proxy_state));

    let router = Router::new()
        .route(HEALTH_PATH, get(health_check))
        .nest(USERS_MOUNT, domain.users)
        .nest(API_MOUNT, api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(authorization, authorization_middleware));

    // Preflights are answered here, before authorization runs.
    let router = cors.guard(router).layer(from_fn_with_state(sink, access_log_middleware));

    Ok(router)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
}

impl GatewayServer {
    /// Create a server that writes access logs through `tracing`.
    pub fn new(config: Arc<GatewayConfig>, domain: DomainRoutes) -> Result<Self, BuildError> {
        Self::with_sink(config, domain, Arc::new(TracingSink))
    }

    pub fn with_sink(
        config: Arc<GatewayConfig>,
        domain: DomainRoutes,
        sink: Arc<dyn AccessLogSink>,
    ) -> Result<Self, BuildError> {
        let router = build_router(&config, domain, sink)?;
        Ok(Self { router })
    }

    /// Serve until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "App listening on port {}", addr.port());

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
