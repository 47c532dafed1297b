//! Schools gateway library.
//!
//! An HTTP edge service: a small cross-cutting middleware pipeline in front
//! of a health check, externally owned domain routes, and a proxy for a
//! public paginated dataset.

// Core subsystems
pub mod config;
pub mod http;

// Request handlers
pub mod domain;
pub mod health;
pub mod proxy;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod storage;

pub use config::GatewayConfig;
pub use domain::DomainRoutes;
pub use http::{build_router, GatewayServer};
pub use lifecycle::{AppContext, Shutdown};
