//! Cross-cutting request middleware.
//!
//! Access logging and authorization are `axum::middleware::from_fn_with_state`
//! functions. The origin guard is a tower-http layer stack. The pipeline
//! composer orders all of them explicitly.

pub mod access_log;
pub mod authorization;
pub mod origin_guard;

pub use access_log::{access_log_middleware, AccessLogEntry, AccessLogSink, SinkError, TracingSink};
pub use authorization::{authorization_middleware, AuthorizationPolicy};
pub use origin_guard::{CorsPolicy, PolicyError};
