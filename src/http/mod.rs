//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, pipeline composition)
//!     → middleware/access_log.rs (one record per request)
//!     → middleware/origin_guard.rs (preflight answer / CORS annotation)
//!     → middleware/authorization.rs (toggleable bearer check)
//!     → dispatch: health | domain routes | dataset proxy | 404
//! ```

pub mod middleware;
pub mod server;

pub use server::{build_router, BuildError, GatewayServer};
