//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields)
//!     → access_log target (one event per request, see http::middleware::access_log)
//!
//! logging.rs installs the subscriber that renders them (pretty or JSON).
//! ```

pub mod logging;

pub use logging::init_logging;
