//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (context.rs):
//!     Load config → Connect storage (fatal on failure) → AppContext
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger → stop accepting → drain → close storage
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then storage, then listener
//! - One process-scoped context, passed explicitly; no globals

pub mod context;
pub mod shutdown;
pub mod signals;

pub use context::AppContext;
pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
