//! Dataset proxy subsystem.
//!
//! # Data Flow
//! ```text
//! GET /api/fetch-schools
//!     → client.rs (single outbound GET, no timeout, no retry)
//!     → envelope.rs (shallow check of result.records)
//!     → handler.rs (relay upstream bytes verbatim, or 500 on fetch failure)
//! ```
//!
//! # Design Decisions
//! - A malformed envelope is logged and still relayed with 200
//! - Every fetch failure collapses to one opaque 500 body; the cause is
//!   only visible in the server log

pub mod client;
pub mod envelope;
pub mod handler;

pub use client::{ClientBuildError, DatasetClient, FetchError, FetchedDataset};
pub use envelope::EnvelopeShape;
pub use handler::{fetch_schools, router, ProxyState, FETCH_FAILED_MESSAGE, FETCH_SCHOOLS_PATH};
