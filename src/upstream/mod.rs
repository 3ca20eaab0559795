//! Upstream client adapter subsystem.
//!
//! # Data Flow
//! ```text
//! service call
//!     → client.rs (reqwest request to the upstream base URL)
//!     → envelope.rs (deserialize `{data, status, error}` wrapper)
//!     → Option<T> (absent data) or UpstreamError (transport/protocol)
//! ```
//!
//! # Design Decisions
//! - Absent envelope data is an explicit "no data" result, distinct
//!   from a transport failure
//! - No retry, no backoff; failures surface to the caller unchanged

pub mod client;
pub mod envelope;
pub mod error;

pub use client::UpstreamClient;
pub use envelope::ApiResponse;
pub use error::{UpstreamError, UpstreamResult};
