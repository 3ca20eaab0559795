//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routes)
//!     → handlers.rs (façade endpoints calling the service layer)
//!     → response.rs (service results mapped to HTTP statuses)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use response::ApiError;
pub use server::{AppState, HttpServer};
