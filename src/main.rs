//! Employee API façade server.
//!
//! A thin REST façade over an upstream mock employee API, built with
//! Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────┐
//!                  │              EMPLOYEE FAÇADE               │
//!   Client         │  ┌─────────┐   ┌─────────┐   ┌──────────┐  │
//!   ───────────────┼─▶│  http   │──▶│ service │──▶│ upstream │──┼──▶ Upstream
//!                  │  │ façade  │   │  layer  │   │  client  │  │    Employee API
//!   ◀──────────────┼──│ encode  │◀──│transform│◀──│ envelope │◀─┼───
//!                  │  └─────────┘   └─────────┘   └──────────┘  │
//!                  │  ┌──────────────────────────────────────┐  │
//!                  │  │  config  ·  logging  ·  request IDs  │  │
//!                  │  └──────────────────────────────────────┘  │
//!                  └────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod model;
pub mod service;
pub mod upstream;

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{load_config, AppConfig};
use crate::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("employee-api v0.1.0 starting");

    // Load configuration from an optional path argument, defaults otherwise
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => AppConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
