//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all façade routes
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve on a bound listener with graceful shutdown
//!
//! # Design Decisions
//! - `AppState` is immutable and cheap to clone; concurrent requests
//!   share nothing mutable
//! - Request IDs are UUIDv4, set on ingress and propagated back

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::service::EmployeeService;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EmployeeService>,
}

/// HTTP server for the employee API façade.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, UpstreamError> {
        let client = UpstreamClient::new(&config.upstream)?;
        let state = AppState {
            service: Arc::new(EmployeeService::new(client)),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/employee",
                get(handlers::list_employees).post(handlers::create_employee),
            )
            .route("/employee/search/{name}", get(handlers::search_employees))
            .route("/employee/highestSalary", get(handlers::highest_salary))
            .route(
                "/employee/topTenHighestEarningEmployeeNames",
                get(handlers::top_earners),
            )
            .route(
                "/employee/{id}",
                get(handlers::get_employee).delete(handlers::delete_employee),
            )
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
