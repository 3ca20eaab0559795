//! HTTP client for the upstream employee API.
//!
//! # Responsibilities
//! - Issue GET/POST/DELETE calls against the configured base URL
//! - Unwrap the `{data, status, error}` envelope into typed results
//! - Distinguish absent data from transport failures
//!
//! # Design Decisions
//! - One shared reqwest client with a request timeout from config
//! - HTTP 404 on a by-id fetch means "absent", not failure; every
//!   other non-success status is an error
//! - Failures propagate to the caller; retry policy is out of scope

use std::time::Duration;

use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::model::{CreateEmployeeInput, DeleteEmployeeInput, Employee};
use crate::upstream::envelope::ApiResponse;
use crate::upstream::error::{UpstreamError, UpstreamResult};

/// Client for the upstream mock employee API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        url::Url::parse(&config.base_url).map_err(|source| UpstreamError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full employee list. `Ok(None)` when the envelope
    /// carries no data.
    pub async fn list(&self) -> UpstreamResult<Option<Vec<Employee>>> {
        let response = self.http.get(&self.base_url).send().await?;
        Self::unwrap_envelope(response).await
    }

    /// Fetch a single employee by id. Upstream 404 maps to `Ok(None)`.
    pub async fn get(&self, id: &str) -> UpstreamResult<Option<Employee>> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::unwrap_envelope(response).await
    }

    /// Create an employee upstream. `Ok(None)` when the upstream
    /// accepted the request but omitted the created record.
    pub async fn create(&self, input: &CreateEmployeeInput) -> UpstreamResult<Option<Employee>> {
        let response = self.http.post(&self.base_url).json(input).send().await?;
        Self::unwrap_envelope(response).await
    }

    /// Delete an employee by name. Only an explicit `data: true` in the
    /// envelope counts as confirmation.
    pub async fn delete(&self, input: &DeleteEmployeeInput) -> UpstreamResult<bool> {
        let response = self
            .http
            .delete(&self.base_url)
            .json(input)
            .send()
            .await?;
        let confirmed: Option<bool> = Self::unwrap_envelope(response).await?;
        Ok(confirmed == Some(true))
    }

    /// Check the response status and unwrap the envelope payload.
    async fn unwrap_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> UpstreamResult<Option<T>> {
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if envelope.data.is_none() {
            tracing::warn!(
                status = envelope.status.as_deref().unwrap_or(""),
                error = envelope.error.as_deref().unwrap_or(""),
                "Upstream envelope carried no data"
            );
        }
        Ok(envelope.data)
    }
}
