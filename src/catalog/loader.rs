// Listing loader - fail-soft fetch of services and service groups
//
// Every fetch resolves to a record set: transport failures, non-2xx
// responses and rejected/malformed envelopes are logged and collapsed to an
// empty Vec, so downstream code never handles a fetch error. The error
// taxonomy below is internal to the loader (and its tests).

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::service::{Service, ServiceGroup};

/// Why a fetch failed, before the failure is collapsed to an empty set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LoaderError {
    /// Transport-level failure (connection, timeout, ...)
    RequestFailed(String),
    /// Non-2xx HTTP status
    BadStatus(u16),
    /// Body was not the expected `{ success, data }` envelope
    MalformedPayload(String),
    /// Envelope arrived with `success: false`
    Rejected(String),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            LoaderError::BadStatus(status) => write!(f, "Unexpected HTTP status: {}", status),
            LoaderError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
            LoaderError::Rejected(msg) => write!(f, "API returned success=false: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

/// Wire envelope shared by all listing endpoints
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    // Option fields deserialize to None when absent
    pub data: Option<Vec<T>>,
    pub error: Option<String>,
}

/// HTTP client for the marketplace listing endpoints
pub struct ListingLoader {
    client: reqwest::Client,
    base_url: String,
}

impl ListingLoader {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .cookie_store(true)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch all services visible to the current session
    pub async fn fetch_services(&self) -> Vec<Service> {
        self.fetch_list("services", &[]).await
    }

    /// Fetch services restricted to one service group
    pub async fn fetch_services_in_group(&self, group_id: i64) -> Vec<Service> {
        self.fetch_list("services", &[("group_id", group_id.to_string())])
            .await
    }

    /// Fetch all active service groups
    pub async fn fetch_service_groups(&self) -> Vec<ServiceGroup> {
        self.fetch_list("service-groups", &[]).await
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Vec<T> {
        let started = std::time::Instant::now();
        let result = self.try_fetch_list(path, query).await;
        perf_trace!("GET /{} took {:?}", path, started.elapsed());

        match result {
            Ok(items) => {
                log::info!("Fetched {} items from /{}", items.len(), path);
                items
            }
            Err(e) => {
                log::error!("Error fetching /{}: {}", path, e);
                Vec::new()
            }
        }
    }

    async fn try_fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<Vec<T>, LoaderError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| LoaderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoaderError::BadStatus(status.as_u16()));
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| LoaderError::MalformedPayload(e.to_string()))?;

        decode_envelope(envelope)
    }
}

/// Unwrap an API envelope into its record list
fn decode_envelope<T>(envelope: ApiEnvelope<T>) -> std::result::Result<Vec<T>, LoaderError> {
    if !envelope.success {
        return Err(LoaderError::Rejected(
            envelope.error.unwrap_or_else(|| "no error detail".to_string()),
        ));
    }

    envelope
        .data
        .ok_or_else(|| LoaderError::MalformedPayload("missing data field".to_string()))
}
