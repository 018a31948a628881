//! HTTP client utilities for reading JSON from upstream services

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Result, ServiceError};

/// Header carrying the per-request correlation id
pub const CORRELATION_HEADER: &str = "x-correlation-id";

const SOURCE_SERVICE_HEADER: &str = "x-source-service";

/// Upstream HTTP client bound to one base URL
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    base_url: String,
    service_name: String,
}

impl ServiceClient {
    /// Create a client without a request timeout
    pub fn new(service_name: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
            service_name: service_name.to_string(),
        }
    }

    /// Create a client whose requests fail with `ServiceError::Timeout`
    /// once `timeout` elapses
    pub fn with_timeout(service_name: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
            service_name: service_name.to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET `path` and decode the JSON body into `T`
    pub async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        let correlation_id = Uuid::new_v4().to_string();

        info!(url = %url, correlation_id = %correlation_id, "Fetching upstream resource");

        let response = self
            .client
            .get(&url)
            .header(CORRELATION_HEADER, &correlation_id)
            .header(SOURCE_SERVICE_HEADER, &self.service_name)
            .send()
            .await
            .map_err(|e| map_transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = format!("GET {} returned {}: {}", url, status, error_text);
            return Err(if status == StatusCode::SERVICE_UNAVAILABLE {
                ServiceError::ServiceUnavailable(message)
            } else {
                ServiceError::ExternalService(message)
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(&url, e))?;

        debug!(
            url = %url,
            correlation_id = %correlation_id,
            bytes = body.len(),
            "Upstream response received"
        );

        serde_json::from_slice(&body)
            .map_err(|e| ServiceError::ExternalService(format!("Parse failed for {}: {}", url, e)))
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

fn map_transport_error(url: &str, err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout(format!("GET {} timed out", url))
    } else {
        ServiceError::ExternalService(format!("Request failed for {}: {}", url, err))
    }
}
