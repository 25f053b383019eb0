use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, Url};
use vardeck_core::{AppConfig, InventoryRecord};

use crate::error::InventoryError;
use crate::normalize::normalize_response;
use crate::provider::InventoryProvider;
use crate::retry::retry_with_backoff;
use crate::types::{BatchInventoryRequest, BatchInventoryResponse};

/// Maximum number of SKUs in one request to the batch endpoint.
/// Larger fetches are split into chunks and merged client-side.
const MAX_BATCH_SKUS: usize = 100;

/// Path of the batch endpoint, relative to the configured base URL.
const BATCH_PATH: &str = "api/inventory/batch";

/// HTTP client for the BFF's batch inventory endpoint.
///
/// Handles auth (bearer token), rate limiting (429), and other non-2xx
/// responses as typed errors. Transient errors (429, 5xx, network failures)
/// are automatically retried with jittered exponential back-off up to
/// `max_retries` additional attempts.
pub struct HttpInventoryClient {
    client: Client,
    batch_url: Url,
    bearer_token: Option<String>,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl HttpInventoryClient {
    /// Creates a client for the batch endpoint under `config.bff_base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`InventoryError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, InventoryError> {
        Self::with_base_url(config, &config.bff_base_url)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`HttpInventoryClient::new`].
    pub fn with_base_url(config: &AppConfig, base_url: &str) -> Result<Self, InventoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            batch_url: batch_url(base_url)?,
            bearer_token: config.bff_bearer_token.clone(),
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
        })
    }

    /// Fetches one chunk of at most [`MAX_BATCH_SKUS`] SKUs, with retry.
    ///
    /// Retries up to `self.max_retries` times on 429, 5xx, and network
    /// failures, using jittered exponential back-off with a base delay of
    /// `self.backoff_base_ms` milliseconds.
    async fn fetch_chunk(
        &self,
        skus: &[String],
    ) -> Result<HashMap<String, InventoryRecord>, InventoryError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let skus = skus.to_vec();
            async move {
                let requested = skus.len();
                let mut request = self
                    .client
                    .post(self.batch_url.clone())
                    .json(&BatchInventoryRequest { skus });
                if let Some(token) = &self.bearer_token {
                    request = request.bearer_auth(token);
                }

                let response = request.send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::UNAUTHORIZED {
                    return Err(InventoryError::Unauthorized {
                        url: self.batch_url.to_string(),
                    });
                }

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(InventoryError::RateLimited { retry_after_secs });
                }

                if !status.is_success() {
                    return Err(InventoryError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: self.batch_url.to_string(),
                    });
                }

                let body = response.text().await?;
                let parsed = serde_json::from_str::<BatchInventoryResponse>(&body).map_err(|e| {
                    InventoryError::Deserialize {
                        context: format!("batch inventory response for {requested} SKUs"),
                        source: e,
                    }
                })?;

                Ok(normalize_response(parsed))
            }
        })
        .await
    }
}

impl InventoryProvider for HttpInventoryClient {
    /// Fetches records for `skus`, splitting the request into chunks of
    /// [`MAX_BATCH_SKUS`] and merging the responses.
    ///
    /// The merged map is all-or-nothing: when any chunk fails after retries
    /// the whole call fails, so callers never apply a partial batch.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::Unauthorized`] — HTTP 401 (not retried).
    /// - [`InventoryError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`InventoryError::UnexpectedStatus`] — other non-2xx status.
    /// - [`InventoryError::Http`] — network or TLS failure after all retries.
    /// - [`InventoryError::Deserialize`] — response body does not match the
    ///   expected shape (not retried).
    async fn fetch_batch(
        &self,
        skus: &[String],
    ) -> Result<HashMap<String, InventoryRecord>, InventoryError> {
        let mut merged = HashMap::with_capacity(skus.len());
        for chunk in skus.chunks(MAX_BATCH_SKUS) {
            merged.extend(self.fetch_chunk(chunk).await?);
        }
        tracing::debug!(
            requested = skus.len(),
            resolved = merged.len(),
            "batch inventory fetch complete"
        );
        Ok(merged)
    }
}

/// Builds the batch-endpoint URL from a configured base URL.
///
/// The base is normalized to end with exactly one slash so the endpoint path
/// appends to it rather than replacing its last segment; a configured base of
/// `https://host/bff` yields `https://host/bff/api/inventory/batch`.
fn batch_url(base_url: &str) -> Result<Url, InventoryError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| InventoryError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })?;
    base.join(BATCH_PATH)
        .map_err(|e| InventoryError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
