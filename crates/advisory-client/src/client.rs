//! Advisory backend HTTP client.

use crate::error::AdvisoryError;
use crate::types::*;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Operations the view layer needs from the advisory backend.
#[async_trait]
pub trait AdvisoryApi: Send + Sync {
    /// Fetch and map the advisory for a county.
    async fn fetch_advisory(&self, county: &str) -> Result<AdvisorySnapshot, AdvisoryError>;

    /// Register a phone number for a county's SMS alerts.
    async fn subscribe(&self, request: &SubscriptionRequest) -> Result<(), AdvisoryError>;

    /// Remove a phone number from a county's SMS alerts.
    async fn unsubscribe(&self, request: &SubscriptionRequest) -> Result<(), AdvisoryError>;
}

/// Farm weather advisory API client.
#[derive(Clone)]
pub struct AdvisoryClient {
    client: Client,
    base_url: String,
}

impl AdvisoryClient {
    /// Create a new advisory client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AdvisoryError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the backend answers at all.
    ///
    /// Any HTTP response counts, including 404; only transport failures
    /// report unhealthy.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(&self.base_url)
            .send()
            .await
            .is_ok()
    }

    /// Build the advisory URL, percent-encoding the county path segment.
    fn advisory_url(&self, county: &str) -> String {
        format!("{}/api/advisory/{}", self.base_url, encode(county))
    }

    async fn post_subscription(
        &self,
        endpoint: &str,
        request: &SubscriptionRequest,
        fallback: &str,
    ) -> Result<(), AdvisoryError> {
        let response = self
            .client
            .post(format!("{}/api/{}", self.base_url, endpoint))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = subscription_error(response, fallback).await;
            warn!("{} failed: {}", endpoint, error);
            return Err(error);
        }

        debug!("{} accepted for {}", endpoint, request.county);
        Ok(())
    }
}

#[async_trait]
impl AdvisoryApi for AdvisoryClient {
    #[instrument(skip(self))]
    async fn fetch_advisory(&self, county: &str) -> Result<AdvisorySnapshot, AdvisoryError> {
        let response = self.client.get(self.advisory_url(county)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("Unknown status");
            warn!("Advisory request failed: {}", status);
            return Err(AdvisoryError::Fetch {
                status: status.as_u16(),
                status_text: status_text.to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Advisory body: {}", body.chars().take(200).collect::<String>());
        let payload: AdvisoryResponse = serde_json::from_str(&body)?;

        Ok(AdvisorySnapshot::from_response(county, payload))
    }

    #[instrument(skip(self, request), fields(county = %request.county))]
    async fn subscribe(&self, request: &SubscriptionRequest) -> Result<(), AdvisoryError> {
        self.post_subscription("subscribe", request, "Failed to subscribe")
            .await
    }

    #[instrument(skip(self, request), fields(county = %request.county))]
    async fn unsubscribe(&self, request: &SubscriptionRequest) -> Result<(), AdvisoryError> {
        self.post_subscription("unsubscribe", request, "Failed to unsubscribe")
            .await
    }
}

/// Pull `message` out of an error body, falling back when it is absent,
/// empty, or the body is not JSON.
async fn subscription_error(response: Response, fallback: &str) -> AdvisoryError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string());

    AdvisoryError::Subscription { status, message }
}
