//! HTTP client for the remote food-analysis API.
//!
//! Wraps `reqwest` with per-phase request timeouts and a normalized error
//! taxonomy. Product lookup and analysis generation carry different bounds
//! since analysis is expected to be much slower. No automatic retries —
//! retry is always a caller-initiated re-invocation.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use foodlens_core::{AnalysisResult, AppConfig, Product, UserPreferences};

use crate::error::ApiError;
use crate::types::{AnalysisRequest, ErrorBody, ErrorDetail, PreferencesPayload};

/// Client for the food-analysis REST API.
///
/// Use [`FoodApiClient::new`] for production or
/// [`FoodApiClient::with_base_url`] to point at a mock server in tests.
pub struct FoodApiClient {
    client: Client,
    base_url: Url,
    product_timeout: Duration,
    analysis_timeout: Duration,
}

impl FoodApiClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if the configured base
    /// URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Self::with_base_url(
            &config.api_base_url,
            config.product_timeout_secs,
            config.analysis_timeout_secs,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        base_url: &str,
        product_timeout_secs: u64,
        analysis_timeout_secs: u64,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent("foodlens/0.1 (product-analysis)")
            .build()
            .map_err(ApiError::from_reqwest)?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joined endpoint paths extend it rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            product_timeout: Duration::from_secs(product_timeout_secs),
            analysis_timeout: Duration::from_secs(analysis_timeout_secs),
        })
    }

    /// Looks up a product by barcode via `GET /api/v1/product/{barcode}`.
    ///
    /// Bounded by the product timeout (default 45 s).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Timeout`] if the bound expires.
    /// - [`ApiError::Network`] on connection failure.
    /// - [`ApiError::Status`] on a non-2xx response (404 = unknown barcode),
    ///   with the message extracted from the structured error body.
    /// - [`ApiError::Deserialize`] if the response does not match the
    ///   expected product shape.
    pub async fn fetch_product(&self, barcode: &str) -> Result<Product, ApiError> {
        let url = self.endpoint(&["api", "v1", "product", barcode]);
        tracing::debug!(%url, "fetching product");

        let response = self
            .client
            .get(url)
            .timeout(self.product_timeout)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        Self::decode(response, &format!("product({barcode})")).await
    }

    /// Requests a comprehensive health analysis for `product` tailored to
    /// `preferences`, via `POST /api/v1/analyze-comprehensive`.
    ///
    /// Bounded by the analysis timeout (default 90 s). The request body
    /// renames preference fields to the wire contract; see
    /// [`PreferencesPayload`].
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`FoodApiClient::fetch_product`].
    pub async fn fetch_analysis(
        &self,
        product: &Product,
        preferences: &UserPreferences,
    ) -> Result<AnalysisResult, ApiError> {
        let url = self.endpoint(&["api", "v1", "analyze-comprehensive"]);
        let body = AnalysisRequest {
            product,
            user_preferences: PreferencesPayload::from(preferences),
        };
        tracing::debug!(%url, barcode = %product.barcode, "requesting analysis");

        let response = self
            .client
            .post(url)
            .timeout(self.analysis_timeout)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        Self::decode(response, &format!("analysis({})", product.barcode)).await
    }

    /// Joins path segments onto the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // The base URL is validated http(s), so it can always be a base.
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty().extend(segments);
        }
        url
    }

    /// Reads the response body, mapping non-2xx statuses to
    /// [`ApiError::Status`] and parsing 2xx bodies into `T`.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from_reqwest)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message_from_body(status.as_u16(), &body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Extracts a display message from a non-2xx response body.
///
/// Tries the structured `{"detail": ...}` shape first (string or validation
/// item list), then the raw body text, then a generic statement carrying the
/// status code.
fn error_message_from_body(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        match parsed.detail {
            Some(ErrorDetail::Message(msg)) if !msg.is_empty() => return msg,
            Some(ErrorDetail::Items(items)) if !items.is_empty() => {
                return items
                    .into_iter()
                    .map(|i| i.msg)
                    .collect::<Vec<_>>()
                    .join(", ");
            }
            _ => {}
        }
    }

    if body.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
