//! Typed REST client for the learning-assistant backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! backend is only contacted from the browser.
//!
//! No page issues requests yet: the feature pages are placeholders and the
//! dashboard uses mock analytics. The settings page only resolves endpoint
//! URLs through [`ApiClient::url`].
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, undecodable bodies, and envelopes
//! with `success: false` all surface as [`ApiError`] variants. Nothing here
//! retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ApiResponse;
use crate::config::AppConfig;
use crate::config::api::{ApiEndpoint, HttpMethod};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("response carried no data")]
    MissingData,
    #[error("{path} expects {expected}")]
    MethodMismatch { path: &'static str, expected: &'static str },
    #[error("not available on server")]
    Unavailable,
}

/// Turn an envelope into its payload or the backend's failure reason.
///
/// # Errors
///
/// [`ApiError::Rejected`] when `success` is false, [`ApiError::MissingData`]
/// when a successful envelope has no `data`.
pub fn unwrap_envelope<T>(resp: ApiResponse<T>) -> Result<T, ApiError> {
    if !resp.success {
        let reason = resp.failure_reason().unwrap_or("unknown error").to_owned();
        return Err(ApiError::Rejected(reason));
    }
    resp.data.ok_or(ApiError::MissingData)
}

/// Reject calls that use the wrong verb for an endpoint.
///
/// # Errors
///
/// [`ApiError::MethodMismatch`] if `endpoint` is not served by `method`.
pub fn check_method(endpoint: ApiEndpoint, method: HttpMethod) -> Result<(), ApiError> {
    let expected = endpoint.method();
    if expected == method {
        Ok(())
    } else {
        Err(ApiError::MethodMismatch { path: endpoint.path(), expected: expected.as_str() })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.backend_endpoint)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `endpoint`, joining without a doubled slash.
    #[must_use]
    pub fn url(&self, endpoint: ApiEndpoint) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.path().trim_start_matches('/'))
    }

    /// `GET` a read endpoint with optional query parameters.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; [`ApiError::Unavailable`] outside the browser.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: ApiEndpoint, query: &[(&str, &str)]) -> Result<T, ApiError> {
        check_method(endpoint, HttpMethod::Get)?;
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(endpoint);
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url)
                .query(query.iter().copied())
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a JSON body to a write endpoint.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; [`ApiError::Unavailable`] outside the browser.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, endpoint: ApiEndpoint, body: &B) -> Result<T, ApiError> {
        check_method(endpoint, HttpMethod::Post)?;
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(endpoint);
            log::debug!("POST {url}");
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        log::warn!("{} returned {}", resp.url(), resp.status());
        return Err(ApiError::Status(resp.status()));
    }
    let envelope: ApiResponse<T> = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    unwrap_envelope(envelope)
}
