//! HTTP client for the suggest endpoint
//!
//! `GET {base}/api/search/suggest?q=<query>` returning a JSON array of
//! `{name, url, type}` entries.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::ACCEPT;
use thiserror::Error;

use super::types::{Suggestion, parse_suggestions};
use crate::error::VaultError;

/// Path of the suggest endpoint, relative to the server base URL
const SUGGEST_PATH: &str = "api/search/suggest";

/// Errors that can occur during a suggestion lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// Transport failure: connection refused, DNS, timeout, broken body
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status or a body that is not a suggestion array
    #[error("Server error: {0}")]
    Server(String),
}

/// Client for one StudyVault server
#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    base_url: Url,
    endpoint: Url,
}

impl SuggestClient {
    /// Create a client for the server at `base_url`
    ///
    /// The base URL may carry a path prefix (`https://host/vault`); the
    /// endpoint is resolved beneath it.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, VaultError> {
        let base_url = parse_base_url(base_url)?;
        let endpoint = base_url
            .join(SUGGEST_PATH)
            .map_err(|_| VaultError::InvalidBaseUrl(base_url.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            endpoint,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full lookup URL for a query, with `q` form-urlencoded
    pub fn suggest_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    /// Look up suggestions for `query`
    ///
    /// An empty array is a valid "no results" answer, not an error.
    pub async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, SuggestError> {
        let response = self
            .http
            .get(self.suggest_url(query))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Server(format!("HTTP {}", status.as_u16())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        parse_suggestions(&body)
    }

    /// Absolute link for a server-relative suggestion URL
    pub fn resolve(&self, url: &str) -> String {
        resolve_url(&self.base_url, url)
    }
}

/// Join a suggestion URL onto `base`, leaving it as-is if that fails
pub fn resolve_url(base: &Url, url: &str) -> String {
    match base.join(url) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url.to_string(),
    }
}

/// Parse and normalize a server base URL
///
/// Only absolute http(s) URLs are accepted. The path gets a trailing slash so
/// relative joins stay beneath it.
pub fn parse_base_url(raw: &str) -> Result<Url, VaultError> {
    let invalid = || VaultError::InvalidBaseUrl(raw.to_string());

    let mut url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid());
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
