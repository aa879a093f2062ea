//! Thin dispatching wrapper around the API client.

use apod_api::types::ApodEntry;
use apod_api::{ApodQuery, Client};

use crate::error::ApodError;

/// Dispatches validated queries to the APOD API.
///
/// Deliberately thin: no caching, no retry, no de-duplication. Each call
/// issues one independent request.
pub struct ApodClient {
    inner: Client,
}

impl ApodClient {
    /// Creates a client against the production NASA API.
    pub fn new(api_key: &str) -> Self {
        Self {
            inner: Client::new(api_key),
        }
    }

    /// Creates a client against a custom base URL. Used in tests.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            inner: Client::with_base_url(base_url, api_key),
        }
    }

    /// Fetches the entries matching `query`.
    pub async fn search(&self, query: &ApodQuery) -> Result<Vec<ApodEntry>, ApodError> {
        tracing::debug!(?query, "dispatching APOD request");
        let entries = self.inner.get_apod(query).await?;
        tracing::debug!("received {} entries", entries.len());
        Ok(entries)
    }
}
