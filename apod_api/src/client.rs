//! HTTP client for the NASA APOD API.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{
    query::{ApodQuery, Query},
    types::ApodEntry,
    Error,
};

const USER_AGENT: &str = concat!("apod-client/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the NASA APOD API.
///
/// Each request builds a fresh `reqwest::Client` and appends the API key
/// as the `api_key` query parameter. No timeout is set; a request that
/// never resolves is simply abandoned with its task.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.nasa.gov`.
    base_api_url: String,
    /// Key sent as the `api_key` query parameter on every request.
    api_key: String,
}

impl Client {
    /// Creates a new client pointing at the production NASA API.
    pub fn new(api_key: &str) -> Self {
        Self {
            base_api_url: "https://api.nasa.gov".to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        let mut url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches the entries matching the given query.
    ///
    /// The remote returns a single object for single-date and today
    /// queries and an array for ranges; both decode to a `Vec` here.
    pub async fn get_apod(&self, query: &ApodQuery) -> Result<Vec<ApodEntry>, Error> {
        let payload = self
            .get::<ApodPayload, ApodQuery>("/planetary/apod", Some(query))
            .await?;
        Ok(payload.into_vec())
    }
}

/// Response body of `/planetary/apod`: one entry or a list of them,
/// depending on the query shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum ApodPayload {
    Many(Vec<ApodEntry>),
    One(Box<ApodEntry>),
}

impl ApodPayload {
    fn into_vec(self) -> Vec<ApodEntry> {
        match self {
            Self::Many(entries) => entries,
            Self::One(entry) => vec![*entry],
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // back off to a char boundary; error bodies are external input and may
    // put a multibyte character across the cut
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
