//! HTTP client for the mediastack news API.

use std::time::Duration;

use url::Url;

use crate::{
    query::{validate_params, DefaultsMode, Query, SanitizedParams},
    types::{ApiResponse, NewsPage},
    Error,
};

const USER_AGENT: &str = concat!("mediastack_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the mediastack news API.
///
/// Every call sanitizes the caller's options, then builds a fresh
/// `reqwest::Client` with connection pooling disabled, so nothing outlives
/// the call. No timeout is applied unless [`Client::with_timeout`] is used.
pub struct Client {
    /// Base URL for the API. Defaults to `http://api.mediastack.com`.
    base_api_url: String,
    access_key: String,
    defaults: DefaultsMode,
    timeout: Option<Duration>,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(access_key: &str, defaults: DefaultsMode) -> Self {
        Self::with_base_url("http://api.mediastack.com", access_key, defaults)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, access_key: &str, defaults: DefaultsMode) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key.to_string(),
            defaults,
            timeout: None,
        }
    }

    /// Applies a total timeout to each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn defaults_mode(&self) -> DefaultsMode {
        self.defaults
    }

    /// Returns the parameters a request for `query` would send.
    pub fn sanitize<Q: Query>(&self, query: &Q) -> SanitizedParams {
        validate_params(&self.access_key, &query.to_options(), self.defaults)
    }

    /// Returns the full URL a request for `query` would hit.
    pub fn news_url<Q: Query>(&self, query: &Q) -> Result<Url, Error> {
        self.get_url("/v1/news", &self.sanitize(query))
    }

    fn get_url(&self, path: &str, params: &SanitizedParams) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(params.add_to_url(&url))
    }

    async fn get(&self, path: &str, params: &SanitizedParams) -> Result<NewsPage, Error> {
        if params.access_key().is_empty() {
            tracing::error!("Refusing to call {} without an access key", path);
            return Err(Error::MissingAccessKey);
        }
        let url = self.get_url(path, params)?;
        tracing::debug!(
            "GET {}{}?{}",
            self.base_api_url,
            path,
            params.to_redacted_query_string()
        );

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(0);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e.without_url());
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e.without_url());
            Error::RequestFailed
        })?;

        match ApiResponse::from_body(&body) {
            ApiResponse::Success(page) => {
                tracing::debug!("Received {} articles", page.data.len());
                Ok(page)
            }
            ApiResponse::Failure(error) => {
                tracing::error!("Error accessing the API: {}", error);
                Err(Error::Api {
                    status: status.as_u16(),
                    error,
                })
            }
            ApiResponse::Unrecognized(_) if !status.is_success() => {
                let snippet = truncate_body(&body);
                tracing::error!("Request failed with status {}: {}", status, snippet);
                Err(Error::HttpStatus {
                    status: status.as_u16(),
                    body: snippet,
                })
            }
            ApiResponse::Unrecognized(reason) => {
                let snippet = truncate_body(&body);
                tracing::error!("Unrecognized response: {} | body: {}", reason, snippet);
                Err(Error::MalformedResponse {
                    reason,
                    body: snippet,
                })
            }
        }
    }

    /// Fetches one page of news articles matching `query`.
    pub async fn get_news<Q: Query>(&self, query: &Q) -> Result<NewsPage, Error> {
        self.get("/v1/news", &self.sanitize(query)).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
