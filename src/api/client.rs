//! api::client
//!
//! Paginated REST retrieval against a repository's resource paths.
//!
//! # Design
//!
//! One `ApiClient` serves one resolved API host. Every request attaches
//! a bearer token obtained from the [`TokenProvider`] at the start of
//! the invocation; the client itself never caches credentials. A non-2xx
//! response on any page fails the whole operation and discards results
//! from earlier pages.
//!
//! There is no automatic retry here. Retry policy belongs to the caller
//! re-triggering the view.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::error::{FetchError, InsightsError};
use crate::auth::{TokenProvider, READ_SCOPES};
use crate::catalog::ProjectRef;
use crate::host::{Hosts, DEFAULT_API_BASE};

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "repolens";

/// Server-side maximum page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Hard ceiling on pages fetched per invocation.
///
/// Guards against a server that never signals a short final page. With
/// `MAX_PAGE_SIZE` this bounds one fetch at 10,000 items, far above any
/// card's window.
const MAX_PAGES: u32 = 100;

/// Descriptor for a paginated retrieval.
///
/// `per_page` bounds a single request; `max_items` is a client-side
/// ceiling on the total across pages, never sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Resource path under `repos/{owner}/{repo}/` (e.g., "releases").
    pub resource_path: String,
    /// Requested page size; the server may return fewer.
    pub per_page: u32,
    /// Ceiling on total items retrieved across all pages.
    pub max_items: usize,
}

impl PageRequest {
    /// Create a page request.
    pub fn new(resource_path: impl Into<String>, per_page: u32, max_items: usize) -> Self {
        Self {
            resource_path: resource_path.into(),
            per_page,
            max_items,
        }
    }
}

/// HTTP client bound to one API host.
pub struct ApiClient {
    /// HTTP client for making requests
    client: Client,
    /// Provider called for a fresh bearer token on every fetch
    token_provider: Arc<dyn TokenProvider>,
    /// API base URL (configurable for self-hosted instances)
    api_base: String,
}

// Custom Debug: the provider may hold credentials
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the public API host.
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
        Self::with_api_base(token_provider, DEFAULT_API_BASE)
    }

    /// Create a client for a specific API base URL.
    pub fn with_api_base(
        token_provider: Arc<dyn TokenProvider>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            token_provider,
            api_base: api_base.into(),
        }
    }

    /// Create a client for a resolved host pair.
    ///
    /// Only the API host is used; web links never receive API calls.
    pub fn for_hosts(token_provider: Arc<dyn TokenProvider>, hosts: &Hosts) -> Self {
        Self::with_api_base(token_provider, hosts.api_base.clone())
    }

    /// Get the API base URL this client targets.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build URL for a repository endpoint.
    fn repo_url(&self, project: &ProjectRef, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_base, project.owner, project.repo, path
        )
    }

    /// Build common headers, acquiring a bearer token from the provider.
    async fn headers(&self) -> Result<HeaderMap, InsightsError> {
        let token = self.token_provider.bearer_token(READ_SCOPES).await?;
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| FetchError::Network(format!("invalid token header: {}", e)))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        Ok(headers)
    }

    /// Handle an API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, InsightsError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                FetchError::Api {
                    status: status.as_u16(),
                    message: format!("failed to parse response: {}", e),
                }
                .into()
            })
        } else {
            Err(self.error_from_response(response, status).await.into())
        }
    }

    /// Extract a `FetchError` from a non-2xx response.
    async fn error_from_response(&self, response: Response, status: StatusCode) -> FetchError {
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => "unknown error".to_string(),
        };
        FetchError::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// Fetch a single (non-paginated) resource as typed JSON.
    pub async fn get_resource<T: for<'de> Deserialize<'de>>(
        &self,
        project: &ProjectRef,
        path: &str,
    ) -> Result<T, InsightsError> {
        let url = self.repo_url(project, path);
        let headers = self.headers().await?;

        tracing::debug!(%url, "fetching resource");
        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Fetch a paginated resource, following pages in increasing order.
    ///
    /// Issues `GET {api_base}/repos/{owner}/{repo}/{path}?page={n}&per_page={p}`
    /// starting at page 1 and concatenates items in response order.
    /// Stops when `max_items` is reached (truncating to it), when a page
    /// comes back short or empty, or at the hard page ceiling.
    ///
    /// # Errors
    ///
    /// A non-2xx status on any page fails the whole call; earlier pages'
    /// items are discarded. `max_items == 0` returns an empty vec
    /// without issuing a request.
    pub async fn fetch_paged(
        &self,
        project: &ProjectRef,
        request: &PageRequest,
    ) -> Result<Vec<Value>, InsightsError> {
        if request.max_items == 0 {
            return Ok(Vec::new());
        }

        let per_page = request.per_page.clamp(1, MAX_PAGE_SIZE);
        // Token acquired once per invocation, before the first page.
        let headers = self.headers().await?;

        let mut items: Vec<Value> = Vec::with_capacity(request.max_items.min(per_page as usize));
        let mut page: u32 = 1;

        loop {
            let base = self.repo_url(project, &request.resource_path);
            // Resource paths may carry their own query (e.g. "branches?protected=true").
            let sep = if base.contains('?') { '&' } else { '?' };
            let url = format!("{}{}page={}&per_page={}", base, sep, page, per_page);

            tracing::debug!(%url, page, "fetching page");
            let response = self
                .client
                .get(&url)
                .headers(headers.clone())
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let page_items: Vec<Value> = self.handle_response(response).await?;
            let page_len = page_items.len();

            for item in page_items {
                if items.len() >= request.max_items {
                    break;
                }
                items.push(item);
            }

            // A short or empty page signals the last page.
            if items.len() >= request.max_items
                || page_len < per_page as usize
                || page >= MAX_PAGES
            {
                break;
            }

            page += 1;
        }

        Ok(items)
    }

    /// Fetch a paginated resource and deserialize each item.
    pub async fn fetch_paged_as<T: for<'de> Deserialize<'de>>(
        &self,
        project: &ProjectRef,
        request: &PageRequest,
    ) -> Result<Vec<T>, InsightsError> {
        let raw = self.fetch_paged(project, request).await?;
        raw.into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| {
                    FetchError::Api {
                        status: 200,
                        message: format!("failed to parse item: {}", e),
                    }
                    .into()
                })
            })
            .collect()
    }
}

/// Error response body format.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}
