//! HTTP client shared by the Search and Key Vault crates.
//!
//! This module provides [`AzureClient`], the transport used by every service
//! function in the SDK. The client handles authentication, retries on transient
//! errors, conditional (ETag) headers, and mapping of error responses.
//!
//! # Examples
//!
//! ## Using an API key (Search)
//! ```rust,no_run
//! use azure_sdk_core::client::AzureClient;
//! use azure_sdk_core::auth::AzureCredential;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AzureClient::builder()
//!     .endpoint("https://your-service.search.windows.net")
//!     .credential(AzureCredential::api_key("your-admin-key"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the Azure CLI credential (Key Vault)
//! ```rust,no_run
//! use azure_sdk_core::client::AzureClient;
//! use azure_sdk_core::auth::AzureCredential;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AzureClient::builder()
//!     .endpoint("https://your-vault.vault.azure.net")
//!     .credential(AzureCredential::azure_cli()?)
//!     .scope("https://vault.azure.net/.default")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::auth::AzureCredential;
use crate::error::{AzureError, AzureResult};
use crate::models::MatchConditions;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, IF_MATCH, IF_NONE_MATCH};
use reqwest::{Client as HttpClient, Method};
use url::Url;

use std::time::Duration;

/// Default token scope when none is configured.
pub const DEFAULT_SCOPE: &str = "https://management.azure.com/.default";

/// Default connection timeout (10 seconds).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default read/response timeout (60 seconds).
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Determines if an HTTP status code represents a retriable error.
///
/// Retriable errors are transient server-side issues that may succeed on retry:
/// - 429 Too Many Requests (rate limiting)
/// - 500 Internal Server Error
/// - 502 Bad Gateway
/// - 503 Service Unavailable
/// - 504 Gateway Timeout
#[inline]
pub fn is_retriable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Upper bound on a single retry delay.
pub const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Configuration for automatic retry behavior on transient errors.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Initial backoff duration before the first retry.
    /// Subsequent retries use exponential backoff (2^attempt * initial_backoff).
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::ZERO,
        }
    }

    /// Backoff before retry number `attempt` (0-based), with ±25% jitter.
    ///
    /// Saturates at [`MAX_BACKOFF`].
    fn backoff(&self, attempt: u32) -> Duration {
        let base_backoff = 2_u32
            .checked_pow(attempt)
            .and_then(|factor| self.initial_backoff.checked_mul(factor))
            .map_or(MAX_BACKOFF, |d| d.min(MAX_BACKOFF));
        let jitter = 0.75 + fastrand::f64() * 0.5; // 0.75 to 1.25
        base_backoff.mul_f64(jitter).min(MAX_BACKOFF)
    }
}

/// The base client for the Search and Key Vault APIs.
///
/// This client handles authentication, HTTP transport, and endpoint management.
/// It is used by the service crates (`azure_search_documents`,
/// `azure_security_keyvault_certificates`) to make API calls.
///
/// The client is cheaply cloneable and can be shared across threads.
#[derive(Debug, Clone)]
pub struct AzureClient {
    pub(crate) http: HttpClient,
    pub(crate) endpoint: Url,
    pub(crate) credential: AzureCredential,
    pub(crate) scope: String,
    pub(crate) retry_policy: RetryPolicy,
}

/// Builder for constructing an [`AzureClient`].
///
/// Use [`AzureClient::builder()`] to create a new builder.
#[derive(Debug, Default)]
pub struct AzureClientBuilder {
    endpoint: Option<String>,
    credential: Option<AzureCredential>,
    scope: Option<String>,
    http_client: Option<HttpClient>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    retry_policy: Option<RetryPolicy>,
}

impl AzureClient {
    /// Create a new builder for configuring an `AzureClient`.
    pub fn builder() -> AzureClientBuilder {
        AzureClientBuilder::default()
    }

    /// Get the base endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the token scope used for token credentials.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Get the retry policy configuration.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Build a full URL for an API path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be joined to the endpoint URL.
    pub fn url(&self, path: &str) -> AzureResult<Url> {
        self.endpoint
            .join(path)
            .map_err(|e| AzureError::invalid_endpoint_with_source("failed to construct URL", e))
    }

    /// Convert an absolute URL returned by the service (a `nextLink` or an
    /// operation URL) into a path relative to the endpoint, keeping its query.
    pub fn relative_path(absolute_url: &str) -> AzureResult<String> {
        let parsed = Url::parse(absolute_url).map_err(|e| {
            AzureError::invalid_endpoint_with_source("failed to parse service-provided URL", e)
        })?;

        Ok(match parsed.query() {
            Some(q) => format!("{}?{q}", parsed.path()),
            None => parsed.path().to_string(),
        })
    }

    /// Send a GET request with automatic retry on transient errors.
    pub async fn get(&self, path: &str) -> AzureResult<reqwest::Response> {
        self.send(Method::GET, path, None, &MatchConditions::none())
            .await
    }

    /// Send a POST request with a JSON body.
    pub async fn post<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> AzureResult<reqwest::Response> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::POST, path, Some(body), &MatchConditions::none())
            .await
    }

    /// Send a POST request without a body (for actions such as `search.run`).
    pub async fn post_empty(&self, path: &str) -> AzureResult<reqwest::Response> {
        self.send(Method::POST, path, None, &MatchConditions::none())
            .await
    }

    /// Send a PUT request with a JSON body and optional match conditions.
    ///
    /// Always asks for the stored representation in the response
    /// (`Prefer: return=representation`).
    pub async fn put<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
        conditions: &MatchConditions,
    ) -> AzureResult<reqwest::Response> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::PUT, path, Some(body), conditions).await
    }

    /// Send a PATCH request with a JSON body and optional match conditions.
    pub async fn patch<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
        conditions: &MatchConditions,
    ) -> AzureResult<reqwest::Response> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::PATCH, path, Some(body), conditions).await
    }

    /// Send a DELETE request with optional match conditions.
    pub async fn delete(
        &self,
        path: &str,
        conditions: &MatchConditions,
    ) -> AzureResult<reqwest::Response> {
        self.send(Method::DELETE, path, None, conditions).await
    }

    /// Send a request, retrying retriable HTTP errors (429, 500, 502, 503, 504)
    /// with exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails, the request fails after all
    /// retries, or the server returns a non-retriable error response.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        conditions: &MatchConditions,
    ) -> AzureResult<reqwest::Response> {
        let url = self.url(path)?;
        let auth = self.credential.resolve(&self.scope).await?;

        for attempt in 0..=self.retry_policy.max_retries {
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .header(auth.name, auth.expose());

            if let Some(ref etag) = conditions.if_match {
                request = request.header(IF_MATCH, etag);
            }
            if let Some(ref etag) = conditions.if_none_match {
                request = request.header(IF_NONE_MATCH, etag);
            }
            if method == Method::PUT {
                request = request.header("Prefer", "return=representation");
            }
            request = match body {
                Some(ref bytes) => request
                    .header(CONTENT_TYPE, "application/json")
                    .body(bytes.clone()),
                None if method == Method::POST => request.header(CONTENT_LENGTH, 0),
                None => request,
            };

            let response = request.send().await?;
            let status = response.status().as_u16();

            // Success - return response
            if response.status().is_success() {
                return Ok(response);
            }

            // Non-retriable error or last attempt - return error
            if !is_retriable_status(status) || attempt == self.retry_policy.max_retries {
                return Self::check_response(response).await;
            }

            let backoff = self.retry_policy.backoff(attempt);
            tracing::debug!(
                status,
                attempt,
                backoff_ms = backoff.as_millis() as u64,
                "retriable response, backing off"
            );
            tokio::time::sleep(backoff).await;
        }

        unreachable!("retry loop should return before reaching here")
    }

    /// Maximum length for error messages to prevent sensitive data leaks.
    const MAX_ERROR_MESSAGE_LEN: usize = 1000;

    /// Sanitize error messages by removing credentials that a service might echo back.
    pub(crate) fn sanitize_error_message(msg: &str) -> String {
        let mut result = msg.to_string();
        for marker in ["Bearer ", "api-key: ", "api-key="] {
            result = Self::redact_after(&result, marker);
        }
        result
    }

    /// Replace the token following each occurrence of `marker` with `[REDACTED]`.
    fn redact_after(msg: &str, marker: &str) -> String {
        let mut result = msg.to_string();
        let mut search_start = 0;
        while let Some(relative_pos) = result[search_start..].find(marker) {
            let token_start = search_start + relative_pos + marker.len();
            if token_start >= result.len() {
                break;
            }

            // Skip if already redacted
            if result[token_start..].starts_with("[REDACTED]") {
                search_start = token_start + 10;
                continue;
            }

            let token_end = result[token_start..]
                .find(|c: char| c.is_whitespace() || c == '"' || c == '\'' || c == ',')
                .map(|pos| token_start + pos)
                .unwrap_or(result.len());

            if token_end > token_start {
                result.replace_range(token_start..token_end, "[REDACTED]");
                search_start = token_start + 10; // "[REDACTED]" is 10 chars
            } else {
                search_start = token_start;
            }
        }
        result
    }

    /// Truncate a message if it exceeds the maximum length.
    /// Also sanitizes sensitive data before truncating.
    pub(crate) fn truncate_message(msg: &str) -> String {
        let sanitized = Self::sanitize_error_message(msg);

        if sanitized.len() > Self::MAX_ERROR_MESSAGE_LEN {
            let mut cut = Self::MAX_ERROR_MESSAGE_LEN;
            while !sanitized.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}... (truncated)", &sanitized[..cut])
        } else {
            sanitized
        }
    }

    /// Check the response status and return an error if not successful.
    async fn check_response(response: reqwest::Response) -> AzureResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        // Try to parse as API error
        if let Ok(error) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(err_obj) = error.get("error") {
                return Err(AzureError::Api {
                    status,
                    code: err_obj
                        .get("code")
                        .and_then(|c| c.as_str())
                        .unwrap_or("unknown")
                        .to_string(),
                    message: Self::truncate_message(
                        err_obj
                            .get("message")
                            .and_then(|m| m.as_str())
                            .unwrap_or(&body),
                    ),
                });
            }
        }

        Err(AzureError::http(status, Self::truncate_message(&body)))
    }
}

impl AzureClientBuilder {
    /// Set the service endpoint URL.
    ///
    /// For example `https://<service>.search.windows.net` or
    /// `https://<vault>.vault.azure.net`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the credential to use for authentication.
    pub fn credential(mut self, credential: AzureCredential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Set the token scope requested from token credentials.
    ///
    /// Defaults to [`DEFAULT_SCOPE`]. Ignored for API key credentials.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set a custom HTTP client.
    ///
    /// **Note:** If you provide a custom HTTP client, any timeout configuration
    /// via [`connect_timeout`](Self::connect_timeout) or
    /// [`read_timeout`](Self::read_timeout) will be ignored.
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout, covering the whole request/response cycle.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Set the retry policy for transient errors.
    ///
    /// Defaults to 3 retries with 500ms initial backoff.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Build the `AzureClient`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No endpoint or credential is provided
    /// - The endpoint URL is invalid
    /// - The HTTP client cannot be constructed
    pub fn build(self) -> AzureResult<AzureClient> {
        let http = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
                .timeout(self.read_timeout.unwrap_or(DEFAULT_READ_TIMEOUT))
                .build()?,
        };

        let endpoint_str = self
            .endpoint
            .ok_or_else(|| AzureError::MissingConfig("endpoint is required".into()))?;

        let endpoint = Url::parse(&endpoint_str)
            .map_err(|e| AzureError::invalid_endpoint_with_source("invalid endpoint URL", e))?;

        let credential = self
            .credential
            .ok_or_else(|| AzureError::MissingConfig("credential is required".into()))?;

        Ok(AzureClient {
            http,
            endpoint,
            credential,
            scope: self.scope.unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            retry_policy: self.retry_policy.unwrap_or_default(),
        })
    }
}
