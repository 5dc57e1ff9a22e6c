//! `TmdbClient` - shared transport for every resource facade.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Method, Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::error::TmdbError;
use crate::retry::{self, RetryPolicy};

/// Default base URL for TMDB API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Query string for endpoints without options.
pub(crate) const NO_QUERY: &[(&str, &str)] = &[];

/// Statuses treated as success.
const SUCCESS_STATUSES: [StatusCode; 5] = [
    StatusCode::OK,
    StatusCode::CREATED,
    StatusCode::ACCEPTED,
    StatusCode::NO_CONTENT,
    StatusCode::NOT_MODIFIED,
];

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// v3 API key, sent as the `api_key` query parameter.
    ApiKey(String),
    /// v4 read access token, sent as `Authorization: Bearer`.
    Bearer(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::Bearer(_) => f.write_str("Bearer(***)"),
        }
    }
}

/// TMDB API client.
///
/// Immutable once built; share it by reference (or in an `Arc`) across tasks.
/// Endpoints are grouped into facades such as [`TmdbClient::movies`].
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Request authentication.
    credentials: Credentials,
    /// Retry behaviour for transient failures.
    retry: RetryPolicy,
}

/// Builder for `TmdbClient`.
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    credentials: Option<Credentials>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<Client>,
    retry: RetryPolicy,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the base URL (for wiremock in tests, or a proxy).
    ///
    /// A missing trailing slash is added at build time, so `.../3` and
    /// `.../3/` are equivalent.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Authenticates with a v3 API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::ApiKey(key.into()));
        self
    }

    /// Authenticates with a v4 read access token.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Bearer(token.into()));
        self
    }

    /// Sets the User-Agent (default: `cinedex-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a preconfigured `reqwest::Client`. `user_agent` and `timeout` are ignored.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replaces the whole retry policy.
    #[must_use]
    pub const fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Enables the default retry policy (see [`RetryPolicy::auto`]).
    #[must_use]
    pub const fn auto_retry(self) -> Self {
        self.retry_policy(RetryPolicy::auto())
    }

    /// Sets the maximum number of retries (default: 0).
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.retry = self.retry.with_max_retries(max_retries);
        self
    }

    /// Sets the minimum wait between retries (default: 1s).
    #[must_use]
    pub fn min_backoff(mut self, backoff: Duration) -> Self {
        self.retry = self.retry.with_min_backoff(backoff);
        self
    }

    /// Sets the maximum wait between retries (default: 30s).
    #[must_use]
    pub fn max_backoff(mut self, backoff: Duration) -> Self {
        self.retry = self.retry.with_max_backoff(backoff);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - neither `api_key` nor `bearer_token` is set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let credentials = self
            .credentials
            .context("api_key or bearer_token is required")?;

        let mut base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };
        if base_url.cannot_be_a_base() {
            bail!("base URL cannot be a base: {base_url}");
        }
        // Relative endpoint paths only resolve under the base path when it ends in `/`.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = if let Some(client) = self.http_client {
            client
        } else {
            let user_agent = self
                .user_agent
                .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));
            let mut builder = Client::builder().user_agent(user_agent).gzip(true);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build().context("failed to build HTTP client")?
        };

        Ok(TmdbClient {
            http_client,
            base_url,
            credentials,
            retry: self.retry,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Active retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Sends one request and decodes the JSON response into `T`.
    ///
    /// `path` is relative to the base URL with path parameters already
    /// substituted. `query` is flattened into the query string; `body`, when
    /// present, is sent as JSON. Statuses 200/201/202/204/304 are success.
    ///
    /// # Errors
    ///
    /// - the URL or request cannot be built.
    /// - the network call fails (after configured retries).
    /// - the server answers with any other status ([`TmdbError::Api`] or
    ///   [`TmdbError::UnparseableError`]).
    /// - the body does not decode into `T`.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn execute<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: &Q,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("failed to join URL path: {path}"))?;

        let mut attempt = 0u32;
        loop {
            let request = self
                .build_request(method.clone(), url.clone(), query, body)
                .with_context(|| format!("failed to build request: {method} {path}"))?;

            tracing::debug!(attempt, "TMDB API request");

            let response = match self.http_client.execute(request).await {
                Ok(response) => response,
                Err(e) if RetryPolicy::is_retryable_error(&e) && self.retry.can_retry(attempt) => {
                    let delay = self.retry.backoff(attempt, None);
                    tracing::warn!(
                        attempt,
                        max_retries = self.retry.max_retries(),
                        ?delay,
                        error = %e,
                        "TMDB API request failed. Retrying..."
                    );
                    tokio::time::sleep(delay).await;
                    attempt = attempt.saturating_add(1);
                    continue;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("request failed: {method} {path}"));
                }
            };

            let status = response.status();

            if RetryPolicy::is_retryable_status(status) && self.retry.can_retry(attempt) {
                let delay = self
                    .retry
                    .backoff(attempt, retry::retry_after(response.headers()));
                tracing::warn!(
                    attempt,
                    max_retries = self.retry.max_retries(),
                    code = status.as_u16(),
                    ?delay,
                    "TMDB API transient failure. Retrying..."
                );
                tokio::time::sleep(delay).await;
                attempt = attempt.saturating_add(1);
                continue;
            }

            let text = response
                .text()
                .await
                .with_context(|| format!("failed to read response body: {method} {path}"))?;

            tracing::debug!(code = status.as_u16(), body_len = text.len(), "TMDB API response");

            if !SUCCESS_STATUSES.contains(&status) {
                return Err(TmdbError::from_response(status, &text))
                    .with_context(|| format!("{method} {path}"));
            }

            return decode_body(&text)
                .with_context(|| format!("failed to decode JSON response: {method} {path}"));
        }
    }

    /// Sends a GET request.
    pub(crate) async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(Method::GET, path, query, None::<&()>).await
    }

    /// Sends a POST request with a JSON body.
    pub(crate) async fn post<T, Q, B>(&self, path: &str, query: &Q, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, query, Some(body)).await
    }

    /// Sends a DELETE request, optionally with a JSON body.
    pub(crate) async fn delete<T, Q, B>(&self, path: &str, query: &Q, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.execute(Method::DELETE, path, query, body).await
    }

    /// Assembles a request: auth, `Accept` header, query string and body.
    fn build_request<Q, B>(
        &self,
        method: Method,
        url: Url,
        query: &Q,
        body: Option<&B>,
    ) -> reqwest::Result<Request>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let mut builder = self
            .http_client
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .query(query);

        builder = match &self.credentials {
            Credentials::ApiKey(key) => builder.query(&[("api_key", key.as_str())]),
            Credentials::Bearer(token) => builder.bearer_auth(token),
        };

        if let Some(body) = body {
            builder = builder.json(body);
        }

        builder.build()
    }
}

/// Decodes a success body. Empty bodies (204/304) decode as `null`, then `{}`.
fn decode_body<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    if text.trim().is_empty() {
        return serde_json::from_str("null").or_else(|_| serde_json::from_str("{}"));
    }
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde::Deserialize;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        id: u64,
        title: String,
    }

    async fn client_for(server: &MockServer) -> TmdbClient {
        TmdbClient::builder()
            .base_url(format!("{}/3/", server.uri()).parse().unwrap())
            .api_key("test-key")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_credentials() {
        // Arrange & Act
        let result = TmdbClient::builder().build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("api_key or bearer_token is required")
        );
    }

    #[test]
    fn test_builder_defaults() {
        // Arrange & Act
        let client = TmdbClient::builder().api_key("k").build().unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.retry_policy(), &RetryPolicy::disabled());
    }

    #[test]
    fn test_builder_retry_settings() {
        // Arrange & Act
        let client = TmdbClient::builder()
            .api_key("k")
            .max_retries(2)
            .min_backoff(Duration::from_millis(10))
            .max_backoff(Duration::from_millis(40))
            .build()
            .unwrap();

        // Assert
        let policy = client.retry_policy();
        assert_eq!(policy.max_retries(), 2);
        assert_eq!(policy.min_backoff(), Duration::from_millis(10));
        assert_eq!(policy.max_backoff(), Duration::from_millis(40));
    }

    #[test]
    fn test_builder_rejects_non_base_url() {
        // Arrange
        let url = Url::parse("mailto:someone@example.com").unwrap();

        // Act
        let result = TmdbClient::builder().api_key("k").base_url(url).build();

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_adds_trailing_slash_to_base_path() {
        // Arrange
        let url = Url::parse("http://127.0.0.1:9999/3").unwrap();

        // Act
        let client = TmdbClient::builder().api_key("k").base_url(url).build().unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9999/3/");
        assert_eq!(
            client.base_url().join("movie/550").unwrap().path(),
            "/3/movie/550"
        );
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        // Arrange
        let creds = Credentials::ApiKey(String::from("super-secret"));

        // Act
        let rendered = format!("{creds:?}");

        // Assert
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_decode_body_empty() {
        // Arrange & Act
        let unit = decode_body::<()>("");
        let sample: Sample = decode_body("  ").unwrap();

        // Assert
        assert!(unit.is_ok());
        assert_eq!(sample, Sample::default());
    }

    #[tokio::test]
    async fn test_execute_get_with_api_key() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .and(query_param("api_key", "test-key"))
            .and(header("Accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"id":550,"title":"Fight Club"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let sample: Sample = client
            .execute(Method::GET, "movie/550", NO_QUERY, None::<&()>)
            .await
            .unwrap();

        // Assert
        assert_eq!(sample.id, 550);
        assert_eq!(sample.title, "Fight Club");
    }

    #[tokio::test]
    async fn test_execute_post_sends_json_body() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/3/movie/550/rating"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({"value": 8.5})))
            .respond_with(ResponseTemplate::new(201).set_body_string(
                r#"{"success":true,"status_code":1,"status_message":"Success."}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let value: serde_json::Value = client
            .post(
                "movie/550/rating",
                NO_QUERY,
                &serde_json::json!({"value": 8.5}),
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(value["status_code"], 1);
    }

    #[tokio::test]
    async fn test_execute_accepts_all_success_statuses() {
        for code in [200u16, 201, 202, 204, 304] {
            // Arrange
            let server = MockServer::start().await;
            let body = if code == 204 || code == 304 {
                String::new()
            } else {
                String::from(r#"{"id":1}"#)
            };
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(code).set_body_string(body))
                .mount(&server)
                .await;
            let client = client_for(&server).await;

            // Act
            let result: Result<Sample> = client.get("x", NO_QUERY).await;

            // Assert
            assert!(result.is_ok(), "status {code} should succeed");
        }
    }

    #[tokio::test]
    async fn test_execute_rejects_other_2xx() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(203).set_body_string(r#"{"id":1}"#))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let result: Result<Sample> = client.get("x", NO_QUERY).await;

        // Assert
        let err = result.unwrap_err();
        let tmdb = err.downcast_ref::<TmdbError>().unwrap();
        assert_eq!(tmdb.status(), Some(StatusCode::NON_AUTHORITATIVE_INFORMATION));
    }

    #[tokio::test]
    async fn test_execute_api_error_is_typed_and_contextual() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"success":false,"status_code":34,"status_message":"The resource you requested could not be found."}"#,
            ))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let err = client.get::<Sample, _>("movie/0", NO_QUERY).await.unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "GET movie/0");
        let chain = format!("{err:#}");
        assert!(chain.contains("HTTP 404"));
        assert!(chain.contains(
            "{status_code: 34, status_message: The resource you requested could not be found., success: false}"
        ));
        assert!(matches!(
            err.downcast_ref::<TmdbError>(),
            Some(TmdbError::Api { .. })
        ));
    }

    #[tokio::test]
    async fn test_execute_non_json_error_body() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let err = client.get::<Sample, _>("movie/1", NO_QUERY).await.unwrap_err();

        // Assert
        assert!(matches!(
            err.downcast_ref::<TmdbError>(),
            Some(TmdbError::UnparseableError { .. })
        ));
        assert!(format!("{err:#}").contains("upstream exploded"));
    }

    #[tokio::test]
    async fn test_execute_decode_failure_has_context() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"not-a-number"}"#))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let err = client.get::<Sample, _>("movie/1", NO_QUERY).await.unwrap_err();

        // Assert
        assert!(
            err.to_string()
                .contains("failed to decode JSON response: GET movie/1")
        );
    }
}
