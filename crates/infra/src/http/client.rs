use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde_json::Value;
use shopfront_domain::ResolvedRequest;
use tracing::debug;

use crate::api::{ApiError, Transport};

/// HTTP transport with timeout support.
///
/// Issues each request exactly once; retrying is left to callers.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    async fn read_body(&self, response: Response, url: &str) -> Result<Value, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, url, &body));
        }

        // no body by definition
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return Ok(Value::Null);
        }

        let bytes = response.bytes().await.map_err(|err| {
            debug!(%url, error = %err, "reading HTTP response body failed");
            self.map_send_error(err)
        })?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("{url} returned invalid JSON: {e}")))
    }

    fn map_send_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::from(err)
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: ResolvedRequest) -> Result<Value, ApiError> {
        let ResolvedRequest { method, url, headers, params, body } = request;

        let mut builder = self.client.request(method.clone(), &url).headers(headers);
        if !params.is_empty() {
            builder = builder.query(&params);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        debug!(%method, %url, "sending HTTP request");

        let response = builder.send().await.map_err(|err| {
            debug!(%method, %url, error = %err, "HTTP request failed");
            self.map_send_error(err)
        })?;

        debug!(%method, %url, status = %response.status(), "received HTTP response");

        self.read_body(response, &url).await
    }
}

fn map_status_error(status: StatusCode, url: &str, body: &str) -> ApiError {
    let message = if body.is_empty() {
        format!("{url} returned status {status}")
    } else {
        format!("{url} returned status {status}: {body}")
    };

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ApiError::Auth(message)
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        ApiError::RateLimit(message)
    } else if status.is_server_error() {
        ApiError::Server(message)
    } else if status.is_client_error() {
        ApiError::Client(message)
    } else {
        ApiError::Network(message)
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(30), user_agent: None, default_headers: None }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Headers sent with every request unless the request sets them itself
    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    pub fn build(self) -> Result<HttpClient, ApiError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        Ok(HttpClient { client, timeout: self.timeout })
    }
}
